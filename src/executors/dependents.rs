//! Dependents command executor

use miette::{Result, WrapErr};

use super::load_graph;
use crate::cli::OutputFormat;
use crate::config::DependentsConfig;
use crate::executors::CommandExecutor;
use crate::reports::{
    DependentsReport, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};

pub struct DependentsExecutor;

impl CommandExecutor for DependentsExecutor {
    type Config = DependentsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = load_graph(&config.manifest, false)?;
        let report = DependentsReport::from_graph(&graph, &config.node);

        let output = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&report),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report),
        }
        .wrap_err("Failed to generate dependents report")?;

        print!("{output}");
        if config.format == OutputFormat::Json {
            println!();
        }

        Ok(())
    }
}
