//! Emit command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::load_graph;
use crate::config::EmitOptions;
use crate::executors::CommandExecutor;

pub struct EmitExecutor;

impl CommandExecutor for EmitExecutor {
    type Config = EmitOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = load_graph(&config.manifest, config.invert)?;

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        writeln!(output_writer, "{}", graph.to_text())
            .and_then(|()| output_writer.flush())
            .into_diagnostic()
            .wrap_err("Failed to write DOT output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
