//! # Configuration Module
//!
//! Option structures for every dotgraph command. Each one is assembled
//! through a builder implementing [`ConfigBuilder`](crate::common::ConfigBuilder),
//! which reports any field that was never set.
//!
//! ## Command Configurations
//!
//! - **EmitOptions**: print or save the DOT text of a manifest
//! - **RenderOptions**: write `<base>.dot` and render `<base>.<format>`
//! - **DependentsConfig**: list the nodes pointing at a given node
//!
//! ## Example
//!
//! ```
//! use dotgraph::common::ConfigBuilder;
//! use dotgraph::config::RenderOptions;
//!
//! let options = RenderOptions::builder()
//!     .with_manifest("graph.toml".into())
//!     .with_output("target/graph".into())
//!     .with_format(Some("svg".to_string()))
//!     .with_renderer("dot".to_string())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.format.as_deref(), Some("svg"));
//! ```

pub mod dependents;
pub mod emit;
pub mod render;

pub use dependents::DependentsConfig;
pub use emit::EmitOptions;
pub use render::RenderOptions;
