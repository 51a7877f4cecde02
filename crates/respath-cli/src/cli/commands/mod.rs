//! CLI command handlers. Each command is in its own file.

mod config;
mod date;
mod resolve;

pub use config::run_config;
pub use date::run_date;
pub use resolve::{run_resolve, OutputFormat};
