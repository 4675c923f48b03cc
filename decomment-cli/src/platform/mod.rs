//! Terminal output

pub mod cli;

pub use cli::{render_report, write_report};
