//! Command implementations shared by the `mortgage` and `mortgage-saver`
//! binaries.

pub mod commands;
pub mod input;
pub mod logging;
pub mod output;

pub use output::{OutputFormat, Render};
