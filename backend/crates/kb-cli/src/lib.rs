//! kb-cli library
//!
//! Command definitions and handlers behind the `kb` binary, exported so
//! they can be driven from tests.

pub mod app;
pub mod attachment_commands;
pub mod board_commands;
pub mod board_render;
pub mod cli;
pub mod column_commands;
pub mod commands;
pub mod comment_commands;
pub mod dispatch;
pub mod logger;
pub mod project_commands;
pub mod task_commands;
pub mod worksheet_commands;

#[cfg(test)]
mod tests;

pub use app::{App, AppError, AppResult, Output};
pub use cli::Cli;
pub use dispatch::execute;
