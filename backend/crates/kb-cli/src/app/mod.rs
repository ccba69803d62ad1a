pub(crate) mod app;
pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod output;

pub use app::App;
pub use error::{AppError, Result as AppResult};
pub use output::Output;
