pub mod console;
pub mod error;
pub mod logger;
pub mod navigation;
pub mod observer;

pub use console::Console;
pub use error::{AppError, Result as AppResult};
pub use navigation::Route;
