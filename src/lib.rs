// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod evaluator;
pub mod history;
pub mod logging;
pub mod round;
pub mod runtime;
pub mod ui;
pub mod util;

pub use app::{App, AppState, Control};
pub use evaluator::{evaluate, Appearance};
pub use round::{GuessOutcome, Round, RoundStatus};
