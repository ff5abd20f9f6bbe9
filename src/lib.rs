pub mod banner;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod logger;
pub mod login;
pub mod markup;
pub mod portfolio;
pub mod reveal;
pub mod shell;
pub mod terminal;
pub mod timer;

#[cfg(test)]
mod testing;

pub use config::{LoginConfig, TerminalConfig};
pub use content::ContentStore;
pub use error::{PortfolioError, Result};
pub use portfolio::Portfolio;
pub use terminal::{Completion, Terminal, TerminalState};
