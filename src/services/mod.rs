//! Reference implementations of the external collaborators.
//!
//! These stay deliberately thin: the HTTP client is a plain reqwest wrapper
//! around the three jobs endpoints, and the console ports render to stdout
//! so the binary runs end to end. Neither carries core logic.

pub mod api_client;
pub mod console;

pub use api_client::HttpJobSource;
pub use console::{ConsoleListPort, ConsoleMapPort, ConsoleStatsPort};
