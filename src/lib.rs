// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod projection;

// Re-export commonly used items
pub use client::GitHubClient;
pub use config::{get_api_token, load_config, save_config, Config};
pub use error::{GitHubError, GitHubResult};
pub use models::*;
