//! Spotify "now playing" service library
//!
//! This library backs a single HTTP endpoint that reports what a Spotify user is
//! listening to right now, or what they listened to last. Provider credentials
//! stay on the server; callers only ever see the normalized JSON.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the playback status endpoint and health checks
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every request path
//! - `playback` - Current/recent/placeholder decision logic
//! - `server` - Router construction and the HTTP listener
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Provider payloads and the normalized response shapes
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use nowplaying::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> nowplaying::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(&config::server_addr()).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod playback;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// A convenient Result type alias for process-level plumbing.
///
/// Used where failures are reported to the operator rather than to an HTTP
/// caller, such as loading `.env` files or binding the listener. Request
/// handling uses [`Result`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message to stderr with a red exclamation mark and exits.
///
/// Only for failures the process cannot continue from, such as an unusable
/// listen address. Request failures are answered, never fatal.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning message to stderr with a yellow exclamation mark.
///
/// This is the server-side log line for failed requests.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
