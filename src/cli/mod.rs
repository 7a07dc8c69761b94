//! # CLI Module
//!
//! Command-line entry points for the now-playing service.
//!
//! - [`serve`] - runs the HTTP service
//! - [`now`] - performs a single lookup from the terminal, useful to check
//!   credentials before deploying
//!
//! ## Usage Patterns
//!
//! ```bash
//! nowplaying serve                         # bind SERVER_ADDRESS or 0.0.0.0:3000
//! nowplaying serve --address 127.0.0.1:8080
//! nowplaying now                           # table output
//! nowplaying now --json                    # exact endpoint body
//! ```
//!
//! Both commands report fatal problems through the `error!` macro, which exits
//! the process.

mod now;
mod serve;

pub use now::now;
pub use serve::serve;
