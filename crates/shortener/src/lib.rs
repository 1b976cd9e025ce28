//! # shortener
//!
//! URL validation/normalization, a client for a third-party shortening endpoint, and
//! in-memory per-user usage counters. No chat dependency; the bot crate wires these in.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use shortener::ShortenClient;
//!
//! async fn example() {
//!     let client = ShortenClient::new("https://short.example/api/KEY", Duration::from_secs(10));
//!     match client.shorten("example.com").await {
//!         Ok(short) => println!("{}", short),
//!         Err(e) => eprintln!("{} ({:?})", e, e.kind()),
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod stats;
pub mod validation;

pub use client::ShortenClient;
pub use config::{EnvShortenerConfig, ShortenerConfig, DEFAULT_TIMEOUT_SECS};
pub use error::{ConfigError, ErrorKind, ShortenError};
pub use stats::UserStats;
pub use validation::{extract_urls, is_valid, normalize, DEFAULT_SCHEME};
