//! # hn-hiring
//!
//! Fetches Hacker News "Who is hiring?" threads and archives them as JSON
//! and SQLite.
//!
//! ## Pipeline
//!
//! - **Select** - The newest story submissions of the `whoishiring` account
//!   (non-story submissions such as jobs are dropped)
//! - **Resolve** - Each story's comment tree, fetching sibling comments
//!   concurrently and completing every branch depth-first
//! - **Archive** - The assembled threads as a pretty-printed JSON document
//!   and as normalized relational rows with per-row audit metadata
//!
//! ## Quick Start
//!
//! ```no_run
//! use hn_hiring::{Config, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         environment: Environment::Development,
//!         out_dir: "./archive".into(),
//!     };
//!
//!     hn_hiring::run(&config).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Hacker News API client
pub mod client;
/// Configuration types
pub mod config;
/// Relational archive persistence
pub mod db;
/// Error types
pub mod error;
/// Output sink for run artifacts
pub mod output;
/// Serialization strategies and factory
pub mod serialize;
/// Story assembly and comment aggregation
pub mod service;
/// Core wire and resolved types
pub mod types;

// Re-export commonly used types
pub use client::HnClient;
pub use config::{Config, Environment};
pub use db::Database;
pub use error::{DatabaseError, Error, Result};
pub use output::OutputWriter;
pub use serialize::{Format, Serializer};
pub use service::{HIRING_USER, HiringService};
pub use types::{Comment, Item, StoryThread, User};

/// Run one fetch-and-archive pass
///
/// Resolves the hiring account's newest story threads and writes the run's
/// artifacts (`output.json`, `output.db`) under the configured output
/// directory.
///
/// # Example
///
/// ```no_run
/// use hn_hiring::{Config, Environment};
///
/// # async fn example() -> hn_hiring::Result<()> {
/// let config = Config {
///     environment: Environment::Production,
///     out_dir: "./archive".into(),
/// };
/// hn_hiring::run(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run(config: &Config) -> Result<()> {
    let service = HiringService::new(HnClient::new());
    let stories = service.stories_with_comments(HIRING_USER).await?;
    tracing::info!(
        stories = stories.len(),
        environment = %config.environment,
        "assembled hiring story threads"
    );

    OutputWriter::new(&config.out_dir).write_all(&stories).await
}
