//! Scholar Profile Export
//!
//! Pages through the publication list of a Google Scholar profile, extracts
//! per-publication metadata from the listing HTML, and writes the collected
//! records to a JSON (or CSV) file.
//!
//! # Pipeline
//!
//! - **client**: fetches one result page per offset (`cstart`)
//! - **extract**: pulls six fields out of every `tr.gsc_a_tr` row
//! - **scrape**: drives pagination and decides when to stop
//! - **export**: serializes the ordered records
//!
//! # Example
//!
//! ```no_run
//! use scholar_profile_export::{Config, ScholarClient, Scraper, export};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new("https://scholar.google.com/citations?user=XXXX");
//!     let client = ScholarClient::new(&config)?;
//!     let report = Scraper::new(&client, &config).run().await?;
//!
//!     export::write_records(&config.output_path, &report.records, config.format)?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod input;
pub mod models;
pub mod scrape;

pub use client::{PageSource, ScholarClient};
pub use config::Config;
pub use error::{ClientError, ExportError, ExtractError, ScrapeError, StopReason};
pub use models::{ExportFormat, LanguageTag, PublicationRecord};
pub use scrape::{ScrapeReport, Scraper};
