//! Scholar Profile Export - Entry Point
//!
//! Scrapes every publication of one Google Scholar profile and writes them to a file.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::builder::TypedValueParser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_profile_export::config::{FetchErrorPolicy, RowErrorPolicy, scholar};
use scholar_profile_export::scrape::{ConsoleProgress, NullProgress, Progress};
use scholar_profile_export::{Config, ExportFormat, ScholarClient, Scraper, export, input};

#[derive(Parser, Debug)]
#[command(name = "scholar-profile-export")]
#[command(about = "Export the publication list of a Google Scholar profile")]
#[command(version)]
struct Cli {
    /// Profile URL, e.g. https://scholar.google.com/citations?user=XXXX (prompted for if absent)
    #[arg(long, env = scholar::BASE_URL_ENV)]
    url: Option<String>,

    /// Output file
    #[arg(short, long, default_value = scholar::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Publications requested per page
    #[arg(long, default_value_t = scholar::PAGE_SIZE, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    page_size: usize,

    /// Stop after this many pages
    #[arg(long)]
    max_pages: Option<usize>,

    /// Skip rows that cannot be parsed instead of stopping
    #[arg(long)]
    skip_malformed_rows: bool,

    /// Fail without writing output when a page cannot be fetched
    #[arg(long)]
    abort_on_fetch_error: bool,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Do not print each publication as it is scraped
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn into_config(self, base_url: String) -> Config {
        Config {
            page_size: self.page_size,
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            max_pages: self.max_pages,
            row_policy: if self.skip_malformed_rows {
                RowErrorPolicy::Skip
            } else {
                RowErrorPolicy::Stop
            },
            fetch_policy: if self.abort_on_fetch_error {
                FetchErrorPolicy::Abort
            } else {
                FetchErrorPolicy::Stop
            },
            output_path: self.output,
            format: self.format,
            ..Config::new(base_url)
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries the publication blocks
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let base_url = match cli.url.take() {
        Some(url) => url,
        None => input::prompt_base_url(std::io::stdin().lock(), std::io::stdout())?,
    };

    let quiet = cli.quiet;
    let config = cli.into_config(base_url);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %config.base_url,
        page_size = config.page_size,
        "Starting profile export"
    );

    let client = ScholarClient::new(&config)?;
    let scraper = Scraper::new(&client, &config);

    let mut progress: Box<dyn Progress> =
        if quiet { Box::new(NullProgress) } else { Box::new(ConsoleProgress) };
    let report = scraper.run_with(progress.as_mut()).await?;

    export::write_records(&config.output_path, &report.records, config.format)?;

    println!("Output written: {}", config.output_path.display());
    Ok(())
}
