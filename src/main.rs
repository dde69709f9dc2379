//! serp-scout CLI - single Google search from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use serp_scout::{search, SafeSearch, SearchOptions};

/// serp-scout - Google results from the command line
#[derive(Parser)]
#[command(name = "serp-scout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    query: String,

    /// Number of results wanted
    #[arg(short, long)]
    num: Option<usize>,

    /// Interface language (e.g. en, de)
    #[arg(short, long)]
    lang: Option<String>,

    /// Country code for regional results (e.g. us, fr)
    #[arg(short, long)]
    region: Option<String>,

    /// Pagination offset
    #[arg(short, long)]
    start: Option<usize>,

    /// Safe search mode (active or off)
    #[arg(long)]
    safe: Option<SafeSearch>,

    /// Drop results whose URL was already seen
    #[arg(short, long)]
    unique: bool,

    /// Request timeout in milliseconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Proxy URL (e.g., http://127.0.0.1:8080)
    #[arg(short, long)]
    proxy: Option<String>,

    /// JSON file with search options; flags override it
    #[arg(long)]
    options: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let options = build_options(&cli)?;
    let results = search(&cli.query, &options).await?;

    match cli.format {
        OutputFormat::Text => {
            println!(
                "\nSearch results for \"{}\" ({} results):\n",
                cli.query,
                results.len()
            );

            for (i, result) in results.iter().enumerate() {
                println!("{}. {}", i + 1, result.title);
                println!("   URL: {}", result.url);
                if !result.description.is_empty() {
                    println!("   {}", truncate(&result.description, 150));
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Compact => {
            for result in &results {
                println!("{}\t{}", result.title, result.url);
            }
        }
    }

    Ok(())
}

fn build_options(cli: &Cli) -> Result<SearchOptions> {
    let mut options = match &cli.options {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file {}", path.display()))?;
            serde_json::from_str::<SearchOptions>(&raw)
                .with_context(|| format!("Invalid options file {}", path.display()))?
        }
        None => SearchOptions::default(),
    };

    if let Some(num) = cli.num {
        options.num_results = num;
    }
    if let Some(lang) = &cli.lang {
        options.lang = lang.clone();
    }
    if let Some(region) = &cli.region {
        options.region = Some(region.clone());
    }
    if let Some(start) = cli.start {
        options.start = start;
    }
    if let Some(safe) = cli.safe {
        options.safe = safe;
    }
    if cli.unique {
        options.unique = true;
    }
    if let Some(timeout) = cli.timeout {
        options.timeout = timeout;
    }
    if let Some(proxy) = &cli.proxy {
        options.proxy = Some(proxy.clone());
    }

    Ok(options)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_build_options_defaults() {
        let cli = Cli::parse_from(["serp-scout", "rust"]);
        assert_eq!(build_options(&cli).unwrap(), SearchOptions::default());
    }

    #[test]
    fn test_build_options_from_flags() {
        let cli = Cli::parse_from([
            "serp-scout", "rust", "-n", "3", "-l", "de", "-r", "at", "-s", "10", "--safe", "off",
            "-u", "-t", "900", "-p", "http://127.0.0.1:3128",
        ]);
        let options = build_options(&cli).unwrap();
        assert_eq!(options.num_results, 3);
        assert_eq!(options.lang, "de");
        assert_eq!(options.region.as_deref(), Some("at"));
        assert_eq!(options.start, 10);
        assert_eq!(options.safe, SafeSearch::Off);
        assert!(options.unique);
        assert_eq!(options.timeout, 900);
        assert_eq!(options.proxy.as_deref(), Some("http://127.0.0.1:3128"));
    }

    #[test]
    fn test_build_options_flags_override_file() {
        let file = options_file(
            r#"{"num_results":7,"lang":"fr","safe":"off","region":"fr","timeout":2000}"#,
        );
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "serp-scout", "rust", "--options", path, "-n", "2", "--safe", "active",
        ]);
        let options = build_options(&cli).unwrap();
        assert_eq!(options.num_results, 2);
        assert_eq!(options.safe, SafeSearch::Active);
        assert_eq!(options.lang, "fr");
        assert_eq!(options.region.as_deref(), Some("fr"));
        assert_eq!(options.timeout, 2000);
    }

    #[test]
    fn test_build_options_invalid_file() {
        let file = options_file("{not json");
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["serp-scout", "rust", "--options", path]);
        assert!(build_options(&cli).is_err());
    }

    #[test]
    fn test_safe_flag_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["serp-scout", "rust", "--safe", "strict"]).is_err());
    }
}
