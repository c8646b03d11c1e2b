//! Preview binary - renders the page to stdout without starting a server
//!
//! Usage:
//!   cargo run --bin preview                              # Default language, first tab
//!   cargo run --bin preview -- --lang it --tab borgo_pio
//!   cargo run --bin preview -- --nav --book              # Open the drawer and booking widget
//!
//! Honors CONTENT_FILE, LOCALES_DIR and DEFAULT_LANGUAGE like the server.

use anyhow::{bail, Context, Result};
use pastamore_site::config::Config;
use pastamore_site::server::AppState;
use pastamore_site::state::PageQuery;
use tracing::info;

fn parse_args(args: &[String]) -> Result<PageQuery> {
    let mut query = PageQuery::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => {
                query.lang = Some(iter.next().context("--lang needs a value")?.clone());
            }
            "--tab" => {
                query.tab = Some(iter.next().context("--tab needs a value")?.clone());
            }
            "--nav" => query.nav = Some("open".to_string()),
            "--book" => query.book = Some("open".to_string()),
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(query)
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays pure HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pastamore_site=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = parse_args(&args)?;

    let config = Config::from_env()?;
    let state = AppState::load(&config)?;

    let html = state.render(&query);
    info!("Rendered {} bytes", html.len());
    println!("{}", html);

    let report = state.locales.metrics().report();
    if report.misses > 0 {
        eprintln!("{}", report.format());
        for (language, key) in state.locales.missing_keys() {
            eprintln!("  missing [{}] {}", language, key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let query = parse_args(&args(&[
            "--lang",
            "it",
            "--tab",
            "borgo_pio",
            "--nav",
            "--book",
        ]))
        .unwrap();
        assert_eq!(query.lang.as_deref(), Some("it"));
        assert_eq!(query.tab.as_deref(), Some("borgo_pio"));
        assert_eq!(query.nav.as_deref(), Some("open"));
        assert_eq!(query.book.as_deref(), Some("open"));
    }

    #[test]
    fn test_parse_empty() {
        let query = parse_args(&[]).unwrap();
        assert!(query.lang.is_none());
        assert!(query.tab.is_none());
    }

    #[test]
    fn test_missing_value() {
        assert!(parse_args(&args(&["--lang"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(&args(&["--verbose"])).unwrap_err();
        assert!(err.to_string().contains("--verbose"));
    }
}
