//! Schema Builder CLI
//!
//! Command-line interface for building and checking schema.org JSON-LD.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use schema_builder::{
    build_schema_from_state, check_schema, fields_for, load_params_auto, sample_params, self_test,
    CheckError, SchemaKind,
};

#[derive(Parser)]
#[command(name = "schema-builder")]
#[command(about = "Build and check schema.org JSON-LD from form state")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr (default: RUST_LOG or warnings only)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build JSON-LD from an input bundle
    Build {
        /// Input bundle: file path or URL (http:// or https://)
        input: String,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Build JSON-LD and check it against the output contract for its type
    Check {
        /// Input bundle: file path or URL (http:// or https://)
        input: String,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Print the sample input bundle for a type
    Sample {
        /// Schema type (e.g. Article, "Local Business", faq)
        kind: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Build and check every type's sample
    Selftest {
        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// List the form fields a type reads, or every type when none is given
    Fields {
        /// Schema type
        kind: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check URLs and report each as valid, broken or skipped
    #[cfg(feature = "remote")]
    CheckUrls {
        /// URLs to check
        #[arg(required = true)]
        urls: Vec<String>,

        /// Parallel workers (1-20)
        #[arg(long, default_value_t = 6)]
        concurrency: usize,

        /// Per-request timeout in milliseconds
        #[arg(long, default_value_t = 10_000)]
        timeout_ms: u64,
    },

    /// Fetch robots.txt from a site's origin
    #[cfg(feature = "remote")]
    FetchRobots {
        /// Any URL on the site
        url: String,

        /// Request timeout in milliseconds
        #[arg(long, default_value_t = 10_000)]
        timeout_ms: u64,
    },

    /// Fetch a URL and report status, content type and body
    #[cfg(feature = "remote")]
    FetchUrl {
        url: String,

        /// GET or HEAD
        #[arg(long, default_value = "GET")]
        method: String,

        /// Request timeout in milliseconds
        #[arg(long, default_value_t = 10_000)]
        timeout_ms: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            pretty,
        } => run_build(&input, output, pretty),
        Commands::Check { input, json } => run_check(&input, json),
        Commands::Sample { kind, pretty } => run_sample(&kind, pretty),
        Commands::Selftest { json } => run_selftest(json),
        Commands::Fields { kind, json } => run_fields(kind.as_deref(), json),
        #[cfg(feature = "remote")]
        Commands::CheckUrls {
            urls,
            concurrency,
            timeout_ms,
        } => remote::run_check_urls(&urls, concurrency, timeout_ms),
        #[cfg(feature = "remote")]
        Commands::FetchRobots { url, timeout_ms } => remote::run_fetch_robots(&url, timeout_ms),
        #[cfg(feature = "remote")]
        Commands::FetchUrl {
            url,
            method,
            timeout_ms,
        } => remote::run_fetch_url(&url, &method, timeout_ms),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_build(input: &str, output: Option<PathBuf>, pretty: bool) -> Result<(), u8> {
    let params = load_params_auto(input).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let schema = build_schema_from_state(&params);
    let json_output = to_json(&schema, pretty)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_check(input: &str, json_output: bool) -> Result<(), u8> {
    let params = load_params_auto(input).map_err(|e| {
        report_error(json_output, &format!("loading input: {}", e));
        e.exit_code() as u8
    })?;

    let schema = build_schema_from_state(&params);

    match check_schema(&params.kind, &schema) {
        Ok(()) => {
            if json_output {
                println!("{}", serde_json::json!({ "valid": true, "schema": schema }));
            } else {
                println!("Valid {}", params.kind);
            }
            Ok(())
        }
        Err(CheckError::Failed { kind, issues }) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": false,
                    "type": kind,
                    "errors": issues
                });
                println!("{}", output);
            } else {
                eprintln!("{} check failed:", kind);
                for issue in issues {
                    eprintln!("  {}", issue);
                }
            }
            Err(1)
        }
        Err(e) => {
            report_error(json_output, &e.to_string());
            Err(e.exit_code() as u8)
        }
    }
}

/// Output an error message in plain text or JSON format.
fn report_error(json_output: bool, msg: &str) {
    if json_output {
        println!("{}", serde_json::json!({ "valid": false, "error": msg }));
    } else {
        eprintln!("Error: {}", msg);
    }
}

fn run_sample(kind: &str, pretty: bool) -> Result<(), u8> {
    let params = sample_params(&SchemaKind::parse(kind));
    println!("{}", to_json(&params, pretty)?);
    Ok(())
}

fn run_selftest(json_output: bool) -> Result<(), u8> {
    let report = self_test();

    if json_output {
        println!("{}", to_json(&report, true)?);
    } else {
        println!("Checking {} sample schemas ...\n", report.results.len());
        for entry in &report.results {
            if entry.passed {
                println!("  \x1b[32m✓\x1b[0m {}", entry.kind);
            } else {
                println!("  \x1b[31m✗\x1b[0m {}", entry.kind);
                for issue in &entry.issues {
                    println!("    {}", issue);
                }
            }
        }

        println!();
        if report.is_ok() {
            println!("\x1b[32m✓ {} types checked, all passed\x1b[0m", report.passed);
        } else {
            println!(
                "\x1b[31m✗ {} types checked: {} passed, {} failed\x1b[0m",
                report.results.len(),
                report.passed,
                report.failed
            );
        }
    }

    if report.is_ok() {
        Ok(())
    } else {
        Err(1)
    }
}

fn run_fields(kind: Option<&str>, json_output: bool) -> Result<(), u8> {
    let Some(kind) = kind else {
        for kind in SchemaKind::ALL.iter() {
            println!("{:<15} {}", kind.schema_type(), kind.label());
        }
        return Ok(());
    };

    let kind = SchemaKind::parse(kind);
    let fields = fields_for(&kind);

    if json_output {
        println!("{}", to_json(&fields, true)?);
        return Ok(());
    }

    if fields.is_empty() {
        println!("{} has no dedicated fields; every field is copied as-is", kind);
        return Ok(());
    }

    println!("{} ({})", kind.label(), kind.schema_type());
    for spec in fields {
        let marker = if spec.required { "*" } else { " " };
        println!("  {}{:<28} {}", marker, spec.key, spec.label);
    }

    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, u8> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })
}

#[cfg(feature = "remote")]
mod remote {
    use std::time::Duration;

    use schema_builder::{check_urls, fetch_robots, fetch_url, CheckOptions, FetchMethod, UrlStatus};

    use super::to_json;

    pub(super) fn run_check_urls(urls: &[String], concurrency: usize, timeout_ms: u64) -> Result<(), u8> {
        let options = CheckOptions::new()
            .concurrency(concurrency)
            .timeout(Duration::from_millis(timeout_ms));

        let results = check_urls(urls, &options).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;

        println!("{}", to_json(&serde_json::json!({ "results": results }), true)?);

        if results.iter().any(|r| r.status == UrlStatus::Broken) {
            Err(1)
        } else {
            Ok(())
        }
    }

    pub(super) fn run_fetch_robots(url: &str, timeout_ms: u64) -> Result<(), u8> {
        let response = fetch_robots(url, Duration::from_millis(timeout_ms)).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;

        println!("{}", to_json(&response, true)?);
        Ok(())
    }

    pub(super) fn run_fetch_url(url: &str, method: &str, timeout_ms: u64) -> Result<(), u8> {
        let response = FetchMethod::parse(method)
            .and_then(|method| fetch_url(url, method, Duration::from_millis(timeout_ms)))
            .map_err(|e| {
                eprintln!("Error: {}", e);
                e.exit_code() as u8
            })?;

        println!("{}", to_json(&response, true)?);
        Ok(())
    }
}
