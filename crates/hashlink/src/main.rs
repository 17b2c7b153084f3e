//! hashlink CLI
//!
//! Builds a hash-linked chain from payload lines, verifies it, and prints the
//! verdict. Exits with status 0 when the chain is valid and 1 otherwise.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use hashlink::source::{read_lines, SAMPLE_PAYLOADS};
use hashlink::{verify_chain_report, EmptyPayloadPolicy, Ledger, LedgerConfig, Record};

/// hashlink - build and verify a hash-linked chain
#[derive(Parser, Debug)]
#[command(name = "hashlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with one payload per line (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Use the built-in sample payloads
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Path to a JSON ledger configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject empty payloads instead of appending them
    #[arg(long)]
    reject_empty: bool,

    /// Overwrite the payload of this record after building, before verifying
    #[arg(long, value_name = "INDEX")]
    tamper: Option<usize>,

    /// Print every record before the verdict
    #[arg(long)]
    dump: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let valid = run(&cli, &mut stdout.lock())?;
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build, optionally tamper, verify, print. Returns whether the chain is valid.
fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let config = load_config(cli)?;
    let payloads = load_payloads(cli)?;

    let mut ledger = Ledger::new(config);
    tracing::debug!(config = ?ledger.config(), payloads = payloads.len(), "building chain");
    ledger
        .append_all(payloads)
        .context("failed to build chain")?;

    let report = match cli.tamper {
        None => {
            if cli.dump {
                dump(ledger.chain().records(), out)?;
            }
            ledger.verify_report()
        }
        Some(index) => {
            let mut records = ledger.into_chain().into_records();
            let len = records.len();
            let Some(record) = records.get_mut(index) else {
                bail!("cannot tamper with record {index}: chain has {len} records");
            };
            record.payload = Bytes::from_static(b"tampered");
            tracing::warn!(index, "overwrote record payload");
            if cli.dump {
                dump(&records, out)?;
            }
            verify_chain_report(&records)
        }
    };

    match cli.format {
        Format::Text => {
            writeln!(out, "chain is valid: {}", report.valid)?;
            for failure in &report.failures {
                writeln!(out, "  record {}: {}", failure.position, failure.issue)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(report.valid)
}

fn load_config(cli: &Cli) -> Result<LedgerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            LedgerConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => LedgerConfig::default(),
    };
    if cli.reject_empty {
        config.empty_payloads = EmptyPayloadPolicy::Reject;
    }
    Ok(config)
}

fn load_payloads(cli: &Cli) -> Result<Vec<Vec<u8>>> {
    if cli.sample {
        return Ok(SAMPLE_PAYLOADS.iter().map(|s| s.as_bytes().to_vec()).collect());
    }
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_lines(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => read_lines(io::stdin().lock()).context("failed to read stdin"),
    }
}

fn dump(records: &[Record], out: &mut impl Write) -> Result<()> {
    for record in records {
        let previous = record
            .previous_digest
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "#{} {} prev={} ts={} {:?}",
            record.index,
            record.digest,
            previous,
            record.timestamp,
            record.payload_lossy()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (Result<bool>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn payload_file(contents: impl AsRef<[u8]>) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_ref()).unwrap();
        file
    }

    #[test]
    fn test_sample_chain_is_valid() {
        let (result, out) = run_args(&["hashlink", "--sample"]);
        assert!(result.unwrap());
        assert_eq!(out, "chain is valid: true\n");
    }

    #[test]
    fn test_tamper_interior_record() {
        let (result, out) = run_args(&["hashlink", "--sample", "--tamper", "3"]);
        assert!(!result.unwrap());
        assert!(out.starts_with("chain is valid: false\n"));
        assert!(out.contains("record 3: digest mismatch"));
    }

    #[test]
    fn test_tamper_out_of_range() {
        let (result, _) = run_args(&["hashlink", "--sample", "--tamper", "99"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reads_payload_file() {
        let file = payload_file("a\nb\nc\n");
        let path = file.path().to_str().unwrap();
        let (result, out) = run_args(&["hashlink", path, "--dump"]);

        assert!(result.unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("#0 0000000000000000 prev=- "));
        assert!(lines[3].ends_with("\"c\""));
        assert_eq!(lines[4], "chain is valid: true");
    }

    #[test]
    fn test_reads_non_utf8_payload_file() {
        let file = payload_file(b"a\n\xffb\nc\n");
        let path = file.path().to_str().unwrap();
        let (result, out) = run_args(&["hashlink", path, "--dump"]);

        assert!(result.unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].ends_with("\"\u{fffd}b\""));
        assert_eq!(lines[4], "chain is valid: true");
    }

    #[test]
    fn test_blank_line_fails_verification() {
        let file = payload_file("a\n\nc\n");
        let path = file.path().to_str().unwrap();
        let (result, out) = run_args(&["hashlink", path]);

        assert!(!result.unwrap());
        assert!(out.contains("record 2: payload is empty"));
    }

    #[test]
    fn test_reject_empty_flag() {
        let file = payload_file("a\n\nc\n");
        let path = file.path().to_str().unwrap();
        let (result, _) = run_args(&["hashlink", path, "--reject-empty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file() {
        let config = payload_file(r#"{"empty_payloads": "reject"}"#);
        let input = payload_file("a\n\n");
        let (result, _) = run_args(&[
            "hashlink",
            input.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_report() {
        let (result, out) = run_args(&["hashlink", "--sample", "--tamper", "2", "--format", "json"]);
        assert!(!result.unwrap());

        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["valid"], false);
        assert_eq!(report["records_checked"], 9);
        assert_eq!(report["first_invalid"], 2);
    }

    #[test]
    fn test_sample_conflicts_with_input() {
        assert!(Cli::try_parse_from(["hashlink", "--sample", "file.txt"]).is_err());
    }
}
