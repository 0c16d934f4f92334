//! Argument parsing and record processing for the `tagline` binary.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{Context, Result};
use serde_json::Value;
use tagline::TagLineGenerator;
use tracing::debug;

use crate::config::LogLevel;
use crate::error::CliError;

/// Generate length-bounded tag lines from JSON metadata records.
#[derive(Parser, Debug)]
#[command(name = "tagline", version, about)]
pub struct Cli {
    /// JSON file holding the generator settings.
    #[arg(long, short = 's', value_name = "FILE")]
    pub settings: PathBuf,

    /// Print a JSON array of lines instead of one line per record.
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Files holding a record object or an array of records; `-` or no file
    /// reads standard input.
    #[arg(value_name = "RECORD_FILE")]
    pub records: Vec<PathBuf>,
}

impl Cli {
    /// Compile the generator named by `--settings`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not hold valid settings.
    pub fn load_generator(&self) -> Result<TagLineGenerator> {
        let text = fs::read_to_string(&self.settings)
            .wrap_err_with(|| format!("failed to read settings from {}", self.settings.display()))?;
        let generator = TagLineGenerator::from_json_str(&text)
            .map_err(CliError::from)
            .wrap_err_with(|| format!("failed to load settings from {}", self.settings.display()))?;
        Ok(generator)
    }

    /// Paths to read records from, in order.
    #[must_use]
    pub fn record_sources(&self) -> Vec<&Path> {
        if self.records.is_empty() {
            vec![Path::new(STDIN_MARKER)]
        } else {
            self.records.iter().map(PathBuf::as_path).collect()
        }
    }
}

const STDIN_MARKER: &str = "-";

/// Read every record from the given sources.
///
/// # Errors
///
/// Fails when a source cannot be read or is not valid JSON.
pub fn read_records(sources: &[&Path]) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    for source in sources {
        let text = read_source(source)?;
        let parsed = parse_records(&text)
            .wrap_err_with(|| format!("failed to parse records from {}", source.display()))?;
        debug!(source = %source.display(), count = parsed.len(), "read records");
        records.extend(parsed);
    }
    Ok(records)
}

fn read_source(source: &Path) -> Result<String> {
    if source == Path::new(STDIN_MARKER) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .wrap_err("failed to read records from standard input")?;
        return Ok(text);
    }
    fs::read_to_string(source)
        .wrap_err_with(|| format!("failed to read records from {}", source.display()))
}

/// Split JSON text into records.
///
/// The text may hold several JSON documents back to back. An array document
/// contributes each of its elements; any other document is one record.
///
/// # Errors
///
/// Fails when the text is not a sequence of JSON documents.
pub fn parse_records(text: &str) -> Result<Vec<Value>, serde_json::Error> {
    let mut records = Vec::new();
    for document in serde_json::Deserializer::from_str(text).into_iter::<Value>() {
        match document? {
            Value::Array(items) => records.extend(items),
            record => records.push(record),
        }
    }
    Ok(records)
}

/// Generate and write one line per record.
///
/// # Errors
///
/// Fails when the output cannot be written.
pub fn write_lines<W: Write>(
    generator: &TagLineGenerator,
    records: &[Value],
    json: bool,
    out: &mut W,
) -> Result<()> {
    let lines: Vec<String> = records
        .iter()
        .map(|record| generator.generate_line(record))
        .collect();
    if json {
        serde_json::to_writer(&mut *out, &lines).wrap_err("failed to write JSON output")?;
        writeln!(out).wrap_err("failed to write JSON output")?;
    } else {
        for line in &lines {
            writeln!(out, "{line}").wrap_err("failed to write output")?;
        }
    }
    Ok(())
}

/// Run the command against its inputs, writing lines to `out`.
///
/// # Errors
///
/// Fails when settings or records cannot be loaded or output cannot be
/// written.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let generator = cli.load_generator()?;
    let records = read_records(&cli.record_sources())?;
    write_lines(&generator, &records, cli.json, out)?;
    out.flush().wrap_err("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generator() -> TagLineGenerator {
        match TagLineGenerator::from_value(&json!({"selectedSets": "tags", "tagsLimit": 2})) {
            Ok(generator) => generator,
            Err(err) => panic!("settings should compile: {err}"),
        }
    }

    fn render(records: &[Value], json: bool) -> String {
        let mut out = Vec::new();
        if let Err(err) = write_lines(&generator(), records, json, &mut out) {
            panic!("writing to a buffer should succeed: {err}");
        }
        match String::from_utf8(out) {
            Ok(text) => text,
            Err(err) => panic!("output should be UTF-8: {err}"),
        }
    }

    #[test]
    fn parses_objects_arrays_and_streams() {
        let Ok(records) = parse_records(r#"{"tags": "a"} [{"tags": "b"}, {"tags": "c"}]"#) else {
            panic!("records should parse");
        };
        assert_eq!(
            records,
            [json!({"tags": "a"}), json!({"tags": "b"}), json!({"tags": "c"})]
        );
    }

    #[test]
    fn empty_input_has_no_records() {
        let Ok(records) = parse_records("  \n") else {
            panic!("whitespace should parse");
        };
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(parse_records("{\"tags\": ").is_err());
    }

    #[test]
    fn writes_one_line_per_record() {
        let records = [json!({"tags": "a b c"}), json!({}), json!({"tags": "d"})];
        assert_eq!(render(&records, false), "a b\n\nd\n");
    }

    #[test]
    fn writes_json_array() {
        let records = [json!({"tags": "a b c"}), json!({"tags": "d"})];
        assert_eq!(render(&records, true), "[\"a b\",\"d\"]\n");
    }

    #[test]
    fn defaults_to_standard_input() {
        let cli = Cli::parse_from(["tagline", "--settings", "settings.json"]);
        assert_eq!(cli.record_sources(), [Path::new("-")]);
        let cli = Cli::parse_from(["tagline", "-s", "settings.json", "a.json", "b.json"]);
        assert_eq!(cli.record_sources(), [Path::new("a.json"), Path::new("b.json")]);
    }

    #[test]
    fn parses_log_level_flag() {
        let cli = Cli::parse_from(["tagline", "-s", "x.json", "--log-level", "debug", "--json"]);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(cli.json);
    }
}
