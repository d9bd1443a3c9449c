//! Batch command implementation.
//!
//! Reads a JSON array of estimation requests, runs the estimator over it, and
//! writes the JSON array of responses in matching order. Individual request
//! failures are reported inside the responses, never as a process failure.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bricktime_estimate::Estimator;
use bricktime_types::{BuildRequest, BuildResponse};

/// Run the estimator over a JSON batch from `input`, writing to `output`.
///
/// `None` for either side means stdin/stdout.
pub(crate) fn batch(input: Option<&Path>, output: Option<&Path>, pretty: bool) -> Result<()> {
    let requests = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            read_requests(BufReader::new(file))?
        }
        None => read_requests(std::io::stdin().lock())?,
    };

    let responses = Estimator::new().estimate_batch(&requests);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_responses(&responses, BufWriter::new(file), pretty)
        }
        None => write_responses(&responses, std::io::stdout().lock(), pretty),
    }
}

/// Parses a JSON array of requests from a reader.
fn read_requests(reader: impl Read) -> Result<Vec<BuildRequest>> {
    serde_json::from_reader(reader).context("Input is not a JSON array of estimation requests")
}

/// Serializes responses as a JSON array to a writer.
fn write_responses(
    responses: &[BuildResponse],
    mut writer: impl Write,
    pretty: bool,
) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, responses)?;
    } else {
        serde_json::to_writer(&mut writer, responses)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_round_trip() {
        let input = br#"[
            {"pieceCount": 9876, "builderCount": 2},
            {"pieceCount": 0, "builderCount": 1},
            {"builderCount": 2}
        ]"#;

        let requests = read_requests(&input[..]).unwrap();
        assert_eq!(requests.len(), 3);

        let responses = Estimator::new().estimate_batch(&requests);
        let mut out = Vec::new();
        write_responses(&responses, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("18.29"));
        assert!(text.contains("Number of pieces must be a positive integer. Received: 0"));
        assert!(text.contains("Number of pieces must be a positive integer. Received: null"));
    }

    #[test]
    fn test_read_requests_rejects_non_array() {
        assert!(read_requests(&br#"{"pieceCount": 1}"#[..]).is_err());
    }
}
