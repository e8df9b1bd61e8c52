// Duration probing via ffprobe
// One synchronous call per video; any failure maps to "duration unknown"
// upstream, which the rest of the program treats as perfectly valid.

use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("{command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("unparsable duration output: {output:?}")]
    Parse { output: String },
}

const PROBE_COMMAND: &str = "ffprobe";

/// Ask ffprobe for the container duration in seconds.
pub fn video_duration(path: &Path) -> Result<f64, ProbeError> {
    run_probe(PROBE_COMMAND, path)
}

fn run_probe(command: &str, path: &Path) -> Result<f64, ProbeError> {
    let output = Command::new(command)
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .output()
        .map_err(|source| ProbeError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProbeError::Failed {
            command: command.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    parse_duration(&String::from_utf8_lossy(&output.stdout))
}

fn parse_duration(stdout: &str) -> Result<f64, ProbeError> {
    let trimmed = stdout.trim();
    trimmed.parse::<f64>().map_err(|_| ProbeError::Parse {
        output: trimmed.to_string(),
    })
}
