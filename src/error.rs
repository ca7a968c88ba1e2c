use std::{io, path::PathBuf};
use thiserror::Error;

pub const USAGE: &str = "Usage: la <log_file> <mode>
<mode>: 'hourly' for hourly access counts, 'ip' for IP address counts";

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Error opening file: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file: {0}")]
    Scan(#[source] io::Error),

    #[error("Invalid mode. Use 'hourly' or 'ip'.")]
    InvalidMode(String),

    #[error("Error compiling log pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Error writing report: {0}")]
    Output(#[source] io::Error),
}

impl AnalyzerError {
    /// Process exit status for this failure. Bad invocations get 2, runtime failures 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzerError::Usage | AnalyzerError::InvalidMode(_) => 2,
            AnalyzerError::FileOpen { .. }
            | AnalyzerError::Scan(_)
            | AnalyzerError::Pattern(_)
            | AnalyzerError::Output(_) => 1,
        }
    }

    /// True when the report could not be written because the reader went away.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            AnalyzerError::Output(e) => e.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}
