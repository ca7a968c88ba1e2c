use crate::error::AnalyzerError;
use crate::models::ExtractedFields;
use regex::Regex;

// ip, then anything, then `[DD/Mon/YYYY:HH:MM:SS <zone>]`. Only the hour prefix is captured.
const LOG_PATTERN: &str =
    r"^([0-9.]+) .+ \[([0-9]{2}/[A-Za-z]{3}/[0-9]{4}:[0-9]{2}):[0-9]{2}:[0-9]{2} .+\]";

pub struct LineParser {
    pattern: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(LineParser {
            pattern: Regex::new(LOG_PATTERN)?,
        })
    }

    /// Returns `None` for any line that does not have the expected shape.
    pub fn parse(&self, line: &str) -> Option<ExtractedFields> {
        let captures = self.pattern.captures(line)?;
        Some(ExtractedFields {
            ip: captures.get(1)?.as_str().to_string(),
            hour_key: captures.get(2)?.as_str().to_string(),
        })
    }
}
