use crate::error::AnalyzerError;
use std::{collections::HashMap, str::FromStr};

pub type AccessCounts = HashMap<String, usize>;

/// Fields captured from a matched log line.
/// `hour_key` keeps the literal `DD/Mon/YYYY:HH` form found in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub ip: String,
    pub hour_key: String,
}

#[derive(Debug, Default)]
pub struct Counters {
    pub hourly: AccessCounts,
    pub ips: AccessCounts,
    pub matched: usize,
}

impl Counters {
    pub fn add(&mut self, fields: ExtractedFields) {
        *self.hourly.entry(fields.hour_key).or_default() += 1;
        *self.ips.entry(fields.ip).or_default() += 1;
        self.matched += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hourly,
    Ip,
}

impl FromStr for Mode {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hourly" => Ok(Mode::Hourly),
            "ip" => Ok(Mode::Ip),
            _ => Err(AnalyzerError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(ip: &str, hour_key: &str) -> ExtractedFields {
        ExtractedFields {
            ip: ip.to_string(),
            hour_key: hour_key.to_string(),
        }
    }

    #[test]
    fn it_counts_both_tables_from_the_same_line() {
        let mut counters = Counters::default();
        counters.add(fields("10.0.0.1", "01/Mar/2024:08"));
        counters.add(fields("10.0.0.1", "01/Mar/2024:09"));
        counters.add(fields("10.0.0.2", "01/Mar/2024:08"));

        assert_eq!(counters.matched, 3);
        assert_eq!(counters.hourly.get("01/Mar/2024:08"), Some(&2));
        assert_eq!(counters.hourly.get("01/Mar/2024:09"), Some(&1));
        assert_eq!(counters.ips.get("10.0.0.1"), Some(&2));
        assert_eq!(counters.ips.get("10.0.0.2"), Some(&1));
    }

    #[test]
    fn it_parses_modes_case_insensitively() {
        assert_eq!("hourly".parse::<Mode>().ok(), Some(Mode::Hourly));
        assert_eq!("HOURLY".parse::<Mode>().ok(), Some(Mode::Hourly));
        assert_eq!("Ip".parse::<Mode>().ok(), Some(Mode::Ip));
    }

    #[test]
    fn it_rejects_unknown_modes() {
        match "weekly".parse::<Mode>() {
            Err(AnalyzerError::InvalidMode(mode)) => assert_eq!(mode, "weekly"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
