use crate::error::AnalyzerError;
use crate::models::{Counters, Mode};
use crate::parser::LineParser;
use crate::printer;
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    time::Instant,
};
use tracing::{debug, info};

/// Scans the log at `path` and writes the report selected by `mode` to `out`.
///
/// The mode is only resolved after the whole file has been counted, so a bad
/// path is reported before a bad mode.
pub fn start(path: &Path, mode: &str, out: &mut impl Write) -> Result<(), AnalyzerError> {
    let init = Instant::now();
    let f = File::open(path).map_err(|source| AnalyzerError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened log file");

    let parser = LineParser::new()?;
    let mut br = BufReader::new(f);
    let counters = calculate_results(&mut br, &parser)?;
    info!(
        matched = counters.matched,
        hours = counters.hourly.len(),
        ips = counters.ips.len(),
        "counted access log"
    );

    let mode: Mode = mode.parse()?;
    debug!(?mode, "printing report");
    printer::print_report(out, mode, &counters).map_err(AnalyzerError::Output)?;
    debug!(elapsed = ?init.elapsed(), "done");
    Ok(())
}

/// NOTE: a BufRead impl keeps the file out of memory and lets the tests pass a &[u8].
/// Lines are read as bytes so a stray non UTF-8 byte only affects its own line.
pub fn calculate_results(
    buffer_reader: &mut impl BufRead,
    parser: &LineParser,
) -> Result<Counters, AnalyzerError> {
    let mut buf = Vec::new();
    let mut counters = Counters::default();
    let mut lines = 0usize;

    loop {
        let num_bytes = buffer_reader
            .read_until(b'\n', &mut buf)
            .map_err(AnalyzerError::Scan)?;
        // short circuit check
        if num_bytes == 0 {
            break;
        }
        lines += 1;
        if let Some(fields) = parser.parse(&String::from_utf8_lossy(&buf)) {
            counters.add(fields);
        }
        buf.clear();
    }

    debug!(lines, matched = counters.matched, "scan finished");
    Ok(counters)
}
