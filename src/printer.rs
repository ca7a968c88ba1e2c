use crate::models::{AccessCounts, Counters, Mode};
use chrono::{NaiveDateTime, ParseResult};
use std::io::{self, Write};

const HOUR_KEY_FORMAT: &str = "%d/%b/%Y:%H:%M";
const HOUR_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:00";

pub fn print_report(out: &mut impl Write, mode: Mode, counters: &Counters) -> io::Result<()> {
    match mode {
        Mode::Hourly => print_hourly(out, &counters.hourly),
        Mode::Ip => print_ips(out, &counters.ips),
    }
}

// chrono needs a minute to build a time, so the key is completed with `:00`.
fn parse_hour_key(key: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{}:00", key), HOUR_KEY_FORMAT)
}

/// Prints hours in chronological order.
///
/// Keys that cannot be parsed sort first and are reported as an error line in
/// place of their row. Keys with the same instant fall back to text order.
pub fn print_hourly(out: &mut impl Write, results: &AccessCounts) -> io::Result<()> {
    let mut hours: Vec<_> = results
        .iter()
        .map(|(key, count)| (parse_hour_key(key), key, count))
        .collect();
    hours.sort_by(|(a_time, a_key, _), (b_time, b_key, _)| {
        a_time
            .as_ref()
            .ok()
            .cmp(&b_time.as_ref().ok())
            .then_with(|| a_key.cmp(b_key))
    });

    writeln!(out, "Hourly Access Counts:")?;
    for (time, _, count) in hours {
        match time {
            Ok(time) => writeln!(
                out,
                "{}: {} accesses",
                time.format(HOUR_OUTPUT_FORMAT),
                count
            )?,
            Err(e) => writeln!(out, "Error parsing time: {}", e)?,
        }
    }
    Ok(())
}

/// Prints addresses by descending count, ties in address order.
pub fn print_ips(out: &mut impl Write, results: &AccessCounts) -> io::Result<()> {
    let mut ips: Vec<_> = results.iter().collect();
    ips.sort_by(|(a_ip, a_count), (b_ip, b_count)| b_count.cmp(a_count).then_with(|| a_ip.cmp(b_ip)));

    writeln!(out, "IP Address Access Counts:")?;
    for (ip, count) in ips {
        writeln!(out, "{}: {} accesses", ip, count)?;
    }
    Ok(())
}
