use log_analyzer::AnalyzerError;
use std::{
    ffi::OsString,
    io::{self, Write},
};
use structopt::{
    clap::{self, ErrorKind},
    StructOpt,
};

#[derive(StructOpt, PartialEq, Debug)]
#[structopt(
    name("la"),
    author("💻  Roberto Huertas <roberto.huertas@outlook.com>"),
    long_about("🧰  Utility to count web server access log hits per hour or per IP address")
)]
pub struct Cli {
    /// Path to your access log
    #[structopt()]
    pub log_file: String,
    /// Report to print: 'hourly' or 'ip'
    #[structopt()]
    pub mode: String,
    /// Anything after the mode is accepted and ignored
    #[structopt(hidden = true)]
    pub extra: Vec<String>,
}

fn is_informational(e: &clap::Error) -> bool {
    e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed
}

fn parse_args<I>(args: I) -> Result<Cli, AnalyzerError>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    match Cli::from_iter_safe(args) {
        Ok(cli) => Ok(cli),
        Err(e) if is_informational(&e) => e.exit(),
        Err(_) => Err(AnalyzerError::Usage),
    }
}

fn run_with<I>(args: I, out: &mut impl Write) -> Result<(), AnalyzerError>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let cli = parse_args(args)?;
    let current_dir = std::env::current_dir().map_err(|source| AnalyzerError::FileOpen {
        path: cli.log_file.clone().into(),
        source,
    })?;
    let path = current_dir.join(cli.log_file);

    log_analyzer::start(&path, &cli.mode, out)?;
    out.flush().map_err(AnalyzerError::Output)
}

/// Prints `e` to `out` and returns the exit status.
/// A reader that hung up is not reported.
fn report_error(out: &mut impl Write, e: &AnalyzerError) -> i32 {
    if e.is_broken_pipe() {
        return 0;
    }
    let _ = writeln!(out, "{}", e).and_then(|_| out.flush());
    e.exit_code()
}

fn main() {
    log_analyzer::init_logging();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_with(std::env::args_os(), &mut out) {
        let code = report_error(&mut out, &e);
        drop(out);
        std::process::exit(code);
    }
}
