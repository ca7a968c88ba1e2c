mod error;
mod logging;
mod models;
mod parser;
mod printer;
mod reader;

pub use error::AnalyzerError;
pub use logging::init_logging;
pub use models::{AccessCounts, Counters, ExtractedFields, Mode};
pub use parser::LineParser;
pub use printer::{print_hourly, print_ips, print_report};
pub use reader::{calculate_results, start};
