pub mod db;
pub mod error;
pub mod util;

pub use db::core::{RouteSummary, Verdict};
pub use db::parser::route_log::{ScanReport, scan_file, scan_lines};
pub use error::ScanError;
