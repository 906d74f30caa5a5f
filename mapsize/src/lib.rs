pub mod aggregate;
pub mod args;
pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod object_key;
pub mod report;
pub mod run;


pub use aggregate::{ObjectRow, ObjectTotals, SizeTable, aggregate};
pub use classify::{SectionKind, SizeRecord, classify};
pub use error::MapsizeError;
pub use object_key::{ObjectKey, normalize_object_id};
pub use report::{MapReport, ScanStats, SectionTotals, analyze_lines, analyze_map_file, analyze_reader};
