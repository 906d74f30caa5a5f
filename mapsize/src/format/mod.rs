pub mod csv_export;
pub mod notes;
pub mod table;

pub use csv_export::{csv_header, write_csv, write_csv_file};
pub use notes::render_notes;
pub use table::{DEFAULT_TOP, render_table};
