use std::io::Write;
use std::path::Path;

use crate::aggregate::ObjectRow;
use crate::classify::SectionKind;
use crate::error::MapsizeError;

/// `object,text,data,bss,total`
pub fn csv_header() -> [&'static str; 5] {
    [
        "object",
        SectionKind::Text.as_str(),
        SectionKind::Data.as_str(),
        SectionKind::Bss.as_str(),
        "total",
    ]
}

/// Writes every row, never truncated. Object names containing commas or
/// quotes are escaped by the csv writer.
pub fn write_csv<W: Write>(writer: W, rows: &[ObjectRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(csv_header())?;
    for row in rows {
        let text = row.text().to_string();
        let data = row.data().to_string();
        let bss = row.bss().to_string();
        let total = row.total.to_string();
        csv_writer.write_record([
            row.object.as_str(),
            text.as_str(),
            data.as_str(),
            bss.as_str(),
            total.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file(csv_path: &Path, rows: &[ObjectRow]) -> Result<(), MapsizeError> {
    let file = std::fs::File::create(csv_path).map_err(|source| MapsizeError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;
    write_csv(file, rows).map_err(|source| MapsizeError::Csv {
        path: csv_path.to_path_buf(),
        source,
    })
}
