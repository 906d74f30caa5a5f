use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::aggregate::{ObjectRow, SizeTable};
use crate::classify::{SectionKind, classify};
use crate::error::MapsizeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionTotals {
    pub text: u64,
    pub data: u64,
    pub bss: u64,
}

impl SectionTotals {
    pub fn total(&self) -> u64 {
        self.text.saturating_add(self.data).saturating_add(self.bss)
    }

    fn from_rows(rows: &[ObjectRow]) -> Self {
        rows.iter().fold(SectionTotals::default(), |acc, row| SectionTotals {
            text: acc.text.saturating_add(row.totals.get(SectionKind::Text)),
            data: acc.data.saturating_add(row.totals.get(SectionKind::Data)),
            bss: acc.bss.saturating_add(row.totals.get(SectionKind::Bss)),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: u64,
    pub records_matched: u64,
    /// Zero-byte records usually mean an object was pulled in but its
    /// section ended up empty.
    pub zero_size_records: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapReport {
    /// Every object, largest first. Truncation is left to the renderer.
    pub rows: Vec<ObjectRow>,
    pub stats: ScanStats,
    pub image_totals: SectionTotals,
}

impl MapReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Default)]
struct MapScan {
    table: SizeTable,
    stats: ScanStats,
}

impl MapScan {
    fn push_line(&mut self, line: &str) {
        self.stats.lines_read += 1;
        let Some(record) = classify(line) else {
            return;
        };
        self.stats.records_matched += 1;
        if record.size_bytes == 0 {
            self.stats.zero_size_records += 1;
        }
        self.table.fold(&record);
    }

    /// One `\n`-terminated chunk of raw input. A lone `\r` also ends a line,
    /// so classic Mac style maps split the same way as LF and CRLF maps.
    fn push_chunk(&mut self, chunk: &str) {
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        for line in chunk.split('\r') {
            self.push_line(line);
        }
    }

    fn finish(self) -> MapReport {
        let objects = self.table.object_count();
        let rows = self.table.into_ranked_rows();
        let image_totals = SectionTotals::from_rows(&rows);
        tracing::debug!(
            lines_read = self.stats.lines_read,
            records_matched = self.stats.records_matched,
            zero_size_records = self.stats.zero_size_records,
            objects,
            "map scan finished"
        );
        MapReport {
            rows,
            stats: self.stats,
            image_totals,
        }
    }
}

/// Streams a map once, decoding each line lossily so stray non-UTF-8 bytes
/// never abort the scan. `\n`, `\r\n` and lone `\r` all end a line.
pub fn analyze_reader<R: BufRead>(mut reader: R) -> Result<MapReport, MapsizeError> {
    let mut scan = MapScan::default();
    let mut line_buffer: Vec<u8> = Vec::new();
    loop {
        line_buffer.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut line_buffer)
            .map_err(|source| MapsizeError::Read { source })?;
        if bytes_read == 0 {
            break;
        }
        let line_text = String::from_utf8_lossy(&line_buffer);
        scan.push_chunk(&line_text);
    }
    Ok(scan.finish())
}

pub fn analyze_lines<'a, I>(lines: I) -> MapReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scan = MapScan::default();
    for line in lines {
        scan.push_line(line);
    }
    scan.finish()
}

pub fn analyze_map_file(map_path: &Path) -> Result<MapReport, MapsizeError> {
    let file = std::fs::File::open(map_path).map_err(|source| MapsizeError::Io {
        path: map_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %map_path.display(), "reading map file");
    analyze_reader(BufReader::new(file))
}
