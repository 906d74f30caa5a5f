use std::io::Write;

use crate::args::ParsedArgs;
use crate::error::MapsizeError;
use crate::format::{render_notes, render_table, write_csv_file};
use crate::report::{MapReport, analyze_map_file};

/// Analyzes the map named in `args` and writes the table, optional stats and
/// notes to `out`. The CSV, when requested, gets every row.
pub fn run_report<W: Write>(args: &ParsedArgs, out: &mut W) -> Result<MapReport, MapsizeError> {
    let report = analyze_map_file(&args.mapfile)?;
    if report.is_empty() {
        tracing::warn!(
            path = %args.mapfile.display(),
            lines_read = report.stats.lines_read,
            "no .text/.data/.bss records found in map"
        );
    }

    write_text(out, &render_table(&report.rows, args.top))?;

    if args.show_stats {
        write_text(out, &format!("\n{}", render_stats(&report)))?;
    }

    if let Some(csv_path) = args.csv.as_deref() {
        write_csv_file(csv_path, &report.rows)?;
        tracing::info!(path = %csv_path.display(), rows = report.rows.len(), "wrote csv");
        write_text(out, &format!("\nWrote CSV to {}\n", csv_path.display()))?;
    }

    if args.notes {
        write_text(out, &format!("\n{}", render_notes()))?;
    }

    Ok(report)
}

pub fn render_stats(report: &MapReport) -> String {
    let stats = &report.stats;
    let totals = &report.image_totals;
    format!(
        "Scanned {} lines: {} section records ({} zero-size) across {} objects\nImage totals: text={} data={} bss={} total={}\n",
        stats.lines_read,
        stats.records_matched,
        stats.zero_size_records,
        report.rows.len(),
        totals.text,
        totals.data,
        totals.bss,
        totals.total(),
    )
}

fn write_text<W: Write>(out: &mut W, text: &str) -> Result<(), MapsizeError> {
    out.write_all(text.as_bytes())
        .map_err(|source| MapsizeError::Write { source })
}
