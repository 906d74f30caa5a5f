use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use mapsize::args::ParsedArgs;
use mapsize::run::run_report;

const MAP_TEXT: &str = "\
Linker script and memory map

 .text          0x08000000       0x10 obj/a.o
 .data          0x20000000       0x20 obj/a.o
 .bss           0x20000020        0x4 /lib/libfoo.a(bar.o)
 .rodata        0x08000010      0x100 obj/a.o
";

fn args_for(map_path: PathBuf) -> ParsedArgs {
    ParsedArgs {
        mapfile: map_path,
        top: 40,
        csv: None,
        notes: false,
        show_stats: false,
        verbose: false,
    }
}

#[test]
fn run_report_prints_table_stats_csv_and_notes() {
    let temp = TempDir::new().unwrap();
    let map_path = temp.path().join("fw.map");
    let csv_path = temp.path().join("fw.csv");
    std::fs::write(&map_path, MAP_TEXT).unwrap();

    let args = ParsedArgs {
        csv: Some(csv_path.clone()),
        notes: true,
        show_stats: true,
        ..args_for(map_path)
    };
    let mut out: Vec<u8> = Vec::new();
    let report = run_report(&args, &mut out).expect("run");
    let printed = String::from_utf8(out).unwrap();

    assert_eq!(report.rows.len(), 2);
    assert!(printed.starts_with("Top 40 objects by total size (text+data+bss):\n"));
    assert!(printed.contains("      48       16       32        0  a.o\n"));
    assert!(printed.contains("Scanned 6 lines: 3 section records (0 zero-size) across 2 objects\n"));
    assert!(printed.contains("Image totals: text=16 data=32 bss=4 total=52\n"));
    assert!(printed.contains(&format!("Wrote CSV to {}\n", csv_path.display())));
    assert!(printed.trim_end().ends_with("not part of these totals."));

    similar_asserts::assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        "object,text,data,bss,total\na.o,16,32,0,48\nlibfoo.a(bar.o),0,0,4,4\n"
    );
}

#[test]
fn run_report_without_extras_prints_only_the_table() {
    let temp = TempDir::new().unwrap();
    let map_path = temp.path().join("fw.map");
    std::fs::write(&map_path, MAP_TEXT).unwrap();

    let mut out: Vec<u8> = Vec::new();
    run_report(&args_for(map_path), &mut out).expect("run");
    let printed = String::from_utf8(out).unwrap();

    assert_eq!(printed.lines().count(), 6);
    assert!(!printed.contains("Notes:"));
    assert!(!printed.contains("Wrote CSV"));
}

#[test]
fn run_report_fails_for_missing_map() {
    let temp = TempDir::new().unwrap();
    let mut out: Vec<u8> = Vec::new();
    let err = run_report(&args_for(temp.path().join("absent.map")), &mut out).expect_err("missing");
    assert!(matches!(err, mapsize::MapsizeError::Io { .. }));
    assert!(out.is_empty());
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn run_report_surfaces_output_write_failures() {
    let temp = TempDir::new().unwrap();
    let map_path = temp.path().join("fw.map");
    std::fs::write(&map_path, MAP_TEXT).unwrap();

    let err = run_report(&args_for(map_path), &mut ClosedPipe).expect_err("broken pipe");
    match err {
        mapsize::MapsizeError::Write { source } => {
            assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
        }
        other => panic!("unexpected error: {other}"),
    }
}
