use mapsize::analyze_lines;
use mapsize::format::{render_notes, render_table};

const MAP_LINES: &[&str] = &[
    " .text          0x08000000       0x70 C:/build/crt0.o",
    " .text          0x08000070      0x1c4 C:/build/main.o",
    " .text          0x08000234       0x40 /opt/arm/lib/libc_nano.a(lib_a-memcpy.o)",
    " .data          0x20000000        0x8 C:/build/main.o",
    " .bss           0x20000010       0x20 C:/build/main.o",
    " .bss           0x20000030        0x4 /opt/arm/lib/libc_nano.a(lib_a-memcpy.o)",
    " .bss           0x20000034        0x0 C:/build/unused.o",
];

#[test]
fn render_table_snapshot() {
    let report = analyze_lines(MAP_LINES.iter().copied());
    let out = render_table(&report.rows, 40);
    insta::assert_snapshot!("render_table_snapshot", out);
}

#[test]
fn render_table_truncates_to_top_rows() {
    let report = analyze_lines(MAP_LINES.iter().copied());
    let out = render_table(&report.rows, 2);
    let body = out.lines().skip(4).collect::<Vec<_>>();
    assert_eq!(body.len(), 2);
    assert!(out.starts_with("Top 2 objects by total size (text+data+bss):\n"));
    assert!(body[0].ends_with("  main.o"));
    assert!(body[1].ends_with("  crt0.o"));
}

#[test]
fn render_table_with_no_rows_keeps_the_header() {
    let out = render_table(&[], 40);
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn notes_mention_gc_sections_and_untracked_sections() {
    let notes = render_notes();
    assert!(notes.starts_with("Notes:\n"));
    assert!(notes.contains("gc-sections"));
    assert!(notes.contains(".rodata"));
}
