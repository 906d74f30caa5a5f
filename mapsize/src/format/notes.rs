const NOTES: &[&str] = &[
    "If an object does not appear in the map, it was not linked in (not referenced).",
    "The map represents the linker's final view: if a symbol/object appears here, it's included in the output (unless the map is partial).",
    "Garbage collection of sections (gc-sections) removes unreferenced sections; in that case removed sections won't appear in the map.",
    "Only .text, .data and .bss are counted; .rodata, .comment and other sections are not part of these totals.",
];

pub fn render_notes() -> String {
    let mut out = String::from("Notes:\n");
    for note in NOTES {
        out.push_str(" - ");
        out.push_str(note);
        out.push('\n');
    }
    out
}
