use crate::aggregate::ObjectRow;

pub const DEFAULT_TOP: usize = 40;

const NUMBER_WIDTH: usize = 8;
const RULE_WIDTH: usize = 80;

fn format_row(total: &str, text: &str, data: &str, bss: &str, object: &str) -> String {
    format!(
        "{total:>w$} {text:>w$} {data:>w$} {bss:>w$}  {object}\n",
        w = NUMBER_WIDTH
    )
}

/// Renders the first `top` rows as a fixed-width table, largest first.
pub fn render_table(rows: &[ObjectRow], top: usize) -> String {
    let mut out = format!("Top {top} objects by total size (text+data+bss):\n\n");
    out.push_str(&format_row("Total", "Text", "Data", "BSS", "Object"));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for row in rows.iter().take(top) {
        out.push_str(&format_row(
            &row.total.to_string(),
            &row.text().to_string(),
            &row.data().to_string(),
            &row.bss().to_string(),
            row.object.as_str(),
        ));
    }
    out
}
