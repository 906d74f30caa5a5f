use std::sync::LazyLock;

use regex::Regex;

static SIZE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\.(text|data|bss)\s+0x[0-9A-Fa-f]+\s+0x([0-9A-Fa-f]+)\s+(.+)$")
        .expect("size line regex")
});

/// Output sections the report tracks. Anything else (`.rodata`, `.comment`,
/// `.ARM.exidx`, ...) never reaches the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Text,
    Data,
    Bss,
}

impl SectionKind {
    pub fn from_section_name(name: &str) -> Option<Self> {
        Some(match name {
            "text" => SectionKind::Text,
            "data" => SectionKind::Data,
            "bss" => SectionKind::Bss,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::Data => "data",
            SectionKind::Bss => "bss",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRecord {
    pub kind: SectionKind,
    pub size_bytes: u64,
    pub raw_object_id: String,
}

/// Recognizes one map line of the form
/// `  .text   0x00000000   0x70 path/to/object.o`.
///
/// Banner lines, symbol lines, blank lines and untracked sections all yield
/// `None`. A size of `0x0` is still a record.
pub fn classify(line: &str) -> Option<SizeRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let captures = SIZE_LINE_RE.captures(line)?;

    let kind = SectionKind::from_section_name(captures.get(1)?.as_str())?;
    let size_bytes = parse_hex_u64(captures.get(2)?.as_str())?;
    let raw_object_id = captures.get(3)?.as_str().trim();
    if raw_object_id.is_empty() {
        return None;
    }

    Some(SizeRecord {
        kind,
        size_bytes,
        raw_object_id: raw_object_id.to_string(),
    })
}

// Sizes wider than 64 bits cannot come from a real image; treat the line as noise.
fn parse_hex_u64(digits: &str) -> Option<u64> {
    u64::from_str_radix(digits, 16).ok()
}
