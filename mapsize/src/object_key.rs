use std::borrow::Borrow;
use std::fmt;

/// Normalized name of an object file or archive member.
///
/// Directory prefixes are dropped (`/` and `\` both count as separators) so
/// the same object built from different trees lands in one bucket. The
/// `archive.a(member.o)` form survives intact, only the directories in front
/// of the archive are removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn from_raw(raw_object_id: &str) -> Self {
        ObjectKey(normalize_object_id(raw_object_id).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ObjectKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

pub fn normalize_object_id(raw_object_id: &str) -> &str {
    let trimmed = raw_object_id.trim();
    match split_archive_member(trimmed) {
        Some(archive_end) => {
            let archive_start = last_separator_end(&trimmed[..archive_end]);
            &trimmed[archive_start..]
        }
        None => &trimmed[last_separator_end(trimmed)..],
    }
}

// Offset of the `(` matching the trailing `)`, if the id ends in a member group.
fn split_archive_member(object_id: &str) -> Option<usize> {
    if !object_id.ends_with(')') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, character) in object_id.char_indices().rev() {
        match character {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn last_separator_end(path_text: &str) -> usize {
    path_text
        .rfind(['/', '\\'])
        .map(|separator_offset| separator_offset + 1)
        .unwrap_or(0)
}
