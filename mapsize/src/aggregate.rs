use std::collections::HashMap;

use crate::classify::{SectionKind, SizeRecord};
use crate::object_key::ObjectKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectTotals {
    pub text: u64,
    pub data: u64,
    pub bss: u64,
}

impl ObjectTotals {
    pub fn add(&mut self, kind: SectionKind, size_bytes: u64) {
        let field = match kind {
            SectionKind::Text => &mut self.text,
            SectionKind::Data => &mut self.data,
            SectionKind::Bss => &mut self.bss,
        };
        *field = field.saturating_add(size_bytes);
    }

    pub fn get(&self, kind: SectionKind) -> u64 {
        match kind {
            SectionKind::Text => self.text,
            SectionKind::Data => self.data,
            SectionKind::Bss => self.bss,
        }
    }

    pub fn total(&self) -> u64 {
        self.text.saturating_add(self.data).saturating_add(self.bss)
    }
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRow {
    pub object: ObjectKey,
    pub totals: ObjectTotals,
    pub total: u64,
}

impl ObjectRow {
    pub fn text(&self) -> u64 {
        self.totals.text
    }

    pub fn data(&self) -> u64 {
        self.totals.data
    }

    pub fn bss(&self) -> u64 {
        self.totals.bss
    }
}

/// Per-object accumulator for a single analysis run.
#[derive(Debug, Default)]
pub struct SizeTable {
    object_to_totals: HashMap<ObjectKey, ObjectTotals>,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, record: &SizeRecord) {
        self.totals_mut(ObjectKey::from_raw(&record.raw_object_id))
            .add(record.kind, record.size_bytes);
    }

    /// Number of distinct objects seen so far.
    pub fn object_count(&self) -> usize {
        self.object_to_totals.len()
    }

    /// Largest total first; equal totals fall back to the object name so the
    /// order never depends on hash iteration.
    pub fn into_ranked_rows(self) -> Vec<ObjectRow> {
        let mut rows = self
            .object_to_totals
            .into_iter()
            .map(|(object, totals)| ObjectRow {
                object,
                totals,
                total: totals.total(),
            })
            .collect::<Vec<_>>();
        rows.sort_by(|left, right| {
            right
                .total
                .cmp(&left.total)
                .then_with(|| left.object.cmp(&right.object))
        });
        rows
    }

    fn totals_mut(&mut self, object: ObjectKey) -> &mut ObjectTotals {
        self.object_to_totals.entry(object).or_default()
    }
}

pub fn aggregate<I>(records: I) -> Vec<ObjectRow>
where
    I: IntoIterator<Item = SizeRecord>,
{
    let mut table = SizeTable::new();
    for record in records {
        table.fold(&record);
    }
    table.into_ranked_rows()
}
