//! Grouping records into a printable report.

use std::fmt;

use crate::record::{Category, DiffRecord};

/// Text printed when two snapshots do not differ.
pub const NO_DIFFERENCES: &str = "No differences!";

/// The records of one category, in print order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub records: Vec<DiffRecord>,
}

/// Records grouped into sections in fixed category order.
///
/// Empty sections are dropped. Edited blocks and links are sorted by block
/// path (stable, so pass order breaks ties); added and deleted blocks keep
/// pass order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn from_records(records: impl IntoIterator<Item = DiffRecord>) -> Self {
        let mut buckets: Vec<Vec<DiffRecord>> = vec![Vec::new(); Category::ALL.len()];
        for record in records {
            let slot = Category::ALL
                .iter()
                .position(|c| *c == record.category())
                .unwrap_or_default();
            buckets[slot].push(record);
        }

        let sections = Category::ALL
            .into_iter()
            .zip(buckets)
            .filter(|(_, records)| !records.is_empty())
            .map(|(category, mut records)| {
                if category.sorted_by_path() {
                    records.sort_by(|a, b| a.block_path().cmp(b.block_path()));
                }
                Section { category, records }
            })
            .collect();

        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render the report, passing each section header through `header`
    /// (e.g. to colour it).
    pub fn render_with(&self, header: impl Fn(&str) -> String) -> String {
        if self.is_empty() {
            return format!("{NO_DIFFERENCES}\n");
        }
        let mut out = String::new();
        for section in &self.sections {
            out.push('\n');
            out.push_str(&header(&format!("{}:", section.category.header())));
            out.push('\n');
            for record in &section.records {
                out.push_str(&record.to_string());
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(str::to_owned))
    }
}
