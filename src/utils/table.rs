//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub align_right: bool,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    align_right: false,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Right-align the column at `idx` (durations, counts).
    pub fn align_right(mut self, idx: usize) -> Self {
        if let Some(col) = self.columns.get_mut(idx) {
            col.align_right = true;
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_row(&mut out, &header, &widths);

        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            self.render_row(&mut out, row, &widths);
        }

        out
    }

    fn render_row(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let mut parts = Vec::with_capacity(self.columns.len());

        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            // pad by display width, not byte length (umlauts, emoji)
            let pad = " ".repeat(widths[i].saturating_sub(UnicodeWidthStr::width(cell)));
            if col.align_right {
                parts.push(format!("{pad}{cell}"));
            } else {
                parts.push(format!("{cell}{pad}"));
            }
        }

        out.push_str(parts.join(" | ").trim_end());
        out.push('\n');
    }
}
