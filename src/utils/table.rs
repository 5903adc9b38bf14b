//! Table rendering utilities for CLI outputs.
//! Column widths grow to fit the widest cell unless a fixed width is set.

use crate::utils::formatting::{display_width, pad_right};

pub struct Column {
    pub header: String,
    pub width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: None,
        }
    }

    pub fn fixed(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: Some(width),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: separator.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                col.width.unwrap_or_else(|| {
                    self.rows
                        .iter()
                        .filter_map(|r| r.get(i))
                        .map(|c| display_width(c))
                        .chain(std::iter::once(display_width(&col.header)))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&self.separator.repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
