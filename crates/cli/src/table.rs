// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal table renderer for the status view.
//!
//! Left-aligned columns padded to the widest cell, two spaces between
//! columns.

pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        let mut out = String::new();
        render_line(
            &mut out,
            &widths,
            self.headers.iter().map(|h| h.to_string()),
        );
        for row in &self.rows {
            render_line(&mut out, &widths, row.iter().cloned());
        }
        out
    }
}

fn render_line(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        let width = widths.get(i).copied().unwrap_or(0);
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
