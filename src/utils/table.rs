/// A plain-text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: &[&str]) -> Self {
        Table {
            col_widths: headers.iter().map(|h| h.chars().count()).collect(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row; cells beyond the header count are ignored
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if let Some(width) = self.col_widths.get_mut(i) {
                *width = (*width).max(col.chars().count());
            }
        }
        self.rows.push(row);
    }

    /// Render header, separator and rows, one line each
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_separator());
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.join("\n")
    }

    fn render_row(&self, row: &[String]) -> String {
        row.iter()
            .zip(&self.col_widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}
