use std::borrow::Cow;

const CELL_PADDING: usize = 1;

/// Boxed plain-text table for terminal output.
///
/// Column widths follow the widest cell. Non-ASCII characters count as two
/// columns so CJK names line up with ASCII ones. Cells past the header count
/// are ignored and missing cells render empty.
#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in col_widths.iter_mut().zip(row.as_ref()) {
                *width = (*width).max(display_width(cell));
            }
        }

        let separator = separator_line(&col_widths);
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(separator.clone());
        lines.push(self.render_row(self.headers, &col_widths));
        lines.push(separator.clone());
        for row in &self.rows {
            lines.push(self.render_row(row.as_ref(), &col_widths));
        }
        lines.push(separator);

        lines.join("\n")
    }

    fn render_row(&self, cells: &[Cow<'a, str>], col_widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (i, width) in col_widths.iter().enumerate() {
            let cell = cells.get(i).map(|cell| cell.as_ref()).unwrap_or("");
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            line.push_str(&" ".repeat(CELL_PADDING));
            line.push_str(&pad(cell, *width, alignment));
            line.push_str(&" ".repeat(CELL_PADDING));
            line.push('|');
        }
        line
    }
}

fn separator_line(col_widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in col_widths {
        line.push_str(&"-".repeat(width + CELL_PADDING * 2));
        line.push('+');
    }
    line
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(display_width(cell));
    match alignment {
        Alignment::Left => format!("{cell}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{cell}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}
