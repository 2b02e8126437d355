use crate::artifacts::diff::row::{AnnotatedLine, MarkKind, Row, RowKind};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

const COLUMN_SEPARATOR: &str = " | ";

/// Side-by-side colored rendering of the rows for a terminal.
///
/// Deleted runs are red and struck through, inserted runs are green. The
/// first column holds a one-character marker for the row kind:
///
/// ```text
///   a        | a
/// ~ cat      | cot
/// +          | d
/// ```
#[derive(Debug, Clone, Default)]
pub struct TerminalPreview {
    left_width: usize,
}

impl TerminalPreview {
    pub fn for_rows(rows: &[Row]) -> Self {
        let left_width = rows
            .iter()
            .map(|row| row.left.text().chars().count())
            .max()
            .unwrap_or(0);

        TerminalPreview { left_width }
    }

    pub fn write(&self, writer: &mut dyn Write, rows: &[Row]) -> io::Result<()> {
        for row in rows {
            let padding = self
                .left_width
                .saturating_sub(row.left.text().chars().count());

            writeln!(
                writer,
                "{} {}{:padding$}{}{}",
                Self::marker(row.kind),
                Self::colorize(&row.left),
                "",
                COLUMN_SEPARATOR,
                Self::colorize(&row.right),
            )?;
        }

        Ok(())
    }

    fn marker(kind: RowKind) -> ColoredString {
        match kind {
            RowKind::Unchanged => " ".normal(),
            RowKind::Changed => "~".yellow(),
            RowKind::OldOnly => "-".red(),
            RowKind::NewOnly => "+".green(),
        }
    }

    fn colorize(line: &AnnotatedLine) -> String {
        line.segments()
            .iter()
            .map(|segment| match segment.mark {
                MarkKind::None => segment.text.normal(),
                MarkKind::Deletion => segment.text.red().strikethrough(),
                MarkKind::Insertion => segment.text.green(),
            })
            .map(|colored| colored.to_string())
            .collect()
    }
}
