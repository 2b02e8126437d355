use crate::artifacts::diff::escape::escape_html;
use crate::artifacts::diff::row::{Row, RowKind};
use derive_new::new;
use std::io::{self, Write};

const STYLE: &str = "body { font-family: monospace; }\n\
table { width: 100%; border-collapse: collapse; }\n\
td { vertical-align: top; padding: 2px 8px; }\n\
th { background: #f0f0f0; padding: 4px; }\n\
.del { background:#ffecec; text-decoration:line-through; color:#a33; }\n\
.ins { background:#eaffea; color:#070; }\n\
.removed { background:#ffeeee; }\n\
.added { background:#eeffee; }\n";

/// Two-column HTML table with the old file on the left and the new file on the right
#[derive(Debug, Clone, new)]
pub struct HtmlDocument<'d> {
    old_label: &'d str,
    new_label: &'d str,
}

impl HtmlDocument<'_> {
    pub fn write(&self, writer: &mut dyn Write, rows: &[Row]) -> io::Result<()> {
        let old_label = escape_html(self.old_label);
        let new_label = escape_html(self.new_label);

        write!(
            writer,
            "<html><head><meta charset='UTF-8'><style>\n{STYLE}</style></head><body>\n"
        )?;
        writeln!(
            writer,
            "<h2>Diff between: {old_label} (old) and {new_label} (new)</h2>"
        )?;
        writeln!(writer, "<table border='1'>")?;
        writeln!(
            writer,
            "<tr><th>{old_label} (old)</th><th>{new_label} (new)</th></tr>"
        )?;

        for row in rows {
            Self::write_row(writer, row)?;
        }

        write!(writer, "</table></body></html>")
    }

    fn write_row(writer: &mut dyn Write, row: &Row) -> io::Result<()> {
        match row.kind {
            RowKind::Unchanged => writeln!(
                writer,
                "<tr><td>{}</td><td>{}</td></tr>",
                row.left.to_escaped_text(),
                row.right.to_escaped_text()
            ),
            RowKind::Changed => writeln!(
                writer,
                "<tr><td class='removed'>{}</td><td class='added'>{}</td></tr>",
                row.left.to_markup(),
                row.right.to_markup()
            ),
            // the cell class already marks the whole line
            RowKind::OldOnly => writeln!(
                writer,
                "<tr><td class='removed'>{}</td><td></td></tr>",
                row.left.to_escaped_text()
            ),
            RowKind::NewOnly => writeln!(
                writer,
                "<tr><td></td><td class='added'>{}</td></tr>",
                row.right.to_escaped_text()
            ),
        }
    }
}
