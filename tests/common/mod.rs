#![allow(dead_code)]

pub mod command;
pub mod file;

pub const HTML_HEAD: &str = "<html><head><meta charset='UTF-8'><style>\n\
body { font-family: monospace; }\n\
table { width: 100%; border-collapse: collapse; }\n\
td { vertical-align: top; padding: 2px 8px; }\n\
th { background: #f0f0f0; padding: 4px; }\n\
.del { background:#ffecec; text-decoration:line-through; color:#a33; }\n\
.ins { background:#eaffea; color:#070; }\n\
.removed { background:#ffeeee; }\n\
.added { background:#eeffee; }\n\
</style></head><body>\n";

pub const HTML_TAIL: &str = "</table></body></html>";

/// Builds the full document the way the reference tool lays it out
pub fn expected_document(old_label: &str, new_label: &str, rows: &[&str]) -> String {
    let mut document = String::from(HTML_HEAD);
    document.push_str(&format!(
        "<h2>Diff between: {old_label} (old) and {new_label} (new)</h2>\n"
    ));
    document.push_str("<table border='1'>\n");
    document.push_str(&format!(
        "<tr><th>{old_label} (old)</th><th>{new_label} (new)</th></tr>\n"
    ));
    for row in rows {
        document.push_str(row);
        document.push('\n');
    }
    document.push_str(HTML_TAIL);
    document
}

/// The `<tr>` lines of a document, header row excluded
pub fn table_rows(document: &str) -> Vec<&str> {
    document
        .lines()
        .filter(|line| line.starts_with("<tr><td"))
        .collect()
}
