use crate::artifacts::diff::escape::escape_html_into;
use derive_new::new;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkKind {
    #[default]
    None,
    Deletion,
    Insertion,
}

impl MarkKind {
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            MarkKind::None => None,
            MarkKind::Deletion => Some("del"),
            MarkKind::Insertion => Some("ins"),
        }
    }
}

/// A run of original (unescaped) text
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Segment {
    pub text: String,
    pub mark: MarkKind,
}

impl Segment {
    pub fn is_marked(&self) -> bool {
        self.mark != MarkKind::None
    }
}

/// A line split into plain and marked runs.
///
/// Adjacent runs with the same mark are merged on push and empty runs are
/// dropped, so every marked run is maximal and the segment texts always
/// concatenate back to the original line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedLine {
    segments: Vec<Segment>,
}

impl AnnotatedLine {
    pub fn plain(text: &str) -> Self {
        Self::marked(text, MarkKind::None)
    }

    pub fn marked(text: &str, mark: MarkKind) -> Self {
        let mut line = Self::default();
        line.push_str(text, mark);
        line
    }

    pub fn push(&mut self, chars: &[char], mark: MarkKind) {
        if chars.is_empty() {
            return;
        }
        self.tail(mark).text.extend(chars);
    }

    pub fn push_str(&mut self, text: &str, mark: MarkKind) {
        if text.is_empty() {
            return;
        }
        self.tail(mark).text.push_str(text);
    }

    fn tail(&mut self, mark: MarkKind) -> &mut Segment {
        let reuse = self.segments.last().is_some_and(|last| last.mark == mark);
        if !reuse {
            self.segments.push(Segment::new(String::new(), mark));
        }
        let last = self.segments.len() - 1;
        &mut self.segments[last]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The original line, markers stripped
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn marked_runs(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_marked())
    }

    /// Escaped text with marked runs wrapped in `<span class='del'>` or
    /// `<span class='ins'>`.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.mark.css_class() {
                Some(class) => {
                    out.push_str("<span class='");
                    out.push_str(class);
                    out.push_str("'>");
                    escape_html_into(&mut out, &segment.text);
                    out.push_str("</span>");
                }
                None => escape_html_into(&mut out, &segment.text),
            }
        }
        out
    }

    /// Escaped text without any span markers.
    pub fn to_escaped_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            escape_html_into(&mut out, &segment.text);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Unchanged,
    Changed,
    OldOnly,
    NewOnly,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RowKind::Unchanged => "unchanged",
            RowKind::Changed => "changed",
            RowKind::OldOnly => "old-only",
            RowKind::NewOnly => "new-only",
        };
        write!(f, "{label}")
    }
}

/// One line of comparison output: a pair of lines, or a line present on one side only
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Row {
    pub kind: RowKind,
    pub left: AnnotatedLine,
    pub right: AnnotatedLine,
}

impl Row {
    pub fn unchanged(old: &str, new: &str) -> Self {
        Row::new(
            RowKind::Unchanged,
            AnnotatedLine::plain(old),
            AnnotatedLine::plain(new),
        )
    }

    pub fn old_only(old: &str) -> Self {
        Row::new(
            RowKind::OldOnly,
            AnnotatedLine::marked(old, MarkKind::Deletion),
            AnnotatedLine::default(),
        )
    }

    pub fn new_only(new: &str) -> Self {
        Row::new(
            RowKind::NewOnly,
            AnnotatedLine::default(),
            AnnotatedLine::marked(new, MarkKind::Insertion),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSummary {
    pub unchanged: usize,
    pub changed: usize,
    pub old_only: usize,
    pub new_only: usize,
}

impl RowSummary {
    pub fn of(rows: &[Row]) -> Self {
        rows.iter().fold(Self::default(), |mut summary, row| {
            match row.kind {
                RowKind::Unchanged => summary.unchanged += 1,
                RowKind::Changed => summary.changed += 1,
                RowKind::OldOnly => summary.old_only += 1,
                RowKind::NewOnly => summary.new_only += 1,
            }
            summary
        })
    }

    pub fn is_identical(&self) -> bool {
        self.changed == 0 && self.old_only == 0 && self.new_only == 0
    }
}

impl fmt::Display for RowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unchanged, {} changed, {} old-only, {} new-only",
            self.unchanged, self.changed, self.old_only, self.new_only
        )
    }
}
