use crate::artifacts::diff::lcs::{AlignLimits, LcsAligner, Match};
use crate::artifacts::diff::row::{AnnotatedLine, MarkKind};
use crate::errors::DiffResult;

/// Old line with every character missing from the alignment marked as deleted.
pub fn render_old(old: &[char], matches: &[Match]) -> AnnotatedLine {
    render_side(old, matches.iter().map(|m| m.old), MarkKind::Deletion)
}

/// New line with every character missing from the alignment marked as inserted.
pub fn render_new(new: &[char], matches: &[Match]) -> AnnotatedLine {
    render_side(new, matches.iter().map(|m| m.new), MarkKind::Insertion)
}

fn render_side(
    line: &[char],
    matched: impl Iterator<Item = usize>,
    mark: MarkKind,
) -> AnnotatedLine {
    let mut annotated = AnnotatedLine::default();
    let mut cursor = 0;

    for position in matched {
        annotated.push(&line[cursor..position], mark);
        annotated.push(&line[position..=position], MarkKind::None);
        cursor = position + 1;
    }
    annotated.push(&line[cursor..], mark);

    annotated
}

/// Aligns a pair of lines once and renders both sides.
pub fn render_line_pair(
    old: &str,
    new: &str,
    limits: AlignLimits,
) -> DiffResult<(AnnotatedLine, AnnotatedLine)> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    let matches = LcsAligner::new(&old, &new).with_limits(limits).matches()?;

    Ok((render_old(&old, &matches), render_new(&new, &matches)))
}

pub fn render_old_with_deletions(old: &str, new: &str) -> DiffResult<String> {
    let (left, _) = render_line_pair(old, new, AlignLimits::default())?;
    Ok(left.to_markup())
}

pub fn render_new_with_insertions(old: &str, new: &str) -> DiffResult<String> {
    let (_, right) = render_line_pair(old, new, AlignLimits::default())?;
    Ok(right.to_markup())
}
