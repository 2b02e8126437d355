use crate::LineAlignment;
use crate::artifacts::diff::lcs::{AlignLimits, LcsAligner};
use crate::artifacts::diff::line_render::render_line_pair;
use crate::artifacts::diff::row::{Row, RowKind};
use crate::errors::DiffResult;
use tracing::{debug, trace};

/// Pairs the lines of both inputs and turns every pair into a row, in input order.
pub fn pair_lines(
    old: &[String],
    new: &[String],
    alignment: LineAlignment,
    limits: AlignLimits,
) -> DiffResult<Vec<Row>> {
    let mut rows = Vec::with_capacity(old.len().max(new.len()));

    match alignment {
        LineAlignment::Positional => pair_positionally(old, new, limits, &mut rows)?,
        LineAlignment::Lcs => pair_by_common_lines(old, new, limits, &mut rows)?,
    }

    debug!(
        ?alignment,
        old_lines = old.len(),
        new_lines = new.len(),
        rows = rows.len(),
        "paired lines"
    );

    Ok(rows)
}

// line i is compared with line i; the longer side's surplus becomes one-sided rows
fn pair_positionally(
    old: &[String],
    new: &[String],
    limits: AlignLimits,
    rows: &mut Vec<Row>,
) -> DiffResult<()> {
    for (old_line, new_line) in old.iter().zip(new) {
        rows.push(compare_lines(old_line, new_line, limits)?);
    }

    let joint = old.len().min(new.len());
    rows.extend(old[joint..].iter().map(|line| Row::old_only(line)));
    rows.extend(new[joint..].iter().map(|line| Row::new_only(line)));

    Ok(())
}

fn pair_by_common_lines(
    old: &[String],
    new: &[String],
    limits: AlignLimits,
    rows: &mut Vec<Row>,
) -> DiffResult<()> {
    let matches = LcsAligner::new(old, new).with_limits(limits).matches()?;
    let (mut i, mut j) = (0, 0);

    for m in matches {
        // lines between two common lines are still compared in lockstep
        pair_positionally(&old[i..m.old], &new[j..m.new], limits, rows)?;
        rows.push(Row::unchanged(&old[m.old], &new[m.new]));
        (i, j) = (m.old + 1, m.new + 1);
    }
    pair_positionally(&old[i..], &new[j..], limits, rows)
}

fn compare_lines(old: &str, new: &str, limits: AlignLimits) -> DiffResult<Row> {
    if old == new {
        return Ok(Row::unchanged(old, new));
    }

    let (left, right) = render_line_pair(old, new, limits)?;
    trace!(
        deleted_runs = left.marked_runs().count(),
        inserted_runs = right.marked_runs().count(),
        "compared changed line"
    );

    Ok(Row::new(RowKind::Changed, left, right))
}
