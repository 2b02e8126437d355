use crate::errors::{DiffError, DiffResult};
use derive_new::new;
use std::fmt;

/// Largest alignment table (in cells) built for a single pair of sequences
/// unless the caller configures another limit.
pub const DEFAULT_MAX_CELLS: usize = 100_000_000;

/// One matched element: `old[old] == new[new]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Match {
    pub old: usize,
    pub new: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct AlignLimits {
    max_cells: usize,
}

impl AlignLimits {
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    pub fn max_cells(&self) -> usize {
        self.max_cells
    }
}

impl Default for AlignLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELLS)
    }
}

/// `score(i, j)` is the length of the longest common subsequence of
/// `old[i..]` and `new[j..]`
pub struct ScoreTable {
    cols: usize,
    cells: Vec<usize>,
}

impl ScoreTable {
    pub fn build<T: Eq>(old: &[T], new: &[T], limits: AlignLimits) -> DiffResult<Self> {
        let (n, m) = (old.len(), new.len());
        let exhausted = || DiffError::ResourceExhausted {
            old_len: n,
            new_len: m,
        };

        let rows = n.checked_add(1).ok_or_else(exhausted)?;
        let cols = m.checked_add(1).ok_or_else(exhausted)?;
        let size = rows.checked_mul(cols).ok_or_else(exhausted)?;
        if size > limits.max_cells() {
            return Err(exhausted());
        }

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| exhausted())?;
        cells.resize(size, 0);

        // the last row and the last column stay 0 (one of the suffixes is empty)
        for i in (0..n).rev() {
            for j in (0..m).rev() {
                cells[i * cols + j] = if old[i] == new[j] {
                    cells[(i + 1) * cols + j + 1] + 1
                } else {
                    cells[(i + 1) * cols + j].max(cells[i * cols + j + 1])
                };
            }
        }

        Ok(ScoreTable { cols, cells })
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn lcs_len(&self) -> usize {
        self.cells[0]
    }
}

impl fmt::Debug for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let row = row.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Longest common subsequence alignment of two sequences.
///
/// The backtrack walks the score table from the top-left corner and, when
/// skipping an element is unavoidable, prefers skipping the old element
/// whenever that keeps the alignment optimal. Among several optimal
/// alignments this always picks the same one, so the rendered output is
/// reproducible.
#[derive(Debug, Clone, new)]
pub struct LcsAligner<'d, T> {
    old: &'d [T],
    new: &'d [T],
    #[new(default)]
    limits: AlignLimits,
}

impl<'d, T: Eq> LcsAligner<'d, T> {
    pub fn with_limits(mut self, limits: AlignLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Score table over the complete sequences.
    pub fn score_table(&self) -> DiffResult<ScoreTable> {
        ScoreTable::build(self.old, self.new, self.limits)
    }

    /// Matched index pairs in left-to-right order.
    pub fn matches(&self) -> DiffResult<Vec<Match>> {
        // a shared prefix is always matched first by the backtrack, so it never
        // needs a slot in the table
        let prefix = common_prefix_len(self.old, self.new);
        let (old, new) = (&self.old[prefix..], &self.new[prefix..]);
        let table = ScoreTable::build(old, new, self.limits)?;

        #[cfg(feature = "debug_align")]
        tracing::trace!(prefix, "score table:\n{:?}", table);

        let mut matches = Vec::with_capacity(prefix + table.lcs_len());
        matches.extend((0..prefix).map(|k| Match::new(k, k)));

        let (mut i, mut j) = (0, 0);
        while i < old.len() && j < new.len() {
            if old[i] == new[j] {
                matches.push(Match::new(prefix + i, prefix + j));
                i += 1;
                j += 1;
            } else if table.get(i + 1, j) >= table.get(i, j + 1) {
                i += 1;
            } else {
                j += 1;
            }
        }

        #[cfg(feature = "debug_align")]
        tracing::trace!(?matches, "backtrack finished");

        Ok(matches)
    }

    pub fn lcs_len(&self) -> DiffResult<usize> {
        Ok(self.score_table()?.lcs_len())
    }
}

fn common_prefix_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn pairs(matches: &[Match]) -> Vec<(usize, usize)> {
        matches.iter().map(|m| (m.old, m.new)).collect()
    }

    // two-row rolling table, independent from ScoreTable
    fn reference_lcs_len(a: &[char], b: &[char]) -> usize {
        let mut prev = vec![0; b.len() + 1];
        for x in a {
            let mut curr = vec![0; b.len() + 1];
            for (j, y) in b.iter().enumerate() {
                curr[j + 1] = if x == y {
                    prev[j] + 1
                } else {
                    prev[j + 1].max(curr[j])
                };
            }
            prev = curr;
        }
        prev[b.len()]
    }

    #[fixture]
    fn string_inputs() -> (Vec<char>, Vec<char>) {
        (chars("abcabba"), chars("cbabac"))
    }

    #[rstest]
    fn single_substitution_keeps_surrounding_characters() {
        let (old, new) = (chars("cat"), chars("cot"));
        let matches = LcsAligner::new(&old, &new).matches().unwrap();

        assert_eq!(pairs(&matches), vec![(0, 0), (2, 2)]);
    }

    #[rstest]
    fn ties_are_broken_by_skipping_the_old_element() {
        let (old, new) = (chars("ab"), chars("ba"));
        let matches = LcsAligner::new(&old, &new).matches().unwrap();

        assert_eq!(pairs(&matches), vec![(1, 0)]);
    }

    #[rstest]
    fn alignment_of_classic_example(string_inputs: (Vec<char>, Vec<char>)) {
        let (old, new) = string_inputs;
        let aligner = LcsAligner::new(&old, &new);
        let matches = aligner.matches().unwrap();

        assert_eq!(aligner.lcs_len().unwrap(), 4);
        assert_eq!(pairs(&matches), vec![(2, 0), (4, 1), (5, 3), (6, 4)]);
    }

    #[rstest]
    #[case("", "")]
    #[case("abc", "")]
    #[case("", "abc")]
    fn empty_sequences_produce_no_matches(#[case] old: &str, #[case] new: &str) {
        let (old, new) = (chars(old), chars(new));
        let matches = LcsAligner::new(&old, &new).matches().unwrap();

        assert!(matches.is_empty());
    }

    #[rstest]
    fn aligns_whole_lines_as_atomic_tokens() {
        let old = vec!["fn main() {", "    one();", "}"];
        let new = vec!["fn main() {", "    zero();", "    one();", "}"];
        let matches = LcsAligner::new(&old, &new).matches().unwrap();

        assert_eq!(pairs(&matches), vec![(0, 0), (1, 2), (2, 3)]);
    }

    #[rstest]
    fn score_table_holds_suffix_lcs_lengths() {
        let (old, new) = (chars("cat"), chars("cot"));
        let table = LcsAligner::new(&old, &new).score_table().unwrap();

        assert_eq!(table.lcs_len(), 2);
        assert_eq!(table.get(1, 1), 1);
        assert_eq!(table.get(2, 2), 1);
        assert_eq!(table.get(3, 0), 0);
        assert_eq!(table.get(0, 3), 0);
    }

    #[rstest]
    fn table_above_cell_limit_is_resource_exhaustion() {
        let (old, new) = (chars("abcd"), chars("wxyz"));
        let result = LcsAligner::new(&old, &new)
            .with_limits(AlignLimits::new(10))
            .matches();

        assert!(matches!(
            result,
            Err(DiffError::ResourceExhausted {
                old_len: 4,
                new_len: 4
            })
        ));
    }

    #[rstest]
    fn shared_prefix_does_not_count_against_the_cell_limit() {
        let (old, new) = (chars("abcdefgh-x"), chars("abcdefgh-y"));
        let matches = LcsAligner::new(&old, &new)
            .with_limits(AlignLimits::new(4))
            .matches()
            .unwrap();

        assert_eq!(matches.len(), 9);
    }

    proptest! {
        #[test]
        fn matches_are_strictly_increasing_and_equal(a in "[abc]{0,12}", b in "[abc]{0,12}") {
            let (a, b) = (chars(&a), chars(&b));
            let matches = LcsAligner::new(&a, &b).matches().unwrap();

            for m in &matches {
                prop_assert_eq!(a[m.old], b[m.new]);
            }
            for w in matches.windows(2) {
                prop_assert!(w[0].old < w[1].old && w[0].new < w[1].new);
            }
        }

        #[test]
        fn match_count_is_the_optimal_lcs_length(a in "[abcd]{0,14}", b in "[abcd]{0,14}") {
            let (a, b) = (chars(&a), chars(&b));
            let aligner = LcsAligner::new(&a, &b);
            let matches = aligner.matches().unwrap();

            prop_assert_eq!(matches.len(), reference_lcs_len(&a, &b));
            prop_assert_eq!(matches.len(), aligner.lcs_len().unwrap());
        }

        #[test]
        fn identical_sequences_match_every_position(a in ".{0,20}") {
            let a = chars(&a);
            let matches = LcsAligner::new(&a, &a).matches().unwrap();

            prop_assert_eq!(pairs(&matches), (0..a.len()).map(|k| (k, k)).collect::<Vec<_>>());
        }
    }
}
