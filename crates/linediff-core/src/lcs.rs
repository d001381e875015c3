//! Longest-common-subsequence table and backtracking.
//!
//! Both the line diff and the character diff run on top of this module; they
//! differ only in the element type and how elements are compared.

/// One step of an alignment between two sequences.
///
/// Indices are 0-based positions into the left (`Delete`, `Equal.0`) and
/// right (`Insert`, `Equal.1`) sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Element present in both sequences.
    Equal(usize, usize),
    /// Element present only in the left sequence.
    Delete(usize),
    /// Element present only in the right sequence.
    Insert(usize),
}

/// The `(m+1) x (n+1)` LCS length table, stored row-major.
#[derive(Clone, Debug)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Build the table for `left` and `right` using `eq` to compare elements.
    pub fn build<T, F>(left: &[T], right: &[T], eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let rows = left.len() + 1;
        let cols = right.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if eq(&left[i - 1], &right[j - 1]) {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of cells a table for sequences of these lengths would hold.
    pub fn cell_count(left_len: usize, right_len: usize) -> u64 {
        (left_len as u64).saturating_add(1).saturating_mul((right_len as u64).saturating_add(1))
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Walk the table from the bottom-right corner back to the origin and
    /// return the alignment in top-to-bottom order.
    ///
    /// When the element pair does not match and both neighbours hold the same
    /// length, the step into the right sequence (`Insert`) is taken first.
    /// Output on inputs with several optimal alignments depends on this.
    pub fn backtrack<T, F>(&self, left: &[T], right: &[T], eq: F) -> Vec<Step>
    where
        F: Fn(&T, &T) -> bool,
    {
        debug_assert_eq!(left.len() + 1, self.rows);
        debug_assert_eq!(right.len() + 1, self.cols);

        let mut steps = Vec::with_capacity(left.len().max(right.len()));
        let (mut i, mut j) = (left.len(), right.len());

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && eq(&left[i - 1], &right[j - 1]) {
                steps.push(Step::Equal(i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || self.get(i, j - 1) >= self.get(i - 1, j)) {
                steps.push(Step::Insert(j - 1));
                j -= 1;
            } else {
                steps.push(Step::Delete(i - 1));
                i -= 1;
            }
        }

        steps.reverse();
        steps
    }
}

/// Build the table and backtrack in one go.
pub fn align<T, F>(left: &[T], right: &[T], eq: F) -> Vec<Step>
where
    F: Fn(&T, &T) -> bool,
{
    let table = LcsTable::build(left, right, &eq);
    table.backtrack(left, right, &eq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: &char, b: &char) -> bool {
        a == b
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn table_lengths() {
        let l = chars("ABCBDAB");
        let r = chars("BDCABA");
        let table = LcsTable::build(&l, &r, eq);
        assert_eq!(table.lcs_len(), 4);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(3, 0), 0);
    }

    #[test]
    fn empty_sides() {
        let empty: Vec<char> = Vec::new();
        let r = chars("ab");

        assert!(align(&empty, &empty, eq).is_empty());
        assert_eq!(align(&empty, &r, eq), vec![Step::Insert(0), Step::Insert(1)]);
        assert_eq!(align(&r, &empty, eq), vec![Step::Delete(0), Step::Delete(1)]);
    }

    #[test]
    fn tie_prefers_insert_when_walking_back() {
        // "a" vs "b": both neighbours of (1,1) are 0, so the walk emits
        // Insert first, which ends up after the Delete once reversed.
        let steps = align(&chars("a"), &chars("b"), eq);
        assert_eq!(steps, vec![Step::Delete(0), Step::Insert(0)]);
    }

    #[test]
    fn ambiguous_alignment_is_deterministic() {
        // Both "a" and "b" are optimal common subsequences; preferring
        // Insert on the walk back keeps "b".
        let steps = align(&chars("ab"), &chars("ba"), eq);
        assert_eq!(
            steps,
            vec![Step::Delete(0), Step::Equal(1, 0), Step::Insert(1)]
        );
    }

    #[test]
    fn custom_equality() {
        let l = chars("AbC");
        let r = chars("aBc");
        let steps = align(&l, &r, |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(
            steps,
            vec![Step::Equal(0, 0), Step::Equal(1, 1), Step::Equal(2, 2)]
        );
    }

    #[test]
    fn cell_count_saturates() {
        assert_eq!(LcsTable::cell_count(0, 0), 1);
        assert_eq!(LcsTable::cell_count(3, 4), 20);
        assert_eq!(LcsTable::cell_count(usize::MAX, usize::MAX), u64::MAX);
    }
}
