use std::fmt;
use std::iter::FusedIterator;

/// One ADMIXTURE run: cluster count `k` and trial number `r`, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunSpec {
    pub k: u64,
    pub r: u64,
}

impl RunSpec {
    pub fn new(k: u64, r: u64) -> Self {
        Self { k, r }
    }

    /// Run label, e.g. `K3r2`
    pub fn label(&self) -> String {
        format!("K{}r{}", self.k, self.r)
    }

    /// Relative path of the Q matrix ADMIXTURE writes for this run
    pub fn q_file(&self) -> String {
        format!("./Admixture-input.{}_trial{}.Q", self.k, self.r)
    }

    pub fn manifest_line(&self) -> ManifestLine {
        ManifestLine(*self)
    }
}

/// A single manifest record: label, K and Q-file path, tab separated.
///
/// `Display` renders the record without the line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestLine(RunSpec);

impl fmt::Display for ManifestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = &self.0;
        write!(f, "{}\t{}\t{}", run.label(), run.k, run.q_file())
    }
}

/// The full K x R grid of runs.
///
/// Iteration is k-major: every trial of K=1 comes before any trial of K=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunGrid {
    pub max_k: u64,
    pub trials: u64,
}

impl RunGrid {
    /// Bounds of zero or below give an empty grid.
    pub fn new(max_k: i64, trials: i64) -> Self {
        Self {
            max_k: u64::try_from(max_k).unwrap_or(0),
            trials: u64::try_from(trials).unwrap_or(0),
        }
    }

    /// Number of runs in the grid
    pub fn len(&self) -> u128 {
        u128::from(self.max_k) * u128::from(self.trials)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> RunIter {
        RunIter {
            grid: *self,
            next: if self.is_empty() {
                None
            } else {
                Some(RunSpec::new(1, 1))
            },
        }
    }
}

impl IntoIterator for RunGrid {
    type Item = RunSpec;
    type IntoIter = RunIter;

    fn into_iter(self) -> RunIter {
        self.iter()
    }
}

impl IntoIterator for &RunGrid {
    type Item = RunSpec;
    type IntoIter = RunIter;

    fn into_iter(self) -> RunIter {
        self.iter()
    }
}

/// Lazy iterator over a [`RunGrid`]
#[derive(Debug, Clone)]
pub struct RunIter {
    grid: RunGrid,
    next: Option<RunSpec>,
}

impl Iterator for RunIter {
    type Item = RunSpec;

    fn next(&mut self) -> Option<RunSpec> {
        let current = self.next?;
        self.next = if current.r < self.grid.trials {
            Some(RunSpec::new(current.k, current.r + 1))
        } else if current.k < self.grid.max_k {
            Some(RunSpec::new(current.k + 1, 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(RunSpec { k, r }) => {
                u128::from(self.grid.max_k - k) * u128::from(self.grid.trials)
                    + u128::from(self.grid.trials - r + 1)
            }
            None => 0,
        };
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RunIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_q_file() {
        let run = RunSpec::new(3, 12);
        assert_eq!(run.label(), "K3r12");
        assert_eq!(run.q_file(), "./Admixture-input.3_trial12.Q");
    }

    #[test]
    fn test_manifest_line_format() {
        let line = RunSpec::new(2, 3).manifest_line();
        assert_eq!(line.to_string(), "K2r3\t2\t./Admixture-input.2_trial3.Q");
    }

    #[test]
    fn test_manifest_line_matches_parts() {
        let run = RunSpec::new(7, 1);
        let expected = format!("{}\t{}\t{}", run.label(), run.k, run.q_file());
        assert_eq!(run.manifest_line().to_string(), expected);
    }

    #[test]
    fn test_grid_order_is_k_major() {
        let runs: Vec<RunSpec> = RunGrid::new(2, 3).iter().collect();
        assert_eq!(
            runs,
            vec![
                RunSpec::new(1, 1),
                RunSpec::new(1, 2),
                RunSpec::new(1, 3),
                RunSpec::new(2, 1),
                RunSpec::new(2, 2),
                RunSpec::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_grid_index_formula() {
        let grid = RunGrid::new(5, 4);
        for (i, run) in grid.iter().enumerate() {
            let expected = (run.k - 1) as usize * 4 + (run.r - 1) as usize;
            assert_eq!(i, expected);
        }
        assert_eq!(grid.iter().count() as u128, grid.len());
    }

    #[test]
    fn test_single_run_grid() {
        let runs: Vec<RunSpec> = RunGrid::new(1, 1).into_iter().collect();
        assert_eq!(runs, vec![RunSpec::new(1, 1)]);
    }

    #[test]
    fn test_zero_bound_is_empty() {
        assert!(RunGrid::new(0, 5).is_empty());
        assert!(RunGrid::new(-1, 2).is_empty());
        assert!(RunGrid::new(4, -3).is_empty());
        assert_eq!(RunGrid::new(-1, -1).iter().count(), 0);
        assert!(RunGrid::new(5, 0).is_empty());
        assert_eq!(RunGrid::new(0, 0).iter().next(), None);
        assert_eq!(RunGrid::new(3, 0).iter().count(), 0);
    }

    #[test]
    fn test_len_does_not_overflow() {
        let grid = RunGrid::new(i64::MAX, i64::MAX);
        assert_eq!(grid.len(), i64::MAX as u128 * i64::MAX as u128);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let mut iter = RunGrid::new(3, 4).iter();
        assert_eq!(iter.size_hint(), (12, Some(12)));

        for taken in 1..=12 {
            iter.next();
            assert_eq!(iter.size_hint(), (12 - taken, Some(12 - taken)));
        }
        assert_eq!(iter.next(), None);
        assert_eq!(RunGrid::new(0, 4).iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_saturates_on_huge_grid() {
        let iter = RunGrid::new(i64::MAX, i64::MAX).iter();
        assert_eq!(iter.size_hint(), (usize::MAX, None));
    }
}
