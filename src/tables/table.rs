use super::recipe::Recipe;
use crate::cff::matrix::Cff;

/// one planned entry: the best known column count for this (d, t) and
/// the recipe reaching it. cache holds a materialised matrix only while
/// a single realisation request is in flight.
#[derive(Debug)]
pub struct Row {
    pub n: u64,
    pub recipe: Recipe,
    pub cache: Option<Cff>,
}

/// the best-known table for one d: rows indexed by t starting at 0,
/// row 0 unused so recipes can name rows by their t directly
#[derive(Debug)]
pub struct Table {
    d: usize,
    n_max: u64,
    dirty: bool,
    rows: Vec<Row>,
}

impl Table {
    /// identity-seeded rows 0..=t_max; every t starts as a t x t
    /// diagonal, the floor any seeder must beat
    pub fn new(d: usize, t_max: usize, n_max: u64) -> Self {
        let rows = (0..=t_max)
            .map(|t| Row { n: t as u64, recipe: Recipe::Identity(t), cache: None })
            .collect();
        Self { d, n_max, dirty: false, rows }
    }

    pub fn d(&self) -> usize {
        self.d
    }
    pub fn n_max(&self) -> u64 {
        self.n_max
    }
    /// number of rows, including the unused row 0; valid t are 1..len
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn row(&self, t: usize) -> &Row {
        &self.rows[t]
    }
    pub fn row_mut(&mut self, t: usize) -> &mut Row {
        &mut self.rows[t]
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }
    pub fn mark(&mut self) {
        self.dirty = true;
    }
    pub fn reset(&mut self) {
        self.dirty = false;
    }

    /// admits a proposal when the row exists, is not frozen at n_max,
    /// and the count is strictly better; ties keep the first recipe
    /// seen. a count reaching n_max is clamped and the table truncated
    /// to t+1 rows: extending a saturated row could only re-clamp, so
    /// later rows are dominated.
    pub fn update(&mut self, t: usize, n: u64, recipe: Recipe) {
        if t >= self.rows.len() {
            return;
        }
        if self.rows[t].n == self.n_max {
            return;
        }
        if n <= self.rows[t].n {
            return;
        }
        if n >= self.n_max {
            self.rows[t].n = self.n_max;
            self.rows.truncate(t + 1);
        } else {
            self.rows[t].n = n;
        }
        self.rows[t].recipe = recipe;
        self.dirty = true;
    }

    /// smallest t whose count reaches n; None when even the last row
    /// falls short. rows are monotone in n, which extend-by-one keeps
    /// true through every planning pass.
    pub fn search(&self, n: u64) -> Option<usize> {
        let mut low = 0;
        let mut high = self.rows.len() - 1;
        if self.rows[high].n < n {
            return None;
        }
        while low <= high {
            let mid = low + (high - low) / 2;
            if self.rows[mid].n == n {
                return Some(mid);
            }
            if self.rows[mid].n > n {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        }
        Some(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_identities() {
        let table = Table::new(2, 10, 1000);
        assert!(table.len() == 11);
        for t in 0..11 {
            assert!(table.row(t).n == t as u64);
            assert!(table.row(t).recipe == Recipe::Identity(t));
        }
    }

    #[test]
    fn update_needs_strict_improvement() {
        let mut table = Table::new(2, 10, 1000);
        table.update(9, 12, Recipe::Sts(9));
        assert!(table.row(9).n == 12);
        table.update(9, 12, Recipe::Additive(4, 5));
        assert!(table.row(9).recipe == Recipe::Sts(9));
        table.update(9, 11, Recipe::Additive(4, 5));
        assert!(table.row(9).n == 12);
        table.update(20, 100, Recipe::Sts(20));
        assert!(table.len() == 11);
    }

    #[test]
    fn update_tracks_dirt() {
        let mut table = Table::new(2, 10, 1000);
        assert!(!table.dirty());
        table.update(9, 12, Recipe::Sts(9));
        assert!(table.dirty());
        table.reset();
        table.update(9, 11, Recipe::Additive(4, 5));
        assert!(!table.dirty());
    }

    #[test]
    fn saturation_clamps_and_truncates() {
        let mut table = Table::new(2, 10, 50);
        table.update(7, 60, Recipe::Sts(7));
        assert!(table.len() == 8);
        assert!(table.row(7).n == 50);
        // the frozen row rejects everything, even larger counts
        table.update(7, 70, Recipe::Sts(7));
        assert!(table.row(7).recipe == Recipe::Sts(7));
        table.update(9, 80, Recipe::Sts(9));
        assert!(table.len() == 8);
    }

    #[test]
    fn search_finds_smallest_sufficient_row() {
        let mut table = Table::new(2, 10, 1000);
        table.update(9, 12, Recipe::Sts(9));
        table.update(10, 13, Recipe::ExtendByOne(9));
        assert!(table.search(1) == Some(1));
        assert!(table.search(9) == Some(9));
        assert!(table.search(10) == Some(9));
        assert!(table.search(12) == Some(9));
        assert!(table.search(13) == Some(10));
        assert!(table.search(14).is_none());
    }

    #[test]
    fn search_exact_matches() {
        let table = Table::new(1, 8, 1000);
        for n in 1..=8u64 {
            assert!(table.search(n) == Some(n as usize));
        }
        assert!(table.search(9).is_none());
    }
}
