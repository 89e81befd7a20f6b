use super::planner;
use super::recipe::Recipe;
use super::table::Table;
use crate::cff::matrix::Cff;
use crate::combin::primes::primes;
use crate::constructions::additive::additive;
use crate::constructions::doubling::doubling;
use crate::constructions::extension::extend_by_one;
use crate::constructions::fixed::fixed;
use crate::constructions::kronecker::{kronecker, optimized_kronecker};
use crate::constructions::porat::porat_rothschild;
use crate::constructions::reed_solomon::{reed_solomon, short_reed_solomon};
use crate::constructions::sperner::sperner;
use crate::constructions::sts::sts;

/// the root planning context: one best-known table per d, planned to a
/// fixed point up front, with matrices materialised lazily per query.
/// not thread-safe; queries take &mut self and every concurrent user
/// needs a context of its own.
#[derive(Debug)]
pub struct Tables {
    t_max: usize,
    n_max: u64,
    tables: Vec<Table>,
}

impl Tables {
    /// plans tables for every d up to d_max. rows hold counts and
    /// recipes only; nothing is materialised here.
    pub fn create(d_max: usize, t_max: usize, n_max: u64) -> Self {
        let t_max = t_max.min(usize::try_from(n_max).unwrap_or(usize::MAX));
        let sieve = primes(t_max);
        let mut tables: Vec<Table> = (1..=d_max).map(|d| Table::new(d, t_max, n_max)).collect();
        if let Some(first) = tables.first_mut() {
            planner::seed_sperner(first);
            log::debug!("{:<32}d=1", "planned table");
        }
        for d in 2..=d_max {
            let (lower, upper) = tables.split_at_mut(d - 1);
            let passes = planner::plan(&mut upper[0], &lower[d - 2], t_max, &sieve);
            log::debug!("{:<32}d={} in {} passes", "planned table", d, passes);
        }
        Self { t_max, n_max, tables }
    }

    pub fn d_max(&self) -> usize {
        self.tables.len()
    }
    pub fn t_max(&self) -> usize {
        self.t_max
    }
    pub fn n_max(&self) -> u64 {
        self.n_max
    }
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// materialises the best-known CFF with exactly t rows, or None
    /// when the cell is out of range or its recipe cannot be realised
    pub fn get_by_t(&mut self, d: usize, t: usize) -> Option<Cff> {
        if d < 1 || t < 1 || d > self.tables.len() {
            return None;
        }
        if t >= self.tables[d - 1].len() {
            return None;
        }
        let mut visited = Vec::new();
        let ok = self.realise(d, t, &mut visited);
        let root = self.tables[d - 1].row_mut(t).cache.take();
        for (dv, tv) in visited {
            self.tables[dv - 1].row_mut(tv).cache = None;
        }
        if ok { root } else { None }
    }

    /// materialises the best-known CFF with at least n columns; the
    /// result may be wider than asked, reduce_n trims it logically
    pub fn get_by_n(&mut self, d: usize, n: u64) -> Option<Cff> {
        if d < 1 || n < 1 || d > self.tables.len() {
            return None;
        }
        let t = self.tables[d - 1].search(n)?;
        self.get_by_t(d, t)
    }

    /// walks the recipe tree under (d, t), parking every materialised
    /// child in its row's cache slot so shared sub-recipes build once.
    /// the visited list is the cleanup ledger for the request; slots
    /// outlive a single get only as None.
    fn realise(&mut self, d: usize, t: usize, visited: &mut Vec<(usize, usize)>) -> bool {
        if self.tables[d - 1].row(t).cache.is_some() {
            return true;
        }
        visited.push((d, t));
        let recipe = self.tables[d - 1].row(t).recipe;
        let built = match recipe {
            Recipe::Identity(t) => diagonal(d, t),
            Recipe::Sperner(n) => sperner(n),
            Recipe::Sts(v) => sts(v),
            Recipe::PoratRothschild { p, a, k, r, m } => porat_rothschild(p, a, k, r, m),
            Recipe::ReedSolomon { p, a, k, m } => reed_solomon(p, a, k, m),
            Recipe::ShortReedSolomon { p, a, k, m, s } => short_reed_solomon(p, a, k, m, s),
            Recipe::Fixed(t) => fixed(d, t),
            Recipe::ExtendByOne(child) => {
                if self.realise(d, child, visited) {
                    self.tables[d - 1].row(child).cache.as_ref().and_then(extend_by_one)
                } else {
                    None
                }
            }
            Recipe::Additive(t1, t2) => {
                if self.realise(d, t1, visited) && self.realise(d, t2, visited) {
                    let left = self.tables[d - 1].row(t2).cache.as_ref();
                    let right = self.tables[d - 1].row(t1).cache.as_ref();
                    match (left, right) {
                        (Some(left), Some(right)) => additive(left, right),
                        _ => None,
                    }
                } else {
                    None
                }
            }
            Recipe::Doubling(child, s) => {
                if self.realise(2, child, visited) {
                    self.tables[1].row(child).cache.as_ref().and_then(|cff| doubling(cff, s))
                } else {
                    None
                }
            }
            Recipe::Kronecker(t1, t2) => {
                if self.realise(d, t1, visited) && self.realise(d, t2, visited) {
                    let left = self.tables[d - 1].row(t1).cache.as_ref();
                    let right = self.tables[d - 1].row(t2).cache.as_ref();
                    match (left, right) {
                        (Some(left), Some(right)) => kronecker(left, right),
                        _ => None,
                    }
                } else {
                    None
                }
            }
            Recipe::OptKronecker { inner, bottom, outer } => {
                if self.realise(d, inner, visited)
                    && self.realise(d, bottom, visited)
                    && self.realise(d - 1, outer, visited)
                {
                    let out = self.tables[d - 2].row(outer).cache.as_ref();
                    let inn = self.tables[d - 1].row(inner).cache.as_ref();
                    let bot = self.tables[d - 1].row(bottom).cache.as_ref();
                    match (out, inn, bot) {
                        (Some(out), Some(inn), Some(bot)) => optimized_kronecker(out, inn, bot),
                        _ => None,
                    }
                } else {
                    None
                }
            }
        };
        let ok = built.is_some();
        self.tables[d - 1].row_mut(t).cache = built;
        ok
    }
}

/// identity rows materialise the raw diagonal without the public d < n
/// guard: rows with t <= d still occur as kronecker operands, where the
/// degenerate diagonal contributes exactly its block structure
fn diagonal(d: usize, t: usize) -> Option<Cff> {
    let mut cff = Cff::alloc(d, t, t as u64)?;
    for i in 0..t {
        cff.set(i, i as u64, true);
    }
    Some(cff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sperner_level_is_exact() {
        let mut tables = Tables::create(1, 10, 100_000);
        assert!(tables.tables()[0].row(4).n == 6);
        assert!(tables.tables()[0].row(6).n == 20);
        let cff = tables.get_by_t(1, 4).unwrap();
        assert!(cff.d() == 1 && cff.t() == 4 && cff.n() == 6);
        assert!(cff.verify());
    }

    #[test]
    fn known_reed_solomon_cell() {
        let mut tables = Tables::create(3, 100, 2000);
        let cff = tables.get_by_t(3, 20).unwrap();
        assert!(cff.d() == 3 && cff.t() == 20 && cff.n() == 25);
        assert!(cff.verify());
    }

    #[test]
    fn query_by_columns_rounds_up() {
        let mut tables = Tables::create(3, 100, 2000);
        let cff = tables.get_by_n(3, 26).unwrap();
        assert!(cff.t() <= 21);
        assert!(cff.n() >= 26);
        assert!(cff.verify());
    }

    #[test]
    fn steiner_cell_materialises() {
        let mut tables = Tables::create(2, 40, 100_000);
        let cff = tables.get_by_t(2, 9).unwrap();
        assert!(cff.d() == 2 && cff.t() == 9 && cff.n() == 12);
        assert!(cff.verify());
    }

    #[test]
    fn survey_cells_win_their_rows() {
        let tables = Tables::create(2, 100, 2000);
        let table = &tables.tables()[1];
        assert!(table.row(20).n == 80);
        assert!(table.row(21).n == 120);
        assert!(table.row(22).n == 176);
        assert!(table.row(23).n == 253);
        assert!(table.row(23).recipe == Recipe::Fixed(23));
    }

    #[test]
    fn rows_never_decrease_along_t() {
        let tables = Tables::create(3, 60, 100_000);
        for table in tables.tables() {
            for t in 1..table.len() {
                assert!(table.row(t - 1).n <= table.row(t).n);
            }
        }
    }

    #[test]
    fn planning_is_deterministic() {
        let one = Tables::create(3, 50, 10_000);
        let two = Tables::create(3, 50, 10_000);
        for (a, b) in one.tables().iter().zip(two.tables().iter()) {
            assert!(a.len() == b.len());
            for t in 0..a.len() {
                assert!(a.row(t).n == b.row(t).n);
                assert!(a.row(t).recipe == b.row(t).recipe);
            }
        }
    }

    #[test]
    fn saturation_truncates_the_level() {
        let mut tables = Tables::create(2, 50, 100);
        let table = &tables.tables()[1];
        // the survey row at t = 21 is the first to reach the ceiling
        assert!(table.len() == 22);
        assert!(table.row(20).n == 80);
        assert!(table.row(21).n == 100);
        let cff = tables.get_by_t(2, 21).unwrap();
        assert!(cff.n() >= 100);
        assert!(tables.get_by_t(2, 22).is_none());
        assert!(tables.get_by_n(2, 100).is_some());
        assert!(tables.get_by_n(2, 101).is_none());
    }

    #[test]
    fn out_of_range_queries() {
        let mut tables = Tables::create(2, 20, 1000);
        assert!(tables.get_by_t(0, 5).is_none());
        assert!(tables.get_by_t(3, 5).is_none());
        assert!(tables.get_by_t(2, 0).is_none());
        assert!(tables.get_by_t(2, 21).is_none());
        assert!(tables.get_by_n(2, 0).is_none());
        assert!(tables.get_by_n(4, 10).is_none());
    }

    #[test]
    fn repeated_queries_rebuild_cleanly() {
        let mut tables = Tables::create(2, 30, 1000);
        let first = tables.get_by_t(2, 17).unwrap();
        let second = tables.get_by_t(2, 17).unwrap();
        assert!(first.d() == second.d());
        assert!(first.t() == second.t());
        assert!(first.n() == second.n());
        for r in 0..first.t() {
            for c in 0..first.n() {
                assert!(first.get(r, c) == second.get(r, c));
            }
        }
        for table in tables.tables() {
            for t in 0..table.len() {
                assert!(table.row(t).cache.is_none());
            }
        }
    }

    #[test]
    fn deep_recipes_realise_and_verify() {
        let mut tables = Tables::create(2, 36, 100_000);
        for t in [17, 25, 33] {
            let cff = tables.get_by_t(2, t).unwrap();
            assert!(cff.t() == t);
            assert!(cff.n() >= tables.tables()[1].row(t).n);
            assert!(cff.verify());
        }
    }

    #[test]
    fn shrunk_t_max_follows_n_max() {
        let tables = Tables::create(1, 100, 12);
        // t is capped by n, so the level has rows 0..=12 at most
        assert!(tables.tables()[0].len() <= 13);
    }
}
