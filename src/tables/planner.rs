use super::recipe::Recipe;
use super::table::Table;
use crate::combin::binomial::choose;
use crate::constructions::fixed::SURVEY;
use crate::constructions::porat::entropy;

/// d = 1 rows are written directly: a sperner system is an optimal
/// 1-CFF, so there is nothing to iterate. an overflowing binomial can
/// only mean the count passed n_max, so it clamps the same way.
pub fn seed_sperner(table: &mut Table) {
    let mut t = 4;
    while t < table.len() {
        let n = match choose(t, t / 2) {
            0 => table.n_max(),
            n => n.min(table.n_max()),
        };
        table.update(t, n, Recipe::Sperner(n));
        t += 1;
    }
}

/// catalogued small CFFs (d = 2 only)
pub fn seed_fixed(table: &mut Table) {
    for (t, n) in SURVEY {
        table.update(t, n, Recipe::Fixed(t));
    }
}

/// steiner triple systems for every admissible order (d = 2 only)
pub fn seed_sts(table: &mut Table) {
    let mut v = 2;
    while v < table.len() {
        if v % 6 == 3 || v % 6 == 1 {
            let n = (v as u64) * (v as u64 - 1) / 6;
            table.update(v, n, Recipe::Sts(v));
        }
        v += 1;
    }
}

/// reed-solomon codes and their shortenings over every prime power
/// q <= t_max; message lengths run while the codeword still fits the
/// alphabet, m = d(k-1)+1 <= q+1
pub fn seed_reed_solomon(table: &mut Table, t_max: usize, sieve: &[bool]) {
    let d = table.d();
    let mut p = 2;
    while (p - 1) * (p - 1) < t_max {
        if sieve[p] {
            let mut q = p;
            let mut a = 1;
            while q <= t_max {
                for k in 2..=q {
                    let m = d * (k - 1) + 1;
                    if m > q + 1 {
                        break;
                    }
                    if let Some(n) = (q as u64).checked_pow(k as u32) {
                        table.update(m * q, n, Recipe::ReedSolomon { p, a, k, m });
                    }
                    for s in 1..k {
                        if s + 1 > q || s >= m {
                            break;
                        }
                        if let Some(n) = (q as u64).checked_pow((k - s) as u32) {
                            let recipe = Recipe::ShortReedSolomon { p, a, k, m, s };
                            table.update((m - s) * q, n, recipe);
                        }
                    }
                }
                q *= p;
                a += 1;
            }
        }
        p += 1;
    }
}

/// porat-rothschild codes: the theorem wants 2r <= q < 4r, so only
/// primes whose first power already sits in the window participate
pub fn seed_porat(table: &mut Table, t_max: usize, sieve: &[bool]) {
    let r = table.d() + 1;
    let mut p = 2;
    while p < 4 * r && p < t_max {
        if sieve[p] {
            let mut q = p;
            let mut a = 1;
            while q >= 2 * r && q < 4 * r && q < t_max {
                let hq = entropy(q as f64, r as f64);
                let mut k = 1;
                loop {
                    let m = (k as f64 / (1.0 - hq)).ceil() as usize;
                    if m * q > t_max {
                        break;
                    }
                    let Some(n) = (q as u64).checked_pow(k as u32) else {
                        break;
                    };
                    table.update(m * q, n, Recipe::PoratRothschild { p, a, k, r, m });
                    k += 1;
                }
                q *= p;
                a += 1;
            }
        }
        p += 1;
    }
}

/// doubling proposals for the d = 2 table; the balanced-row count s is
/// the smallest sperner ground set covering this row's columns
pub fn fill_doubling(two: &mut Table, one: &Table) {
    let mut t = 2;
    while t < two.len() {
        let n = two.row(t).n;
        if let Some(s) = one.search(n) {
            two.update(t + s + 2 - s % 2, n.saturating_mul(2), Recipe::Doubling(t, s));
        }
        t += 1;
    }
}

/// every row proposes its successor row
pub fn fill_extensions(table: &mut Table) {
    let mut t = table.d() + 1;
    while t < table.len() {
        let n = table.row(t).n.saturating_add(1);
        table.update(t + 1, n, Recipe::ExtendByOne(t));
        t += 1;
    }
}

/// additive, kronecker, and both optimized-kronecker orderings over
/// every ordered pair of rows; below is the table one d smaller,
/// searched for the outer operand
pub fn fill_pairs(table: &mut Table, below: &Table) {
    let mut t1 = table.d();
    while t1 + 1 < table.len() {
        let mut t2 = t1;
        while t2 < table.len() {
            let n1 = table.row(t1).n;
            let n2 = table.row(t2).n;
            let t = t1 + t2;
            if t > table.len() {
                break;
            }
            table.update(t, n1.saturating_add(n2), Recipe::Additive(t1, t2));
            table.update(t1 * t2, n1.saturating_mul(n2), Recipe::Kronecker(t1, t2));
            if let Some(s) = below.search(n2) {
                let recipe = Recipe::OptKronecker { inner: t1, bottom: t2, outer: s };
                table.update(s * t1 + t2, n1.saturating_mul(n2), recipe);
            }
            if let Some(s) = below.search(n1) {
                let recipe = Recipe::OptKronecker { inner: t2, bottom: t1, outer: s };
                table.update(s * t2 + t1, n1.saturating_mul(n2), recipe);
            }
            t2 += 1;
        }
        t1 += 1;
    }
}

/// seeds one d-level and iterates the fillers to a fixed point,
/// returning the number of passes taken
pub fn plan(table: &mut Table, below: &Table, t_max: usize, sieve: &[bool]) -> usize {
    let d = table.d();
    if d == 2 {
        seed_fixed(table);
        seed_sts(table);
    }
    seed_reed_solomon(table, t_max, sieve);
    seed_porat(table, t_max, sieve);
    table.mark();
    let mut passes = 0;
    while table.dirty() {
        passes += 1;
        table.reset();
        if d == 2 {
            fill_doubling(table, below);
        }
        fill_extensions(table);
        fill_pairs(table, below);
    }
    passes
}
