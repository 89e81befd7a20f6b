use crate::cff::matrix::Cff;
use crate::combin::binomial::choose;
use crate::combin::subsets::k_subset_lex_successor;

/// 2-CFF with twice the columns: two copies of the input side by side,
/// s rows of balanced vectors splitting the halves (the first n of the
/// ceil(s/2)-subsets of [s] on the left, their complements on the
/// right), and one all-0|all-1 row for odd s or two complementary rows
/// for even s. s must give every column its own balanced vector,
/// C(s, s/2) >= n; an undersized s is rejected rather than leaving
/// columns with an empty band.
pub fn doubling(cff: &Cff, s: usize) -> Option<Cff> {
    if cff.d() != 2 || s < 1 {
        return None;
    }
    if choose(s, s / 2) < cff.n() {
        return None;
    }
    let t = cff.t() + s + if s % 2 == 1 { 1 } else { 2 };
    let n = cff.n();
    let mut out = Cff::alloc(2, t, n.checked_mul(2)?)?;
    for r in 0..cff.t() {
        for c in 0..n {
            if cff.get(r, c) {
                out.set(r, c, true);
                out.set(r, c + n, true);
            }
        }
    }
    let half = s.div_ceil(2);
    let mut subset: Vec<usize> = (0..half).collect();
    let mut column: u64 = 0;
    loop {
        if column == n {
            break;
        }
        let mut j = 0;
        for i in 0..s {
            let inside = subset[j] == i;
            if inside {
                j += 1;
            }
            if j == half {
                j -= 1;
            }
            out.set(i + cff.t(), column, inside);
            out.set(i + cff.t(), column + n, !inside);
        }
        column += 1;
        if !k_subset_lex_successor(s, half, &mut subset) {
            break;
        }
    }
    if s % 2 == 1 {
        for c in 0..n {
            out.set(cff.t() + s, c + n, true);
        }
    } else {
        for c in 0..n {
            out.set(cff.t() + s, c, true);
            out.set(cff.t() + s + 1, c + n, true);
        }
    }
    Some(out)
}
