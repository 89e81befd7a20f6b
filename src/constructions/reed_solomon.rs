use crate::cff::matrix::Cff;
use crate::combin::tuples::k_tuple_lex_successor;
use crate::field::field::Field;

/// CFF from a Reed-Solomon code over F_q, q = p^a: one column per
/// polynomial of degree < k, one q-row slice per codeword letter. the
/// first letter is the leading coefficient itself, the rest are the
/// evaluations at x = 0..m-1. two distinct polynomials agree on at most
/// k-1 letters, which gives a ((m-1)/(k-1))-CFF(m*q, q^k).
pub fn reed_solomon(p: usize, a: usize, k: usize, m: usize) -> Option<Cff> {
    let field = Field::new(p, a)?;
    let q = field.q();
    if k < 2 || k > q || m < 2 || m > q + 1 {
        return None;
    }
    let d = (m - 1) / (k - 1);
    let n = (q as u64).checked_pow(k as u32)?;
    let mut cff = Cff::alloc(d, m * q, n)?;
    let mut coeffs = vec![0usize; k];
    let mut col: u64 = 0;
    loop {
        cff.set(coeffs[0], col, true);
        for x in 0..m - 1 {
            let letter = field.horner(&coeffs, x);
            cff.set((x + 1) * q + letter, col, true);
        }
        col += 1;
        if !k_tuple_lex_successor(q, k, &mut coeffs) {
            break;
        }
    }
    Some(cff)
}

/// the shortened variant: only codewords whose first s letters are all
/// zero survive, and those letters are dropped from the matrix. the
/// surviving code is a [m-s, k-s] code over the same field.
pub fn short_reed_solomon(p: usize, a: usize, k: usize, m: usize, s: usize) -> Option<Cff> {
    if s == 0 {
        return reed_solomon(p, a, k, m);
    }
    let field = Field::new(p, a)?;
    let q = field.q();
    if k < 2 || k > q || m < 2 || m > q + 1 {
        return None;
    }
    if s >= k || s >= m || s + 1 > q {
        return None;
    }
    let short_m = m - s;
    let short_k = k - s;
    // a one-symbol message space leaves pairwise row-disjoint columns,
    // good for any d; labelled 1 like the division-free formula below
    let d = if short_k == 1 { 1 } else { (short_m - 1) / (short_k - 1) };
    let n = (q as u64).checked_pow(short_k as u32)?;
    let mut cff = Cff::alloc(d, short_m * q, n)?;
    let mut coeffs = vec![0usize; k];
    let mut codeword = vec![0usize; m];
    let mut col: u64 = 0;
    loop {
        codeword[0] = coeffs[0];
        for x in 0..s - 1 {
            codeword[x + 1] = field.horner(&coeffs, x);
        }
        if codeword[..s].iter().all(|&letter| letter == 0) {
            for x in s - 1..m - 1 {
                codeword[x + 1] = field.horner(&coeffs, x);
            }
            for i in s..m {
                cff.set((i - s) * q + codeword[i], col, true);
            }
            col += 1;
        }
        if !k_tuple_lex_successor(q, k, &mut coeffs) {
            break;
        }
    }
    Some(cff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_squared_code() {
        let cff = reed_solomon(5, 1, 2, 4).unwrap();
        assert!(cff.d() == 3 && cff.t() == 20 && cff.n() == 25);
        assert!(cff.verify());
    }

    #[test]
    fn prime_power_alphabet() {
        let cff = reed_solomon(2, 2, 2, 4).unwrap();
        assert!(cff.d() == 3 && cff.t() == 16 && cff.n() == 16);
        assert!(cff.verify());
    }

    #[test]
    fn every_column_has_one_letter_per_slice() {
        let cff = reed_solomon(3, 1, 2, 4).unwrap();
        for col in 0..cff.n() {
            for slice in 0..4 {
                let weight = (0..3).filter(|&i| cff.get(slice * 3 + i, col)).count();
                assert!(weight == 1);
            }
        }
    }

    #[test]
    fn bad_parameters() {
        assert!(reed_solomon(6, 1, 2, 4).is_none());
        assert!(reed_solomon(5, 0, 2, 4).is_none());
        assert!(reed_solomon(5, 1, 1, 4).is_none());
        assert!(reed_solomon(5, 1, 2, 7).is_none());
        assert!(reed_solomon(5, 1, 6, 4).is_none());
    }

    #[test]
    fn shortened_once() {
        let cff = short_reed_solomon(5, 1, 3, 5, 1).unwrap();
        assert!(cff.d() == 3 && cff.t() == 20 && cff.n() == 25);
        assert!(cff.verify());
    }

    #[test]
    fn shortening_zero_is_plain() {
        let plain = reed_solomon(5, 1, 2, 4).unwrap();
        let short = short_reed_solomon(5, 1, 2, 4, 0).unwrap();
        assert!(plain.d() == short.d() && plain.t() == short.t() && plain.n() == short.n());
        for r in 0..plain.t() {
            for c in 0..plain.n() {
                assert!(plain.get(r, c) == short.get(r, c));
            }
        }
    }

    #[test]
    fn degenerate_message_space() {
        // k - s = 1 leaves q pairwise disjoint columns
        let cff = short_reed_solomon(5, 1, 2, 4, 1).unwrap();
        assert!(cff.d() == 1 && cff.t() == 15 && cff.n() == 5);
        assert!(cff.verify());
        for a in 0..5u64 {
            for b in a + 1..5 {
                assert!((0..15).all(|r| !(cff.get(r, a) && cff.get(r, b))));
            }
        }
    }

    #[test]
    fn shortening_bounds() {
        assert!(short_reed_solomon(5, 1, 3, 5, 3).is_none());
        assert!(short_reed_solomon(5, 1, 3, 5, 5).is_none());
        assert!(short_reed_solomon(6, 1, 3, 5, 1).is_none());
    }
}
