use crate::cff::matrix::Cff;
use crate::combin::binomial::choose;
use crate::combin::subsets::k_subset_lex_successor;

/// 1-CFF(t,n) from a Sperner system: the columns are the first n of
/// the floor(t/2)-subsets of the ground set in lexicographic order,
/// with t = min{s : C(s, floor(s/2)) >= n}. optimal among 1-CFFs.
pub fn sperner(n: u64) -> Option<Cff> {
    if n < 2 {
        return None;
    }
    let mut t = 0;
    while choose(t, t / 2) < n {
        t += 1;
    }
    let mut cff = Cff::alloc(1, t, n)?;
    let k = t / 2;
    let mut subset: Vec<usize> = (0..k).collect();
    let mut col: u64 = 0;
    loop {
        for &row in subset.iter() {
            cff.set(row, col, true);
        }
        col += 1;
        if col == n || !k_subset_lex_successor(t, k, &mut subset) {
            break;
        }
    }
    Some(cff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_columns_known_matrix() {
        let cff = sperner(6).unwrap();
        assert!(cff.d() == 1 && cff.t() == 4 && cff.n() == 6);
        let expected = [
            [1, 1, 1, 0, 0, 0],
            [1, 0, 0, 1, 1, 0],
            [0, 1, 0, 1, 0, 1],
            [0, 0, 1, 0, 1, 1],
        ];
        for r in 0..4 {
            for c in 0..6 {
                assert!(cff.get(r, c as u64) == (expected[r][c] == 1));
            }
        }
        assert!(cff.verify());
    }

    #[test]
    fn ground_set_is_minimal() {
        assert!(sperner(2).unwrap().t() == 2);
        assert!(sperner(3).unwrap().t() == 3);
        assert!(sperner(5).unwrap().t() == 4);
        assert!(sperner(6).unwrap().t() == 4);
        assert!(sperner(7).unwrap().t() == 5);
        assert!(sperner(10).unwrap().t() == 5);
        assert!(sperner(11).unwrap().t() == 6);
        assert!(sperner(20).unwrap().t() == 6);
    }

    #[test]
    fn wider_systems_verify() {
        for n in [2, 9, 15, 21] {
            assert!(sperner(n).unwrap().verify());
        }
    }

    #[test]
    fn singleton_is_rejected() {
        assert!(sperner(0).is_none());
        assert!(sperner(1).is_none());
    }
}
