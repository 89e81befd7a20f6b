use super::matrix::Cff;
use crate::combin::subsets::k_subset_lex_successor;

impl Cff {
    /// checks the cover-free property exhaustively: every (d+1)-subset
    /// of columns must give each of its columns a private witness row,
    /// a row where that column holds the only 1 of the subset. cost is
    /// O(C(n, d+1) * t * d); meant for diagnostics, not hot paths.
    pub fn verify(&self) -> bool {
        let k = self.d() + 1;
        if k as u64 > self.n() {
            return false;
        }
        let n = self.n() as usize;
        let mut cols: Vec<usize> = (0..k).collect();
        loop {
            let mut witnessed = vec![false; k];
            let mut found = 0;
            for r in 0..self.t() {
                let mut weight = 0;
                let mut last = 0;
                for (i, &c) in cols.iter().enumerate() {
                    if self.get(r, c as u64) {
                        weight += 1;
                        last = i;
                    }
                }
                if weight == 1 && !witnessed[last] {
                    witnessed[last] = true;
                    found += 1;
                    if found == k {
                        break;
                    }
                }
            }
            if found != k {
                return false;
            }
            if !k_subset_lex_successor(n, k, &mut cols) {
                break;
            }
        }
        true
    }
}
