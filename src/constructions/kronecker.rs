use crate::cff::matrix::Cff;

/// Kronecker product: a d-CFF(t1*t2, n1*n2) from two d-CFFs with the
/// same d. each 1 of the right factor is replaced by a copy of the
/// left factor, each 0 by a zero block.
pub fn kronecker(left: &Cff, right: &Cff) -> Option<Cff> {
    if left.d() != right.d() {
        return None;
    }
    let n = left.n().checked_mul(right.n())?;
    let mut out = Cff::alloc(left.d(), left.t() * right.t(), n)?;
    for n1 in 0..right.n() {
        for t1 in 0..right.t() {
            if right.get(t1, n1) {
                for n2 in 0..left.n() {
                    for s in 0..left.t() {
                        if left.get(s, n2) {
                            out.set(t1 * left.t() + s, n1 * left.n() + n2, true);
                        }
                    }
                }
            }
        }
    }
    Some(out)
}

/// the optimized product: the outer (d-1)-CFF(s, n2) spreads copies of
/// the inner d-CFF(t1, n1) over the top rows, and each column of the
/// bottom d-CFF(t2, n2) is repeated n1 times underneath, giving a
/// d-CFF(s*t1 + t2, n1*n2) with fewer rows than the plain product.
pub fn optimized_kronecker(outer: &Cff, inner: &Cff, bottom: &Cff) -> Option<Cff> {
    if inner.d() != bottom.d() {
        return None;
    }
    if outer.d() + 1 != inner.d() {
        return None;
    }
    if outer.n() < bottom.n() {
        return None;
    }
    let n = bottom.n().checked_mul(inner.n())?;
    let mut out = Cff::alloc(inner.d(), outer.t() * inner.t() + bottom.t(), n)?;
    for n1 in 0..bottom.n() {
        for t1 in 0..outer.t() {
            if outer.get(t1, n1) {
                for n2 in 0..inner.n() {
                    for s in 0..inner.t() {
                        if inner.get(s, n2) {
                            out.set(t1 * inner.t() + s, n1 * inner.n() + n2, true);
                        }
                    }
                }
            }
        }
    }
    let above = outer.t() * inner.t();
    for r in 0..bottom.t() {
        for c in 0..bottom.n() {
            if bottom.get(r, c) {
                for repeat in 0..inner.n() {
                    out.set(r + above, c * inner.n() + repeat, true);
                }
            }
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructions::sperner::sperner;
    use crate::constructions::sts::sts;

    #[test]
    fn product_shape() {
        let left = sts(9).unwrap();
        let right = sts(13).unwrap();
        let product = kronecker(&left, &right).unwrap();
        assert!(product.d() == 2);
        assert!(product.t() == 117);
        assert!(product.n() == 312);
    }

    #[test]
    fn small_product_verifies() {
        let left = sts(7).unwrap();
        let right = sts(9).unwrap();
        let product = kronecker(&left, &right).unwrap();
        assert!(product.d() == 2 && product.t() == 63 && product.n() == 84);
        assert!(product.verify());
    }

    #[test]
    fn cells_follow_both_factors() {
        let left = sts(7).unwrap();
        let right = sts(9).unwrap();
        let product = kronecker(&left, &right).unwrap();
        for n1 in 0..right.n() {
            for t1 in 0..right.t() {
                for n2 in 0..left.n() {
                    for s in 0..left.t() {
                        let expected = right.get(t1, n1) && left.get(s, n2);
                        let cell = product.get(t1 * left.t() + s, n1 * left.n() + n2);
                        assert!(cell == expected);
                    }
                }
            }
        }
    }

    #[test]
    fn product_needs_matching_d() {
        let one = sperner(6).unwrap();
        let two = sts(9).unwrap();
        assert!(kronecker(&one, &two).is_none());
    }

    #[test]
    fn optimized_shape_and_validity() {
        let outer = sperner(7).unwrap();
        let inner = sts(9).unwrap();
        let bottom = sts(7).unwrap();
        let product = optimized_kronecker(&outer, &inner, &bottom).unwrap();
        assert!(product.d() == 2);
        assert!(product.t() == outer.t() * inner.t() + bottom.t());
        assert!(product.n() == 84);
        assert!(product.verify());
    }

    #[test]
    fn optimized_guards() {
        let two = sts(9).unwrap();
        assert!(optimized_kronecker(&two, &two, &two).is_none());
        let outer = sperner(6).unwrap();
        let bottom = sts(13).unwrap();
        // outer is too narrow for the bottom columns
        assert!(optimized_kronecker(&outer, &two, &bottom).is_none());
    }
}
