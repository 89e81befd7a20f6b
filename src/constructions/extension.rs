use super::additive::additive;
use crate::cff::matrix::Cff;

/// d-CFF(t+1, n+1): the additive sum with a single-cell block. built
/// inline because a 1 x 1 matrix sits outside identity's d < n domain.
pub fn extend_by_one(cff: &Cff) -> Option<Cff> {
    let mut one = Cff::alloc(cff.d(), 1, 1)?;
    one.set(0, 0, true);
    additive(cff, &one)
}
