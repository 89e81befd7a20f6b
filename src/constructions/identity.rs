use crate::cff::matrix::Cff;

/// the diagonal d-CFF(n,n); requires d < n
pub fn identity(d: usize, n: u64) -> Option<Cff> {
    if (d as u64) >= n {
        return None;
    }
    let mut cff = Cff::alloc(d, n as usize, n)?;
    for i in 0..n as usize {
        cff.set(i, i as u64, true);
    }
    Some(cff)
}
