use crate::cff::matrix::Cff;
use itertools::iproduct;

/// 2-CFF(v, v(v-1)/6) whose columns are the blocks of a Steiner triple
/// system of order v; every pair of points lies in exactly one block,
/// so two blocks share at most one point and each block keeps a private
/// point against any two others. exists iff v = 1, 3 (mod 6).
pub fn sts(v: usize) -> Option<Cff> {
    let blocks = match v % 6 {
        3 => bose(v),
        1 if v > 1 => skolem(v),
        _ => return None,
    };
    let mut cff = Cff::alloc(2, v, blocks.len() as u64)?;
    for (col, block) in blocks.iter().enumerate() {
        for &point in block.iter() {
            cff.set(point, col as u64, true);
        }
    }
    Some(cff)
}

/// symmetric idempotent quasigroup on an odd order
fn symmetric_ball(q: usize, x: usize, y: usize) -> usize {
    (((q + 1) / 2) * (x + y)) % q
}

/// half-idempotent quasigroup on an even order
fn half_ball(q: usize, x: usize, y: usize) -> usize {
    let t = (x + y) % q;
    if t % 2 == 0 { t / 2 } else { (t + q - 1) / 2 }
}

/// Bose construction for v = 3 (mod 6): points are pairs over a
/// quasigroup of order Q = v/3, in three layers
fn bose(v: usize) -> Vec<[usize; 3]> {
    let n = (v - 3) / 6;
    let q = 2 * n + 1;
    let mut blocks = Vec::with_capacity(v * (v - 1) / 6);
    for (x, y) in iproduct!(0..=2 * n, 0..=2 * n) {
        if x == y {
            blocks.push([x, x + q, x + 2 * q]);
        } else if x < y {
            let ball = symmetric_ball(q, x, y);
            for i in 0..3 {
                blocks.push([x + q * i, y + q * i, ball + q * ((i + 1) % 3)]);
            }
        }
    }
    blocks
}

/// Skolem construction for v = 1 (mod 6): three layers over an even
/// quasigroup plus a point at infinity
fn skolem(v: usize) -> Vec<[usize; 3]> {
    let n = (v - 1) / 6;
    let q = 2 * n;
    let inf = v - 1;
    let mut blocks = Vec::with_capacity(v * (v - 1) / 6);
    for x in 0..n {
        blocks.push([x, x + q, x + 2 * q]);
        for i in 0..3 {
            blocks.push([inf, n + x + q * i, x + q * ((i + 1) % 3)]);
        }
    }
    for (x, y) in iproduct!(0..2 * n, 0..2 * n) {
        if x < y {
            let ball = half_ball(q, x, y);
            for i in 0..3 {
                blocks.push([x + q * i, y + q * i, ball + q * ((i + 1) % 3)]);
            }
        }
    }
    blocks
}
