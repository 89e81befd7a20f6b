use crate::cff::matrix::Cff;

/// ground set size and block weight of the Witt design S(4,7,23)
const POINTS: usize = 23;
const WEIGHT: u32 = 7;

/// catalogued small 2-CFFs: (t, n) realised by shortening the Witt
/// design 23 - t times. the counts follow from the design's
/// intersection numbers (253, 77, 21, 5) by inclusion-exclusion.
pub const SURVEY: [(usize, u64); 4] = [(20, 80), (21, 120), (22, 176), (23, 253)];

/// one of the catalogued 2-CFFs: the blocks of S(4,7,23) restricted to
/// the first t points, for t in 20..=23. any four points lie in exactly
/// one block, so two blocks meet in at most 3 of their 7 points and no
/// block is covered by two others. None outside the catalogue.
pub fn fixed(d: usize, t: usize) -> Option<Cff> {
    let (_, n) = SURVEY.iter().copied().find(|&(rows, _)| rows == t)?;
    if d != 2 {
        return None;
    }
    let dropped = (((1u32 << POINTS) - 1) >> t) << t;
    let blocks: Vec<u32> = witt_blocks()
        .into_iter()
        .filter(|block| block & dropped == 0)
        .collect();
    assert!(blocks.len() as u64 == n, "witt block count for {} points", t);
    let mut cff = Cff::alloc(2, t, n)?;
    for (col, block) in blocks.iter().enumerate() {
        for row in 0..t {
            if block >> row & 1 == 1 {
                cff.set(row, col as u64, true);
            }
        }
    }
    Some(cff)
}

/// blocks of S(4,7,23), as bitmasks over the 23 points: exactly the
/// weight-7 codewords of the binary [23,12,7] Golay code
fn witt_blocks() -> Vec<u32> {
    let generator = golay_generator();
    (0u32..1 << 12)
        .map(|message| multiply(message, generator))
        .filter(|word| word.count_ones() == WEIGHT)
        .collect()
}

/// degree-11 generator polynomial of the Golay code, recovered by trial
/// division: x^23 + 1 factors over F_2 into (x + 1) and two reciprocal
/// irreducible factors of degree 11, of which the smaller is taken
fn golay_generator() -> u32 {
    let target = (1u32 << POINTS) | 1;
    ((1u32 << 11)..(1 << 12))
        .find(|&candidate| remainder(target, candidate) == 0)
        .expect("x^23 + 1 has a degree-11 factor")
}

/// polynomial product over F_2, bit i holding the coefficient of x^i
fn multiply(a: u32, b: u32) -> u32 {
    (0..12).filter(|&i| a >> i & 1 == 1).fold(0, |acc, i| acc ^ (b << i))
}

/// polynomial remainder over F_2
fn remainder(mut a: u32, b: u32) -> u32 {
    let degree = |x: u32| 31 - x.leading_zeros();
    while a != 0 && degree(a) >= degree(b) {
        a ^= b << (degree(a) - degree(b));
    }
    a
}
