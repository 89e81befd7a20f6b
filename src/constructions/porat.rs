use crate::cff::matrix::Cff;
use crate::combin::binomial::choose;
use crate::field::field::Field;

/// the exponent H_q(delta) from the Porat-Rothschild bound, with
/// delta = (r-1)/r
pub fn entropy(q: f64, r: f64) -> f64 {
    (r - 1.0) / r * (((q - 1.0) * r / (r - 1.0)).ln() / q.ln()) + r.ln() / q.ln() / r
}

/// (r-1)-CFF(m*q, q^k) from the greedy derandomised linear code of
/// Porat and Rothschild (arXiv:0712.3876). the k x m generator matrix
/// is chosen cell by cell: for each cell the field element minimising
/// the expected distance deficit over all partially-extended codewords
/// wins. m = 0 asks for the theorem minimum ceil(k / (1 - H_q)). an m
/// below that minimum sometimes still yields a valid CFF; callers
/// taking that route should check the result with verify.
pub fn porat_rothschild(p: usize, a: usize, k: usize, r: usize, m: usize) -> Option<Cff> {
    let field = Field::new(p, a)?;
    let q = field.q();
    if k < 1 || r < 2 {
        return None;
    }
    if q < 2 * r || q >= 4 * r {
        log::warn!("{:<32}q={} outside [{}, {})", "porat code off-theorem", q, 2 * r, 4 * r);
    }
    let delta = (r as f64 - 1.0) / r as f64;
    let hq = entropy(q as f64, r as f64);
    let m = if m == 0 { (k as f64 / (1.0 - hq)).ceil() as usize } else { m };
    if m <= k {
        return None;
    }
    let dist = (delta * m as f64).floor() as usize;
    let n = (q as u64).checked_pow(k as u32)?;
    let words = usize::try_from(n).ok()?;
    log::debug!(
        "{:<32}q={} k={} r={} m={} distance={}",
        "building porat code",
        q,
        k,
        r,
        m,
        dist
    );

    // code[position][word]; word 0 is the zero codeword and starts with
    // every letter credited to its zero count
    let mut generator = vec![0usize; m * k];
    let mut code = vec![0usize; m * words];
    let mut zeros = vec![0usize; words];
    zeros[0] = m;
    let mut potential = vec![0f64; q];
    for i in 1..=m {
        let mut stride = 1; // q^(j-1)
        for j in 1..=k {
            for weight in potential.iter_mut() {
                *weight = 0.0;
            }
            for word in stride..stride * q {
                // the digit at position j-1 of the reverse-lex tuple
                // for this word is never zero on this stride range
                let digit = word / stride % q;
                let fixed = i as i64 - zeros[word] as i64;
                let v = field.mul(code[(i - 1) * words + word % stride], field.neg(field.inv(digit)));
                let need = dist as i64 - fixed;
                if need >= 0 {
                    let need = need as usize;
                    let ways = choose(m - i, need) as f64;
                    let hit = (1.0 - 1.0 / q as f64).powi(need as i32);
                    let miss = (1.0 / q as f64).powi((m - i) as i32 - need as i32);
                    potential[v] -= ways * hit * miss;
                }
            }
            let mut best = 0;
            for v in 1..q {
                if potential[v] > potential[best] {
                    best = v;
                }
            }
            generator[(i - 1) * k + (j - 1)] = best;
            for word in stride..stride * q {
                let digit = word / stride % q;
                let chosen = generator[(i - 1) * k + (j - 1)];
                let letter = field.add(field.mul(chosen, digit), code[(i - 1) * words + word % stride]);
                if letter == 0 {
                    zeros[word] += 1;
                }
                code[(i - 1) * words + word] = letter;
            }
            stride *= q;
        }
        log::trace!("{:<32}row {} of {}", "extended porat code", i, m);
    }

    let d = (m - 1) / (m - dist);
    let mut cff = Cff::alloc(d, m * q, n)?;
    for word in 0..words {
        for position in 0..m {
            let letter = code[position * words + word];
            cff.set(position * q + letter, word as u64, true);
        }
    }
    Some(cff)
}
