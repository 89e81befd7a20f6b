/// replaces buf with the next k-subset of {0..n} in lexicographic order,
/// in place. scans from the tail for the first position that can still
/// move, then resets the suffix to the run just above it. returns false
/// when buf already held the final subset {n-k..n}.
pub fn k_subset_lex_successor(n: usize, k: usize, buf: &mut [usize]) -> bool {
    for i in (0..k).rev() {
        if buf[i] != n - k + i {
            buf[i] += 1;
            for x in i + 1..k {
                buf[x] = buf[i] + (x - i);
            }
            return true;
        }
    }
    false
}
