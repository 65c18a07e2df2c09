/// Compares two byte strings in a time that only depends on their length.
///
/// A length mismatch returns early: the length of the secret is not what is being protected.
pub fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (l, r) in left.iter().zip(right.iter()) {
        diff |= l ^ r;
    }
    std::hint::black_box(diff) == 0
}
