//! Minimal-length base-36 encoding of unsigned integers.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest possible encoding: `u64::MAX` is `3w5e11264sgsf`.
const MAX_LEN: usize = 13;

/// Encode `n` in base 36, most significant digit first, lowercase.
///
/// No leading zeros are emitted; `0` encodes as `"0"`.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".into();
    }

    let mut buf = [0u8; MAX_LEN];
    let mut pos = MAX_LEN;
    while n > 0 {
        pos -= 1;
        buf[pos] = DIGITS[(n % 36) as usize];
        n /= 36;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}
