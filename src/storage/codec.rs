//! Nucleotide codec.
//!
//! Maps bases to small integer codes and back. `A C G T` get codes `0..=3`
//! in that order so that complementing a code is `3 - code`; every other
//! input symbol collapses to the `N` sentinel, which is its own complement.
//! Lowercase input is accepted and decodes as uppercase.

/// Code of the sentinel base `N`.
pub const CODE_N: u64 = 4;

/// Bit width needed to store any code.
pub const CODE_WIDTH: u32 = 3;

const DECODE: [u8; 5] = *b"ACGTN";

const COMPLEMENT: [u64; 5] = [3, 2, 1, 0, CODE_N];

/// Encode a base. Symbols outside `ACGTacgt` encode as [`CODE_N`].
pub fn encode(base: u8) -> u64 {
    match base {
        b'A' | b'a' => 0,
        b'C' | b'c' => 1,
        b'G' | b'g' => 2,
        b'T' | b't' => 3,
        _ => CODE_N,
    }
}

/// Decode a code. Unknown codes decode as `N`.
pub fn decode(code: u64) -> u8 {
    DECODE.get(code as usize).copied().unwrap_or(b'N')
}

/// Complement an encoded base without decoding it.
pub fn complement(code: u64) -> u64 {
    COMPLEMENT.get(code as usize).copied().unwrap_or(CODE_N)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_inverse() {
        for &base in b"ACGTN" {
            assert_eq!(decode(encode(base)), base);
        }
        for code in 0..=CODE_N {
            assert_eq!(encode(decode(code)), code);
        }
    }

    #[test]
    fn test_lowercase_and_unknown() {
        assert_eq!(encode(b'g'), encode(b'G'));
        assert_eq!(encode(b'R'), CODE_N);
        assert_eq!(encode(b'-'), CODE_N);
        assert_eq!(decode(99), b'N');
    }

    #[test]
    fn test_complement() {
        assert_eq!(decode(complement(encode(b'A'))), b'T');
        assert_eq!(decode(complement(encode(b'C'))), b'G');
        assert_eq!(decode(complement(encode(b'G'))), b'C');
        assert_eq!(decode(complement(encode(b'T'))), b'A');
        assert_eq!(complement(CODE_N), CODE_N);
        for code in 0..=CODE_N {
            assert_eq!(complement(complement(code)), code);
        }
    }

    #[test]
    fn test_codes_fit_width() {
        for code in 0..=CODE_N {
            assert!(code < (1 << CODE_WIDTH));
        }
    }
}
