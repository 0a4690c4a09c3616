//! Byte packing for validated bit-string and hex-string digits.

use bytes::{BufMut, Bytes, BytesMut};

/// Pack a validated bit string into bytes.
///
/// The digits are read as a big-endian unsigned integer. The most
/// significant end is zero-padded to a whole number of bytes, so `"1001"`
/// becomes `0x09` and 16 digits become exactly two bytes.
pub fn pack_bits(digits: &str) -> Bytes {
    let n_bits = digits.len();
    let n_bytes = n_bits.div_ceil(8);
    let pad = n_bytes * 8 - n_bits;

    let mut buf = BytesMut::zeroed(n_bytes);
    for (i, digit) in digits.bytes().enumerate() {
        if digit == b'1' {
            let pos = pad + i;
            buf[pos / 8] |= 0x80 >> (pos % 8);
        }
    }
    buf.freeze()
}

/// Pack a validated, even-length hex string into bytes, two digits per byte.
pub fn pack_hex(digits: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(digits.len() / 2);
    for pair in digits.as_bytes().chunks_exact(2) {
        buf.put_u8((nibble(pair[0]) << 4) | nibble(pair[1]));
    }
    buf.freeze()
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        // unreachable for validated input
        _ => 0,
    }
}
