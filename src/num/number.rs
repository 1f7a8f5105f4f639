use crate::decode::scan::Cursor;
use crate::{ErrorKind, NumberOverflow, Result};

/// Decodes the number at the cursor and leaves the cursor just past it.
///
/// Only the grammatical prefix is consumed, so `0123` yields `0` and leaves
/// `123` for the caller to reject.
pub fn decode_number(cursor: &mut Cursor<'_>, overflow: NumberOverflow) -> Result<f64> {
    let start = cursor.position();
    let bytes = cursor.rest();
    let len = match scan_number(bytes) {
        Ok(len) => len,
        Err(offset) => return Err(cursor.error_at(ErrorKind::InvalidValue, start + offset)),
    };
    let value = std::str::from_utf8(&bytes[..len])
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or_else(|| cursor.error_at(ErrorKind::InvalidValue, start))?;
    if value.is_infinite() && overflow == NumberOverflow::Reject {
        return Err(cursor.error_at(ErrorKind::NumberTooBig, start));
    }
    cursor.advance(len);
    Ok(value)
}

/// Length of the longest number at the front of `bytes`, or the offset of the
/// first byte that breaks the grammar.
pub fn scan_number(bytes: &[u8]) -> std::result::Result<usize, usize> {
    let mut idx = 0;
    if bytes.first() == Some(&b'-') {
        idx += 1;
    }
    match bytes.get(idx) {
        Some(b'0') => idx += 1,
        Some(b'1'..=b'9') => idx = skip_digits(bytes, idx + 1),
        _ => return Err(idx),
    }
    if bytes.get(idx) == Some(&b'.') {
        idx += 1;
        if !bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            return Err(idx);
        }
        idx = skip_digits(bytes, idx);
    }
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        if !bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            return Err(idx);
        }
        idx = skip_digits(bytes, idx);
    }
    Ok(idx)
}

fn skip_digits(bytes: &[u8], mut idx: usize) -> usize {
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Result<(f64, usize)> {
        let mut cursor = Cursor::new(input.as_bytes());
        let value = decode_number(&mut cursor, NumberOverflow::Accept)?;
        Ok((value, cursor.position()))
    }

    #[rstest::rstest]
    #[case("0", 0.0, 1)]
    #[case("-0", -0.0, 2)]
    #[case("-0.0", -0.0, 4)]
    #[case("1", 1.0, 1)]
    #[case("-1", -1.0, 2)]
    #[case("1.5", 1.5, 3)]
    #[case("-1.5", -1.5, 4)]
    #[case("3.1416", 3.1416, 6)]
    #[case("1E10", 1E10, 4)]
    #[case("1e10", 1e10, 4)]
    #[case("1E+10", 1E+10, 5)]
    #[case("1E-10", 1E-10, 5)]
    #[case("-1E10", -1E10, 5)]
    #[case("1.234E+10", 1.234E+10, 9)]
    #[case("1e-10000", 0.0, 8)]
    #[case("0123", 0.0, 1)]
    #[case("12,", 12.0, 2)]
    fn test_decode_valid(#[case] input: &str, #[case] expected: f64, #[case] consumed: usize) {
        let (value, position) = decode(input).unwrap();
        assert_eq!(value.to_bits(), expected.to_bits());
        assert_eq!(position, consumed);
    }

    #[rstest::rstest]
    #[case("1.0000000000000002", 1.0000000000000002)]
    #[case("4.9406564584124654e-324", 4.9406564584124654e-324)]
    #[case("2.2250738585072009e-308", 2.2250738585072009e-308)]
    #[case("2.2250738585072014e-308", 2.2250738585072014e-308)]
    #[case("1.7976931348623157e308", 1.7976931348623157e308)]
    #[case("-1.7976931348623157e+308", -1.7976931348623157e+308)]
    fn test_decode_boundaries(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(decode(input).unwrap().0, expected);
    }

    #[rstest::rstest]
    #[case("+0", 0)]
    #[case("+1", 0)]
    #[case(".123", 0)]
    #[case("1.", 2)]
    #[case("-", 1)]
    #[case("-a", 1)]
    #[case("1e", 2)]
    #[case("1e+", 3)]
    #[case("1.e5", 2)]
    #[case("INF", 0)]
    #[case("inf", 0)]
    #[case("NAN", 0)]
    #[case("nan", 0)]
    fn test_scan_rejects(#[case] input: &str, #[case] offset: usize) {
        assert_eq!(scan_number(input.as_bytes()), Err(offset));
        let err = decode(input).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidValue);
        assert_eq!(err.offset(), offset);
    }

    #[rstest::rstest]
    fn test_overflow_policy() {
        let (value, _) = decode("1e309").unwrap();
        assert!(value.is_infinite() && value.is_sign_positive());
        let (value, _) = decode("-1e309").unwrap();
        assert!(value.is_infinite() && value.is_sign_negative());

        let mut cursor = Cursor::new(b"1e309");
        let err = decode_number(&mut cursor, NumberOverflow::Reject).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NumberTooBig);
        assert_eq!(cursor.position(), 0);
    }
}
