pub const LITERAL_NULL: &[u8] = b"null";
pub const LITERAL_TRUE: &[u8] = b"true";
pub const LITERAL_FALSE: &[u8] = b"false";

pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Size in bytes of the first allocation made by each scratch stack.
pub const SCRATCH_INITIAL_BYTES: usize = 256;

#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{from_slice, from_slice_with_options, ErrorKind, ParseOptions};

    #[rstest::rstest]
    fn test_is_whitespace() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(b'\t'));
        assert!(is_whitespace(b'\n'));
        assert!(is_whitespace(b'\r'));
        assert!(!is_whitespace(0x0b));
        assert!(!is_whitespace(0x0c));
        assert!(!is_whitespace(b'a'));
    }

    #[rstest::rstest]
    fn test_max_depth_boundary() {
        let nested = format!(
            "{}{}",
            "[".repeat(DEFAULT_MAX_DEPTH),
            "]".repeat(DEFAULT_MAX_DEPTH)
        );
        assert!(from_slice(nested.as_bytes()).is_ok());

        let too_deep = format!("[{nested}]");
        let err = from_slice(too_deep.as_bytes()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DepthLimitExceeded);
    }

    #[rstest::rstest]
    fn test_depth_limit_counts_objects_and_arrays() {
        let options = ParseOptions::new().with_max_depth(Some(2));
        assert!(from_slice_with_options(br#"{"a":[1]}"#, &options).is_ok());
        let err = from_slice_with_options(br#"{"a":[{}]}"#, &options).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DepthLimitExceeded);
        assert_eq!(err.offset(), 6);
    }

    #[rstest::rstest]
    fn test_large_array() {
        let body = (0..10_000).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        let input = format!("[{body}]");
        let value = from_slice(input.as_bytes()).unwrap();
        assert_eq!(value.array_len(), Some(10_000));
        assert_eq!(value[9_999].as_f64(), Some(9_999.0));
    }

    #[rstest::rstest]
    fn test_very_long_string() {
        let long_string = "x".repeat(100_000);
        let input = format!("{{\"data\":\"{long_string}\"}}");
        let value = from_slice(input.as_bytes()).unwrap();
        assert_eq!(value["data"].string_len(), Some(100_000));
    }
}
