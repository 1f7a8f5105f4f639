use memchr::memchr2;

use crate::arena::Stack;
use crate::decode::scan::Cursor;
use crate::{ErrorKind, Result};

/// Decodes the quoted string at the cursor into owned bytes.
///
/// Bytes are staged on `scratch` and compacted on success; on failure the
/// stack is restored to where it was on entry.
pub fn decode_string(cursor: &mut Cursor<'_>, scratch: &mut Stack<u8>) -> Result<Box<[u8]>> {
    let mark = scratch.mark();
    match decode_string_body(cursor, scratch) {
        Ok(()) => Ok(scratch.take_from(mark)),
        Err(err) => {
            scratch.rollback(mark);
            Err(err)
        }
    }
}

fn decode_string_body(cursor: &mut Cursor<'_>, scratch: &mut Stack<u8>) -> Result<()> {
    debug_assert_eq!(cursor.peek(), Some(b'"'));
    cursor.bump();
    loop {
        let rest = cursor.rest();
        let Some(stop) = memchr2(b'"', b'\\', rest) else {
            if let Some(bad) = find_control(rest) {
                cursor.advance(bad);
                return Err(cursor.error(ErrorKind::InvalidStringChar));
            }
            cursor.advance(rest.len());
            return Err(cursor.error(ErrorKind::MissQuotationMark));
        };
        let run = &rest[..stop];
        if let Some(bad) = find_control(run) {
            cursor.advance(bad);
            return Err(cursor.error(ErrorKind::InvalidStringChar));
        }
        scratch.extend_from_slice(run);
        cursor.advance(stop);
        if cursor.bump() == Some(b'"') {
            return Ok(());
        }
        decode_escape(cursor, scratch)?;
    }
}

fn decode_escape(cursor: &mut Cursor<'_>, scratch: &mut Stack<u8>) -> Result<()> {
    let backslash = cursor.position() - 1;
    let byte = match cursor.bump() {
        Some(b'"') => b'"',
        Some(b'\\') => b'\\',
        Some(b'/') => b'/',
        Some(b'b') => 0x08,
        Some(b'f') => 0x0c,
        Some(b'n') => b'\n',
        Some(b'r') => b'\r',
        Some(b't') => b'\t',
        Some(b'u') => return decode_unicode_escape(cursor, scratch, backslash),
        _ => return Err(cursor.error_at(ErrorKind::InvalidStringEscape, backslash)),
    };
    scratch.push(byte);
    Ok(())
}

fn decode_unicode_escape(
    cursor: &mut Cursor<'_>,
    scratch: &mut Stack<u8>,
    backslash: usize,
) -> Result<()> {
    let high = read_hex4(cursor)
        .ok_or_else(|| cursor.error_at(ErrorKind::InvalidUnicodeHex, backslash))?;
    let scalar = match high {
        0xd800..=0xdbff => {
            let low = if cursor.eat_slice(b"\\u") {
                read_hex4(cursor)
            } else {
                None
            };
            match low {
                Some(low @ 0xdc00..=0xdfff) => combine_surrogates(high, low),
                _ => return Err(cursor.error_at(ErrorKind::InvalidUnicodeSurrogate, backslash)),
            }
        }
        0xdc00..=0xdfff => {
            return Err(cursor.error_at(ErrorKind::InvalidUnicodeSurrogate, backslash));
        }
        unit => unit,
    };
    let ch = char::from_u32(scalar)
        .ok_or_else(|| cursor.error_at(ErrorKind::InvalidUnicodeSurrogate, backslash))?;
    ch.encode_utf8(scratch.push_slot(ch.len_utf8()));
    Ok(())
}

/// Reads exactly four hex digits as one UTF-16 code unit.
fn read_hex4(cursor: &mut Cursor<'_>) -> Option<u32> {
    let digits = cursor.rest().get(..4)?;
    let mut unit = 0;
    for &digit in digits {
        unit = (unit << 4) | char::from(digit).to_digit(16)?;
    }
    cursor.advance(4);
    Some(unit)
}

fn combine_surrogates(high: u32, low: u32) -> u32 {
    0x10000 + ((high - 0xd800) << 10) + (low - 0xdc00)
}

fn find_control(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&byte| byte < 0x20)
}
