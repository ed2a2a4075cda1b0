/*!
    String scalars in PHP's native `serialize()` layout.

    The envelope payload must be byte-identical to what the decrypting
    framework produces for a string value:

      s:<byte-length>:"<raw bytes>";

    The length counts bytes, not characters, and the body is not escaped.
    Only string scalars are supported. Other scalar tags are recognized so the
    caller can tell "wrong type" apart from "garbage".
*/

use crate::error::{CryptoError, CryptoResult};

const STRING_PREFIX: &[u8] = b"s:";
const STRING_SUFFIX: &[u8] = b"\";";

/**
    Serialize a string as `s:<len>:"<value>";`.
*/
pub fn serialize_str(value: &str) -> Vec<u8> {
    let header = format!("s:{}:\"", value.len());
    let mut out = Vec::with_capacity(header.len() + value.len() + STRING_SUFFIX.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(value.as_bytes());
    out.extend_from_slice(STRING_SUFFIX);
    out
}

/**
    Parse a serialized string scalar.

    Fails with `UnexpectedType` when `data` is a well-known non-string scalar
    (integer, boolean, array, ...), and with `Deserialization` when the layout
    is not recognized, the declared length does not match, trailing bytes
    follow the terminator, or the body is not valid UTF-8.
*/
pub fn unserialize_str(data: &[u8]) -> CryptoResult<String> {
    let Some(rest) = data.strip_prefix(STRING_PREFIX) else {
        return Err(match scalar_kind(data) {
            Some(kind) => CryptoError::UnexpectedType(kind),
            None => CryptoError::Deserialization("unrecognized serialized layout".into()),
        });
    };

    let colon = rest
        .iter()
        .position(|&b| b == b':')
        .ok_or_else(|| CryptoError::Deserialization("missing length terminator".into()))?;
    let len = parse_length(&rest[..colon])?;

    let body = rest[colon + 1..]
        .strip_prefix(b"\"")
        .ok_or_else(|| CryptoError::Deserialization("missing opening quote".into()))?;
    let needed = len
        .checked_add(STRING_SUFFIX.len())
        .ok_or_else(|| CryptoError::Deserialization("string length out of range".into()))?;
    if body.len() < needed {
        return Err(CryptoError::Deserialization(format!(
            "declared length {len} exceeds payload"
        )));
    }

    let (bytes, tail) = body.split_at(len);
    if tail != STRING_SUFFIX {
        return Err(CryptoError::Deserialization(
            "string body does not end at declared length".into(),
        ));
    }

    String::from_utf8(bytes.to_vec())
        .map_err(|e| CryptoError::Deserialization(format!("string is not UTF-8: {e}")))
}

fn parse_length(digits: &[u8]) -> CryptoResult<usize> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(CryptoError::Deserialization("invalid string length".into()));
    }
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| CryptoError::Deserialization("string length out of range".into()))
}

/**
    Name of the scalar type a serialized value starts with, for anything but
    strings.
*/
fn scalar_kind(data: &[u8]) -> Option<&'static str> {
    match data {
        [b'N', b';', ..] => Some("null"),
        [b'b', b':', ..] => Some("boolean"),
        [b'i', b':', ..] => Some("integer"),
        [b'd', b':', ..] => Some("double"),
        [b'a', b':', ..] => Some("array"),
        [b'O' | b'C', b':', ..] => Some("object"),
        [b'E', b':', ..] => Some("enum"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_ascii() {
        assert_eq!(serialize_str("hello"), b"s:5:\"hello\";");
    }

    #[test]
    fn serializes_empty() {
        assert_eq!(serialize_str(""), b"s:0:\"\";");
    }

    #[test]
    fn length_counts_bytes() {
        // "héllo" is 6 bytes in UTF-8
        assert_eq!(serialize_str("héllo"), "s:6:\"héllo\";".as_bytes());
        assert_eq!(unserialize_str("s:6:\"héllo\";".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn body_is_not_escaped() {
        let value = "quote \" and ; and : inside";
        let encoded = serialize_str(value);
        assert_eq!(unserialize_str(&encoded).unwrap(), value);
    }

    #[test]
    fn parses_empty_string() {
        assert_eq!(unserialize_str(b"s:0:\"\";").unwrap(), "");
    }

    #[test]
    fn rejects_non_string_scalars() {
        let cases: [(&[u8], &str); 7] = [
            (b"i:42;", "integer"),
            (b"b:1;", "boolean"),
            (b"d:0.5;", "double"),
            (b"N;", "null"),
            (b"a:0:{}", "array"),
            (b"O:8:\"stdClass\":0:{}", "object"),
            (b"E:7:\"Foo:Bar\";", "enum"),
        ];
        for (data, kind) in cases {
            let err = unserialize_str(data).unwrap_err();
            assert_eq!(err, CryptoError::UnexpectedType(kind));
        }
    }

    #[test]
    fn rejects_garbage() {
        for data in [&b""[..], b"hello", b"{\"json\":true}", b"x:1;"] {
            let err = unserialize_str(data).unwrap_err();
            assert!(matches!(err, CryptoError::Deserialization(_)), "{data:?}");
        }
    }

    #[test]
    fn rejects_length_mismatch() {
        let too_long = unserialize_str(b"s:9:\"hello\";").unwrap_err();
        assert!(matches!(too_long, CryptoError::Deserialization(_)));
        let too_short = unserialize_str(b"s:3:\"hello\";").unwrap_err();
        assert!(matches!(too_short, CryptoError::Deserialization(_)));
    }

    #[test]
    fn rejects_bad_length_digits() {
        for data in [&b"s::\"\";"[..], b"s:-1:\"\";", b"s:1a:\"x\";", b"s:5"] {
            let err = unserialize_str(data).unwrap_err();
            assert!(matches!(err, CryptoError::Deserialization(_)), "{data:?}");
        }
    }

    #[test]
    fn rejects_huge_declared_length() {
        for len in [usize::MAX, usize::MAX - 1, usize::MAX - 2] {
            let data = format!("s:{len}:\"ab\";");
            let err = unserialize_str(data.as_bytes()).unwrap_err();
            assert!(matches!(err, CryptoError::Deserialization(_)), "{data}");
        }
        let overflowing = format!("s:{}0:\"ab\";", usize::MAX);
        let err = unserialize_str(overflowing.as_bytes()).unwrap_err();
        assert!(matches!(err, CryptoError::Deserialization(_)));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let err = unserialize_str(b"s:5:\"hello\";extra").unwrap_err();
        assert!(matches!(err, CryptoError::Deserialization(_)));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = unserialize_str(b"s:2:\"\xff\xfe\";").unwrap_err();
        assert!(matches!(err, CryptoError::Deserialization(_)));
    }
}
