//! JSON codec for domain records.
//!
//! Decoding never validates; callers run validation separately.

use std::io::{Read, Write};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Malformed input (bad JSON, wrong field types).
#[derive(Debug, Error)]
#[error("unable to decode json: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Serialization failure (includes a broken writer).
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unable to encode json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to write json: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode a single JSON value from `reader`.
pub fn from_json<T, R>(reader: R) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Encode `value` as JSON to `writer`, followed by a newline.
pub fn to_json<T, W>(value: &T, mut writer: W) -> Result<(), EncodeError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        n: i32,
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn to_json_appends_newline() {
        let mut buf = Vec::new();
        to_json(&Sample { n: 3 }, &mut buf).unwrap();
        assert_eq!(buf, b"{\"n\":3}\n");
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let res: Result<Sample, _> = from_json(&b"{\"n\": "[..]);
        assert!(res.is_err());
    }

    #[test]
    fn from_json_rejects_type_mismatch() {
        let res: Result<Sample, _> = from_json(&b"{\"n\": \"three\"}"[..]);
        assert!(res.is_err());
    }

    #[test]
    fn broken_writer_surfaces_encode_error() {
        let err = to_json(&Sample { n: 1 }, BrokenWriter).unwrap_err();
        assert!(matches!(err, EncodeError::Json(_) | EncodeError::Io(_)));
    }
}
