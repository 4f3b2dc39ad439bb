use std::io::{BufReader, Read, Write};

use crate::decimal;
use crate::error::Result;

pub trait Converter {
    /// Converts everything `reader` yields and returns the number of input bytes.
    fn convert(&self, reader: &mut dyn Read, writer: &mut dyn Write) -> Result<u64>;
    fn format_name(&self) -> &'static str;
}

/// Renders each input byte as a decimal token, in read order.
pub struct DecimalConverter;

impl Converter for DecimalConverter {
    fn format_name(&self) -> &'static str {
        "decimal"
    }

    fn convert(&self, reader: &mut dyn Read, writer: &mut dyn Write) -> Result<u64> {
        let mut count = 0;
        for byte in BufReader::new(reader).bytes() {
            decimal::write_token(writer, byte?)?;
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io;

    fn convert(input: &[u8]) -> (String, u64) {
        let converter = DecimalConverter;
        let mut output = Vec::new();
        let count = converter.convert(&mut &input[..], &mut output).unwrap();
        (String::from_utf8(output).unwrap(), count)
    }

    #[rstest]
    #[case::empty(&[], "")]
    #[case::zero(&[0], "0 ")]
    #[case::max(&[255], "255 ")]
    #[case::mixed(&[0x41, 0x00, 0xFF], "65 0 255 ")]
    #[case::newline_byte(b"\n", "10 ")]
    fn test_convert(#[case] input: &[u8], #[case] expected: &str) {
        let (output, count) = convert(input);
        assert_eq!(output, expected);
        assert_eq!(count, input.len() as u64);
    }

    #[rstest]
    fn test_matches_encode() {
        let bytes: Vec<u8> = (0..=255).cycle().take(10_000).collect();
        assert_eq!(convert(&bytes).0, decimal::encode(&bytes));
    }

    /// Yields `limit` bytes of `0x2A` and then fails.
    struct FailingReader {
        limit: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.limit == 0 {
                return Err(io::Error::other("disk gone"));
            }
            let n = buf.len().min(self.limit);
            buf[..n].fill(0x2A);
            self.limit -= n;
            Ok(n)
        }
    }

    #[rstest]
    fn test_read_error_keeps_partial_output() {
        let mut reader = FailingReader { limit: 2 };
        let mut output = Vec::new();
        let err = DecimalConverter
            .convert(&mut reader, &mut output)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(String::from_utf8(output).unwrap(), "42 42 ");
    }

    #[rstest]
    fn test_write_error() {
        let mut output = [0u8; 3];
        let err = DecimalConverter
            .convert(&mut &b"AB"[..], &mut &mut output[..])
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
