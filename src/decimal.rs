use std::io::Write;

use crate::error::{Error, Result};

pub const SEPARATOR: u8 = b' ';

/// Writes the decimal digits of `byte` followed by the separator.
pub fn write_token(writer: &mut dyn Write, byte: u8) -> std::io::Result<()> {
    write!(writer, "{byte}")?;
    writer.write_all(&[SEPARATOR])
}

pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for byte in bytes {
        out.push_str(&byte.to_string());
        out.push(SEPARATOR as char);
    }
    out
}

/// Parses whitespace-separated decimal tokens back into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    text.split_ascii_whitespace()
        .enumerate()
        .map(|(position, token)| {
            parse_token(token).ok_or_else(|| Error::InvalidToken {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

// `u8::from_str` accepts a leading `+`, which never appears in encoded output.
fn parse_token(token: &str) -> Option<u8> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
