//! Lexer for hex dumps such as `"00 FF FF FF FF FF FF 00 10 AC ..."`.

use crate::errors::HexError;

/// What to do at the first token that is not a two-digit hex pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexPolicy {
    /// Fail with [HexError::InvalidPair].
    #[default]
    Strict,
    /// Stop and return the bytes read so far.
    Truncate,
}

/// Parses whitespace-separated hex pairs. Any run of ASCII whitespace
/// separates tokens; digits may be upper or lower case.
pub fn parse_hex(text: &str, policy: HexPolicy) -> Result<Vec<u8>, HexError> {
    let mut bytes = Vec::with_capacity(text.len() / 3 + 1);

    for (position, token) in text.split_ascii_whitespace().enumerate() {
        match parse_pair(token) {
            Some(byte) => bytes.push(byte),
            None => match policy {
                HexPolicy::Strict => {
                    return Err(HexError::InvalidPair {
                        position,
                        token: token.to_string(),
                    });
                }
                HexPolicy::Truncate => break,
            },
        }
    }

    Ok(bytes)
}

fn parse_pair(token: &str) -> Option<u8> {
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}
