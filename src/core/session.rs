//! Role session names.

use rand::Rng;
use std::fmt;

/// nanoid's URL-safe alphabet. 64 symbols, so a random byte masked to six
/// bits picks one uniformly.
const ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

const MASK: u8 = 63;

/// Length of a generated session name.
pub const LENGTH: usize = 21;

/// Random tag attached to an `AssumeRole` request for auditing.
///
/// Uniqueness is probabilistic: 126 bits of randomness per id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let mut bytes = [0u8; LENGTH];
        rand::thread_rng().fill(&mut bytes[..]);
        let id = bytes
            .iter()
            .map(|b| ALPHABET[usize::from(b & MASK)] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
