//! Fee schedule records

use std::fmt;

use hashdex_primitives::U256;

/// One decoded fee entry.
///
/// `key` identifies the fee type, `value` its configured amount. Both
/// keep the full word width; the wire encoding makes no narrower promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fee {
    /// Fee type identifier
    pub key: U256,
    /// Configured fee amount
    pub value: U256,
}

impl Fee {
    /// Create a fee record
    pub fn new(key: U256, value: U256) -> Self {
        Self { key, value }
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key={} value={}", self.key, self.value)
    }
}
