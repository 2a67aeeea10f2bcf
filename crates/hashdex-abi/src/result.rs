//! Read-only view over a contract call's return buffer

use bytes::Bytes;
use hashdex_primitives::{Address, I256, U256};

use crate::DecodeError;

/// Size of an ABI word in bytes.
pub const WORD: usize = 32;

/// A contract call's return buffer, viewed as consecutive 32-byte words.
///
/// The buffer is immutable once constructed and shared cheaply via
/// [`Bytes`]; every accessor borrows and bounds-checks, so a malformed or
/// truncated result surfaces as a [`DecodeError`] rather than a panic.
/// A trailing partial word (a buffer whose length is not a multiple of
/// 32) is never addressable through the word accessors.
#[derive(Debug, Clone)]
pub struct FunctionResult {
    bytes: Bytes,
}

impl FunctionResult {
    /// Wrap a call's raw return bytes.
    pub fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    /// The whole underlying buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of complete 32-byte words in the buffer.
    pub fn word_count(&self) -> usize {
        self.bytes.len() / WORD
    }

    /// Unsigned 256-bit integer stored at word `slot`.
    pub fn uint256(&self, slot: usize) -> Result<U256, DecodeError> {
        Ok(U256::from_big_endian(self.word(slot)?))
    }

    /// Address stored in the low 20 bytes of the word at `slot`.
    pub fn address(&self, slot: usize) -> Result<Address, DecodeError> {
        let word = self.word(slot)?;
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..32]);
        Ok(Address::from_bytes(bytes))
    }

    /// Signed 64-bit integer stored in the low 8 bytes of the word at `slot`.
    ///
    /// Well-formed encodings sign-extend across the whole word; only the
    /// low quadword carries the value.
    pub fn int64(&self, slot: usize) -> Result<i64, DecodeError> {
        let word = self.word(slot)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&word[24..32]);
        Ok(i64::from_be_bytes(bytes))
    }

    /// Signed 256-bit integer stored at word `slot`.
    pub fn int256(&self, slot: usize) -> Result<I256, DecodeError> {
        let word = self.word(slot)?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(word);
        Ok(I256::from_be_word(&bytes))
    }

    /// The 32-byte word at `slot`.
    fn word(&self, slot: usize) -> Result<&[u8], DecodeError> {
        if slot >= self.word_count() {
            return Err(DecodeError::OutOfBounds {
                needed: slot.saturating_mul(WORD).saturating_add(WORD),
                available: self.bytes.len(),
            });
        }
        let begin = slot * WORD;
        Ok(&self.bytes[begin..begin + WORD])
    }

    /// A byte range of the buffer as a zero-copy slice.
    ///
    /// Callers guarantee `begin <= end`; the end is checked here.
    pub(crate) fn slice(&self, begin: usize, end: usize) -> Result<Bytes, DecodeError> {
        if end > self.bytes.len() {
            return Err(DecodeError::OutOfBounds {
                needed: end,
                available: self.bytes.len(),
            });
        }
        Ok(self.bytes.slice(begin..end))
    }
}

impl From<Bytes> for FunctionResult {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for FunctionResult {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(Bytes::from(bytes))
    }
}
