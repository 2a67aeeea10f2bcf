//! Decode error types

use hashdex_primitives::U256;
use thiserror::Error;

/// A failure while decoding a contract call result.
///
/// Decoding is all-or-nothing: no routine returns a partial sequence,
/// since a truncated array or blob would silently corrupt the quantities
/// computed from it downstream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A word slot or byte range lies outside the result buffer
    #[error("out of bounds: need {needed} bytes, buffer holds {available}")]
    OutOfBounds {
        /// Bytes the read would require (saturated if unrepresentable)
        needed: usize,
        /// Bytes the buffer holds
        available: usize,
    },

    /// A dynamic-value offset word is not 32-byte aligned
    #[error("misaligned offset: {offset} is not a multiple of 32")]
    MisalignedOffset {
        /// The offending offset word value (saturated if unrepresentable)
        offset: u64,
    },

    /// Offset/length arithmetic does not describe a valid byte span
    #[error("length overflow: payload at byte {offset} with claimed length {length}")]
    LengthOverflow {
        /// Byte position of the blob payload
        offset: u64,
        /// Claimed payload length
        length: U256,
    },

    /// A fee list holds an odd number of values
    #[error("invalid fee pairing: {len} values cannot be split into key/value pairs")]
    InvalidPairing {
        /// Number of values supplied
        len: usize,
    },
}
