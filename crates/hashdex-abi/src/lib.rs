//! # hashdex-abi
//!
//! Contract call result decoding for HashDex tooling.
//!
//! A contract call returns a 32-byte-word-aligned buffer. Fixed-size
//! values sit at known word slots; dynamically-sized values (arrays,
//! byte strings) are reached through count slots and offset words. This
//! crate provides [`FunctionResult`], a read-only view over such a
//! buffer, and the [`decode`] routines for the dynamic shapes the
//! tooling consumes: address arrays, uint256 arrays, raw byte blobs and
//! fee schedules.
//!
//! Everything here is pure and synchronous. The buffer is produced by
//! the surrounding client layer; decoding borrows it read-only, so the
//! same result can be decoded from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use hashdex_abi::{decode, FunctionResult};
//!
//! # fn main() -> Result<(), hashdex_abi::DecodeError> {
//! // Words: [_, count = 2, token A, token B]
//! let mut buf = vec![0u8; 128];
//! buf[63] = 2;
//! buf[76..96].copy_from_slice(&[0xaa; 20]);
//! buf[108..128].copy_from_slice(&[0xbb; 20]);
//!
//! let result = FunctionResult::from(buf);
//! let tokens = decode::address_array(&result, 1)?;
//! assert_eq!(tokens.len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
mod error;
mod fees;
mod result;

pub use error::DecodeError;
pub use fees::Fee;
pub use result::{FunctionResult, WORD};

// Re-export primitives for convenience
pub use hashdex_primitives::{Address, I256, U256};
