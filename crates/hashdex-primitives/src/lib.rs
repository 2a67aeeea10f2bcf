//! # hashdex-primitives
//!
//! Primitive value types for HashDex contract tooling.
//!
//! This crate provides the fundamental data types shared by the result
//! decoder: Solidity-format addresses and the unsigned/signed 256-bit
//! word views contract calls return.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod int256;

pub use address::{Address, AddressError};
pub use int256::I256;

// Re-export primitive-types for U256
pub use primitive_types::U256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_basic() {
        let a = U256::from(100u64);
        let b = U256::from(200u64);
        assert_eq!(a + b, U256::from(300u64));
    }
}
