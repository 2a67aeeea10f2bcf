//! Decoding routines for dynamically-sized result values
//!
//! A dynamic array comes back as a count word followed by one word per
//! element; a byte string is reached through one level of offset
//! indirection. Each routine here is a pure function of the buffer: on
//! any malformed layout it returns an error and no partial data.

use bytes::Bytes;
use hashdex_primitives::{Address, U256};

use crate::fees::Fee;
use crate::result::{FunctionResult, WORD};
use crate::DecodeError;

/// Decode a dynamic address array.
///
/// Reads the element count at word `count_slot`; elements occupy the
/// words immediately after it, and the returned order is the on-chain
/// order. A count of zero yields an empty vector.
pub fn address_array(
    result: &FunctionResult,
    count_slot: usize,
) -> Result<Vec<Address>, DecodeError> {
    let count = element_count(result, count_slot)?;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(result.address(count_slot + 1 + i)?);
    }
    Ok(out)
}

/// Decode a dynamic uint256 array.
///
/// Same layout contract as [`address_array`], with uint256 elements.
pub fn uint256_array(
    result: &FunctionResult,
    count_slot: usize,
) -> Result<Vec<U256>, DecodeError> {
    let count = element_count(result, count_slot)?;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(result.uint256(count_slot + 1 + i)?);
    }
    Ok(out)
}

/// Decode a dynamic byte string reached through an offset word.
///
/// The word at `pointer_slot` holds a byte offset, always a multiple of
/// 32. One word past the slot that offset selects sits the blob's byte
/// length; the payload follows the length word immediately. Returns a
/// zero-copy slice of the result buffer, exactly `length` bytes long.
pub fn byte_blob(result: &FunctionResult, pointer_slot: usize) -> Result<Bytes, DecodeError> {
    let available = result.as_bytes().len();
    let offset_word = result.uint256(pointer_slot)?;

    // Offsets into the word-aligned region are multiples of 32; anything
    // else means the buffer does not hold what the caller thinks it does.
    if !(offset_word % U256::from(WORD as u64)).is_zero() {
        return Err(DecodeError::MisalignedOffset {
            offset: sat_u64(offset_word),
        });
    }

    // Narrow the offset before dividing; a value no real buffer can
    // hold is out of bounds.
    if offset_word > U256::from(u64::MAX) {
        return Err(DecodeError::OutOfBounds {
            needed: usize::MAX,
            available,
        });
    }
    let offset_slot = usize::try_from(offset_word.as_u64() / WORD as u64).map_err(|_| {
        DecodeError::OutOfBounds {
            needed: usize::MAX,
            available,
        }
    })?;

    // Byte length one word past the offset target, payload right after.
    let length_slot = offset_slot.checked_add(1).ok_or(DecodeError::OutOfBounds {
        needed: usize::MAX,
        available,
    })?;
    let length_word = result.uint256(length_slot)?;

    let begin = (length_slot as u64 + 1)
        .checked_mul(WORD as u64)
        .ok_or(DecodeError::LengthOverflow {
            offset: u64::MAX,
            length: length_word,
        })?;
    if length_word > U256::from(u64::MAX) {
        return Err(DecodeError::LengthOverflow {
            offset: begin,
            length: length_word,
        });
    }
    let end = begin
        .checked_add(length_word.as_u64())
        .ok_or(DecodeError::LengthOverflow {
            offset: begin,
            length: length_word,
        })?;

    let begin = usize::try_from(begin).map_err(|_| DecodeError::OutOfBounds {
        needed: usize::MAX,
        available,
    })?;
    let end = usize::try_from(end).map_err(|_| DecodeError::OutOfBounds {
        needed: usize::MAX,
        available,
    })?;
    result.slice(begin, end)
}

/// Pair a flat fee encoding into key/value records.
///
/// Fee configurations come back as a flat uint256 sequence laid out
/// `[key0, value0, key1, value1, ..]`, typically the output of
/// [`uint256_array`] on the fee slot. An odd number of values means the
/// contract and the tooling disagree about the encoding, and nothing is
/// returned.
pub fn fee_pairs(values: &[U256]) -> Result<Vec<Fee>, DecodeError> {
    if values.len() % 2 != 0 {
        return Err(DecodeError::InvalidPairing { len: values.len() });
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| Fee::new(pair[0], pair[1]))
        .collect())
}

/// Read an array's element count and check the buffer can hold the body.
fn element_count(result: &FunctionResult, count_slot: usize) -> Result<usize, DecodeError> {
    let count_word = result.uint256(count_slot)?;
    // uint256() succeeding means count_slot < word_count.
    let body_words = result.word_count() - count_slot - 1;
    if count_word > U256::from(body_words as u64) {
        let needed = count_word
            .checked_add(U256::from(count_slot as u64 + 1))
            .and_then(|words| words.checked_mul(U256::from(WORD as u64)))
            .map_or(usize::MAX, sat_usize);
        return Err(DecodeError::OutOfBounds {
            needed,
            available: result.as_bytes().len(),
        });
    }
    Ok(count_word.as_usize())
}

fn sat_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

fn sat_usize(value: U256) -> usize {
    usize::try_from(sat_u64(value)).unwrap_or(usize::MAX)
}
