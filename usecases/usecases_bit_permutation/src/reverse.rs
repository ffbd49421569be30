//! Bit Reversal Module
//!
//! Output bit `i` equals input bit `WIDTH - 1 - i`.
//!
//! The reversal is a swap network: swap adjacent single bits, then adjacent
//! pairs, then nibbles, bytes, half-words, doubling the group width each
//! step until the two halves of the whole value have been swapped. That is
//! `log2(WIDTH)` steps of two shifts, two ANDs and one OR, with no branches
//! that depend on the input.

use entities_data_handling::bits::{self, BitWidth};

/// Bit permutation operations
pub struct BitPermutation;

impl BitPermutation {
    /// Reverse the bit order of `x`
    ///
    /// The function is an involution, and its fixed points are exactly the
    /// palindromic bit patterns (including zero and all-ones).
    ///
    /// # Examples
    /// ```
    /// use usecases_bit_permutation::BitPermutation;
    ///
    /// assert_eq!(BitPermutation::reverse_bits(1u16), 0x8000);
    /// assert_eq!(BitPermutation::reverse_bits(0b0000_0110u8), 0b0110_0000);
    /// ```
    pub fn reverse_bits<T: BitWidth>(x: T) -> T {
        let mut value = x;
        let mut shift = 1u32;
        while shift < T::WIDTH {
            let mask: T = bits::swap_mask(shift);
            let s = shift as usize;
            value = ((value >> s) & mask) | ((value & mask) << s);
            shift <<= 1;
        }
        value
    }

    /// Reverse the bit order of a 8-bit value
    ///
    /// # Arguments
    /// * `x` - Value to permute
    ///
    /// # Returns
    /// `x` with bit `i` moved to bit `7 - i`
    pub fn reverse_bits8(x: u8) -> u8 {
        Self::reverse_bits(x)
    }

    /// Reverse the bit order of a 16-bit value
    ///
    /// # Arguments
    /// * `x` - Value to permute
    ///
    /// # Returns
    /// `x` with bit `i` moved to bit `15 - i`
    pub fn reverse_bits16(x: u16) -> u16 {
        Self::reverse_bits(x)
    }

    /// Reverse the bit order of a 32-bit value
    ///
    /// # Arguments
    /// * `x` - Value to permute
    ///
    /// # Returns
    /// `x` with bit `i` moved to bit `31 - i`
    pub fn reverse_bits32(x: u32) -> u32 {
        Self::reverse_bits(x)
    }

    /// Reverse the bit order of a 64-bit value
    ///
    /// # Arguments
    /// * `x` - Value to permute
    ///
    /// # Returns
    /// `x` with bit `i` moved to bit `63 - i`
    pub fn reverse_bits64(x: u64) -> u64 {
        Self::reverse_bits(x)
    }

    /// Reverse the bit order of a 128-bit value
    ///
    /// # Arguments
    /// * `x` - Value to permute
    ///
    /// # Returns
    /// `x` with bit `i` moved to bit `127 - i`
    pub fn reverse_bits128(x: u128) -> u128 {
        Self::reverse_bits(x)
    }
}
