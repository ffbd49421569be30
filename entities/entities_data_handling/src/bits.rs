//! Bit Width Module
//!
//! Provides the numeric-capability trait that lets bit-level algorithms be
//! written once and instantiated for every fixed-width unsigned integer.
//!
//! ## Overview
//!
//! Bit-level algorithms in this workspace (bit reversal, field extraction)
//! only need a handful of capabilities from the integer they operate on:
//!
//! - **Bitwise operators**: AND, OR, shifts (provided by `num_traits::PrimInt`)
//! - **No sign semantics**: the type must be unsigned (`num_traits::Unsigned`)
//! - **A fixed width**: known at compile time through [`BitWidth::WIDTH`]
//!
//! ## Bit Numbering
//!
//! Unlike byte-oriented bitstring handling, this module uses **LSB-first
//! numbering**: bit 0 is the least significant bit, bit `WIDTH - 1` the most
//! significant one.
//!
//! ## Examples
//!
//! ```rust
//! use entities_data_handling::bits::{self, BitWidth};
//!
//! assert_eq!(<u16 as BitWidth>::WIDTH, 16);
//! assert_eq!(bits::swap_mask::<u16>(1), 0x5555);
//! assert_eq!(bits::get_bit(0x8000u16, 15), 1);
//! ```

use num_traits::{PrimInt, Unsigned};

/// Fixed-width unsigned integer usable by bit-level algorithms
///
/// The width must be a power of two so that a swap network of
/// `log2(WIDTH)` halving steps covers the whole value.
pub trait BitWidth: PrimInt + Unsigned {
    /// Number of bits in the type
    const WIDTH: u32;
}

macro_rules! impl_bit_width {
    ($($t:ty),*) => {
        $(
            impl BitWidth for $t {
                const WIDTH: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_bit_width!(u8, u16, u32, u64, u128);

/// Mask selecting the low half of every `2 * shift`-bit group
///
/// For `shift = 1` this is `0x55..`, for `2` it is `0x33..`, for `4`
/// `0x0F..`, and so on up to `shift = WIDTH / 2`, which selects the low half
/// of the whole value. The mask is derived as `MAX / (2^shift + 1)`, which
/// yields the repeating pattern for any power-of-two width.
///
/// # Arguments
/// * `shift` - Group half-width in bits; must be below `T::WIDTH`
///
/// # Examples
///
/// ```rust
/// use entities_data_handling::bits::swap_mask;
///
/// assert_eq!(swap_mask::<u8>(1), 0x55);
/// assert_eq!(swap_mask::<u8>(2), 0x33);
/// assert_eq!(swap_mask::<u8>(4), 0x0F);
/// assert_eq!(swap_mask::<u64>(32), 0x0000_0000_FFFF_FFFF);
/// ```
pub fn swap_mask<T: BitWidth>(shift: u32) -> T {
    T::max_value() / ((T::one() << shift as usize) + T::one())
}

/// Get a single bit from a value (LSB-first numbering)
///
/// Positions at or beyond the width read as 0.
pub fn get_bit<T: BitWidth>(value: T, bit_pos: u32) -> u8 {
    if bit_pos >= T::WIDTH {
        return 0;
    }
    if (value >> bit_pos as usize) & T::one() == T::one() {
        1
    } else {
        0
    }
}

/// Extract `len` bits starting at `offset` (LSB-first)
///
/// Used for reading packed fields such as the exponent of a float. The
/// field keeps the type of `value`; bits past the width of `T` read as 0,
/// so an offset at or beyond the width yields 0 and `len` is clamped to the
/// bits that remain.
pub fn extract_field<T: BitWidth>(value: T, offset: u32, len: u32) -> T {
    if len == 0 || offset >= T::WIDTH {
        return T::zero();
    }
    let shifted = value >> offset as usize;
    let field = if len >= T::WIDTH {
        shifted
    } else {
        shifted & ((T::one() << len as usize) - T::one())
    };
    field
}
