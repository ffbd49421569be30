//! Integration tests for usecases_bit_permutation crate
//!
//! Property tests for the involution law and the fixed-point characterization.

use proptest::prelude::*;
use usecases_bit_permutation::BitPermutation;

fn is_palindrome_u32(x: u32) -> bool {
    (0..16).all(|i| ((x >> i) & 1) == ((x >> (31 - i)) & 1))
}

proptest! {
    #[test]
    fn prop_involution_u16(x in any::<u16>()) {
        prop_assert_eq!(BitPermutation::reverse_bits16(BitPermutation::reverse_bits16(x)), x);
    }

    #[test]
    fn prop_involution_u32(x in any::<u32>()) {
        prop_assert_eq!(BitPermutation::reverse_bits32(BitPermutation::reverse_bits32(x)), x);
    }

    #[test]
    fn prop_involution_u64(x in any::<u64>()) {
        prop_assert_eq!(BitPermutation::reverse_bits64(BitPermutation::reverse_bits64(x)), x);
    }

    #[test]
    fn prop_involution_u128(x in any::<u128>()) {
        prop_assert_eq!(BitPermutation::reverse_bits128(BitPermutation::reverse_bits128(x)), x);
    }

    #[test]
    fn prop_bit_i_maps_to_mirror(x in any::<u64>()) {
        let r = BitPermutation::reverse_bits64(x);
        for i in 0..64 {
            prop_assert_eq!((r >> i) & 1, (x >> (63 - i)) & 1);
        }
    }

    #[test]
    fn prop_fixed_points_are_palindromes(x in any::<u32>()) {
        prop_assert_eq!(BitPermutation::reverse_bits32(x) == x, is_palindrome_u32(x));
    }

    #[test]
    fn prop_popcount_preserved(x in any::<u64>()) {
        prop_assert_eq!(BitPermutation::reverse_bits64(x).count_ones(), x.count_ones());
    }
}
