//! Integration tests for entities_utilities crate
//!
//! These tests verify big number operations end-to-end against native
//! 128-bit arithmetic.

use entities_utilities::*;
use proptest::prelude::*;

#[test]
fn test_ninety_six_bit_significand_assembly() {
    let lo = BigNumber::from_u32(0xDEAD_BEEF);
    let mid = BigNumber::from_u32(0x0123_4567).lshift(32);
    let hi = BigNumber::from_u32(0x89AB_CDEF).lshift(64);
    let assembled = hi.bitor(&mid).bitor(&lo);

    assert_eq!(
        assembled.to_u128(),
        Some(0x89AB_CDEF_0123_4567_DEAD_BEEFu128)
    );
    assert!(assembled.fits_in_bits(96));
}

#[test]
fn test_mod_pow_fermat_on_large_prime() {
    // Largest prime below 2^64
    let p = BigNumber::from_u64(18_446_744_073_709_551_557);
    let p_minus_one = p.minus(&BigNumber::from_u32(1));
    for a in [2u32, 3, 5, 7, 11, 13, 17] {
        let r = BigNumber::from_u32(a).mod_pow(&p_minus_one, &p).unwrap();
        assert!(r.is_one(), "a = {}", a);
    }
}

#[test]
fn test_scale_division_identity() {
    let significand = BigNumber::from_u128(79_228_162_514_264_337_593_543_950_335);
    for scale in 0..=28 {
        let factor = BigNumber::pow10(scale);
        let (q, r) = significand.div_rem(&factor).unwrap();
        assert_eq!(q.times(&factor).plus(&r), significand);
    }
}

proptest! {
    #[test]
    fn prop_mod_pow_matches_native(base in any::<u64>(), exp in 0u64..4096, modulus in 1u64..) {
        let expected = {
            let m = u128::from(modulus);
            let mut result = 1u128 % m;
            let mut b = u128::from(base) % m;
            let mut e = exp;
            while e > 0 {
                if e & 1 == 1 {
                    result = result * b % m;
                }
                b = b * b % m;
                e >>= 1;
            }
            result as u64
        };
        let got = BigNumber::from_u64(base)
            .mod_pow(&BigNumber::from_u64(exp), &BigNumber::from_u64(modulus))
            .unwrap();
        prop_assert_eq!(got.to_u64(), Some(expected));
    }

    #[test]
    fn prop_div_rem_matches_native(a in any::<u128>(), b in 1u128..) {
        let (q, r) = BigNumber::from_u128(a).div_rem(&BigNumber::from_u128(b)).unwrap();
        prop_assert_eq!(q.to_u128(), Some(a / b));
        prop_assert_eq!(r.to_u128(), Some(a % b));
    }
}
