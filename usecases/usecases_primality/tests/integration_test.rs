//! Integration tests for usecases_primality crate
//!
//! Cross-checks the deterministic test against independent reference
//! implementations.

use proptest::prelude::*;
use usecases_primality::PrimalityOracle;

/// Trial division up to the square root
fn reference_is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[test]
fn test_known_primes_near_powers_of_two() {
    // Largest primes below 2^k
    let cases = [
        (1u64 << 31, 2_147_483_647u64),
        (1u64 << 32, 4_294_967_291),
        (1u64 << 40, 1_099_511_627_689),
        (1u64 << 62, 4_611_686_018_427_387_847),
    ];
    for (bound, largest) in cases {
        assert!(PrimalityOracle::is_prime(largest), "{}", largest);
        for n in largest + 1..bound.min(largest + 200) {
            assert!(!PrimalityOracle::is_prime(n), "{}", n);
        }
    }
}

#[test]
fn test_products_of_large_primes() {
    let p = 4_294_967_291u64;
    let q = 4_294_967_279u64;
    assert!(PrimalityOracle::is_prime(q));
    assert!(!PrimalityOracle::is_prime(p * q));
    assert!(!PrimalityOracle::is_prime(p * p));
}

#[test]
fn test_fermat_number_f5_is_composite() {
    assert!(!PrimalityOracle::is_prime(4_294_967_297));
    assert!(PrimalityOracle::is_prime(65_537));
}

#[test]
fn test_dense_window_against_trial_division() {
    let start = 999_999_000_000u64;
    for n in start..start + 2_000 {
        assert_eq!(PrimalityOracle::is_prime(n), reference_is_prime(n), "n = {}", n);
    }
}

proptest! {
    #[test]
    fn prop_matches_trial_division(n in 0u64..1_000_000_000_000) {
        prop_assert_eq!(PrimalityOracle::is_prime(n), reference_is_prime(n));
    }

    #[test]
    fn prop_odd_semiprimes_are_composite(a in 41u64..4_000_000, b in 41u64..4_000_000) {
        let (a, b) = (a | 1, b | 1);
        prop_assert!(!PrimalityOracle::is_prime(a * b));
    }
}
