//! Miller-Rabin Module
//!
//! The test runs in stages, cheapest first:
//!
//! 1. `n < 64`: answered from a 64-bit mask with bit `i` set iff `i` is prime.
//! 2. Even `n` is composite.
//! 3. Trial division by the odd primes up to 37.
//! 4. `n - 1 = d * 2^s` with `d` odd.
//! 5. One strong-probable-prime round per witness. A failed round proves `n`
//!    composite.
//!
//! ## Witnesses
//!
//! The rounds use the primary witnesses `{2, 3, 5, 7, 11, 13, 17}`. Those
//! seven bases are exact only below 341 550 071 728 321, the smallest strong
//! pseudoprime to all of them. At or above that bound the rounds continue with
//! `{19, 23, 29, 31, 37}`; the first twelve primes together have no strong
//! pseudoprime below 3.18 * 10^23, which covers the whole 64-bit range.

use entities_utilities::BigNumber;

/// Bit `i` is set iff `i` is prime, for `0 <= i < 64`
pub const SMALL_PRIME_MASK: u64 = 0x2820_8A20_A08A_28AC;

/// Odd primes used for trial division
pub const TRIAL_DIVISORS: [u64; 11] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Primary Miller-Rabin witnesses
pub const WITNESSES: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

/// Additional witnesses for `n >= PRIMARY_WITNESS_BOUND`
pub const EXTENDED_WITNESSES: [u64; 5] = [19, 23, 29, 31, 37];

/// Smallest strong pseudoprime to every primary witness
pub const PRIMARY_WITNESS_BOUND: u64 = 341_550_071_728_321;

/// Primality operations
pub struct PrimalityOracle;

impl PrimalityOracle {
    /// Deterministic primality test, exact for every `u64`
    ///
    /// # Examples
    /// ```
    /// use usecases_primality::PrimalityOracle;
    ///
    /// assert!(PrimalityOracle::is_prime(2));
    /// assert!(!PrimalityOracle::is_prime(1));
    /// assert!(PrimalityOracle::is_prime(18_446_744_073_709_551_557));
    /// ```
    pub fn is_prime(n: u64) -> bool {
        if n < 64 {
            return (SMALL_PRIME_MASK >> n) & 1 == 1;
        }
        if n & 1 == 0 {
            return false;
        }
        if TRIAL_DIVISORS.iter().any(|p| n % p == 0) {
            return false;
        }

        let rounds = StrongProbablePrime::new(n);
        let extended: &[u64] = if n >= PRIMARY_WITNESS_BOUND {
            &EXTENDED_WITNESSES
        } else {
            &[]
        };
        WITNESSES
            .iter()
            .chain(extended)
            .filter(|&&a| a < n)
            .all(|&a| rounds.passes(a))
    }

    /// Run a single strong-probable-prime round of `n` to base `a`
    ///
    /// Returns `true` if `a` is not a witness to the compositeness of `n`.
    /// Requires `n` odd and greater than 2, and `2 <= a <= n - 2`; outside
    /// that domain the result is `false`.
    pub fn miller_rabin_round(n: u64, a: u64) -> bool {
        if n <= 2 || n & 1 == 0 || a < 2 || a > n - 2 {
            return false;
        }
        StrongProbablePrime::new(n).passes(a)
    }

    /// Split `m` into `(d, s)` with `m = d * 2^s` and `d` odd
    ///
    /// `m` must be non-zero.
    pub fn split_power_of_two(m: u64) -> (u64, u32) {
        let mut d = m;
        let mut s = 0;
        while d != 0 && d & 1 == 0 {
            d >>= 1;
            s += 1;
        }
        (d, s)
    }
}

/// Precomputed operands for the rounds of one odd `n`
struct StrongProbablePrime {
    n: BigNumber,
    n_minus_one: BigNumber,
    d: BigNumber,
    s: u32,
}

impl StrongProbablePrime {
    fn new(n: u64) -> Self {
        let (d, s) = PrimalityOracle::split_power_of_two(n - 1);
        Self {
            n: BigNumber::from_u64(n),
            n_minus_one: BigNumber::from_u64(n - 1),
            d: BigNumber::from_u64(d),
            s,
        }
    }

    fn passes(&self, a: u64) -> bool {
        let mut x = match BigNumber::from_u64(a).mod_pow(&self.d, &self.n) {
            Some(x) => x,
            None => return false,
        };
        if x.is_one() || x == self.n_minus_one {
            return true;
        }
        for _ in 1..self.s {
            x = match x.square_mod(&self.n) {
                Some(x) => x,
                None => return false,
            };
            if x == self.n_minus_one {
                return true;
            }
        }
        false
    }
}
