//! Deterministic pseudo-random generators.
//!
//! Cluster generation must be reproducible from a seed across platforms and
//! releases, so the generators here are small fixed algorithms rather than
//! `StdRng` (whose algorithm is allowed to change between `rand` versions).
//! Both plug into the `rand` ecosystem through [`RngCore`] and [`SeedableRng`],
//! so callers use the usual `Rng` extension methods on top of them.

use rand_core::{impls, Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 20-bit linear congruential generator with a rotated 32-bit output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg32 {
    x: u32,
}

impl Lcg32 {
    const MODULUS: u32 = 1 << 20;
    /// Outputs thrown away at construction.
    const WARMUP: usize = 1;

    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            x: seed % Self::MODULUS,
        };
        for _ in 0..Self::WARMUP {
            rng.step();
        }
        rng
    }

    fn step(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(1093).wrapping_add(221587) % Self::MODULUS;
        self.x << 21 | self.x >> 11
    }
}

impl RngCore for Lcg32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Uses the low 32 bits of `state`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

/// Small fast counting generator (SFC32).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Sfc32 {
    /// Outputs thrown away at construction.
    const WARMUP: usize = 12;

    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        let mut rng = Self { a, b, c, d };
        for _ in 0..Self::WARMUP {
            rng.step();
        }
        rng
    }

    fn step(&mut self) -> u32 {
        let t = self.a.wrapping_add(self.b).wrapping_add(self.d);
        self.d = self.d.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        t
    }
}

impl RngCore for Sfc32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Sfc32 {
    /// `a`, `b`, `c`, `d` as little-endian words.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let word = |i: usize| u32::from_le_bytes([seed[i], seed[i + 1], seed[i + 2], seed[i + 3]]);
        Self::new(word(0), word(4), word(8), word(12))
    }

    /// Maps `state` to `(0, low 32 bits, high 32 bits, 1)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(0, state as u32, (state >> 32) as u32, 1)
    }
}

/// Which generator algorithm to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrngKind {
    Lcg32,
    #[default]
    Sfc32,
}

impl PrngKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrngKind::Lcg32 => "lcg32",
            PrngKind::Sfc32 => "sfc32",
        }
    }
}

impl fmt::Display for PrngKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown generator {0:?} (expected \"lcg32\" or \"sfc32\")")]
pub struct ParsePrngKindError(String);

impl FromStr for PrngKind {
    type Err = ParsePrngKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lcg32" | "lcg" => Ok(PrngKind::Lcg32),
            "sfc32" | "sfc" => Ok(PrngKind::Sfc32),
            _ => Err(ParsePrngKindError(s.to_string())),
        }
    }
}

/// A generator chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prng {
    Lcg32(Lcg32),
    Sfc32(Sfc32),
}

impl Prng {
    pub fn new(kind: PrngKind, seed: u64) -> Self {
        match kind {
            PrngKind::Lcg32 => Prng::Lcg32(Lcg32::seed_from_u64(seed)),
            PrngKind::Sfc32 => Prng::Sfc32(Sfc32::seed_from_u64(seed)),
        }
    }

    pub fn kind(&self) -> PrngKind {
        match self {
            Prng::Lcg32(_) => PrngKind::Lcg32,
            Prng::Sfc32(_) => PrngKind::Sfc32,
        }
    }
}

impl RngCore for Prng {
    fn next_u32(&mut self) -> u32 {
        match self {
            Prng::Lcg32(rng) => rng.next_u32(),
            Prng::Sfc32(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Sum of `n` draws of `next_u32() % d`, so the result lies in `0..=n * (d - 1)`.
/// Returns 0 when `n < 1` or `d < 1`.
pub fn roll<R: RngCore + ?Sized>(rng: &mut R, n: i64, d: i64) -> i64 {
    if n < 1 || d < 1 {
        return 0;
    }
    let d = d as u64;
    (0..n).map(|_| (u64::from(rng.next_u32()) % d) as i64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take<R: RngCore>(rng: &mut R, n: usize) -> Vec<u32> {
        (0..n).map(|_| rng.next_u32()).collect()
    }

    #[test]
    fn lcg32_seed_zero_vector() {
        let mut rng = Lcg32::new(0);
        assert_eq!(
            take(&mut rng, 10),
            vec![
                1178599519, 564134195, 3263168954, 2665480396, 2227175438, 4196401256, 486539424,
                56623112, 2604662946, 178258093,
            ]
        );
    }

    #[test]
    fn lcg32_seed_one_vector() {
        let mut rng = Lcg32::new(1);
        assert_eq!(
            take(&mut rng, 10),
            vec![
                2573205670, 155189689, 2963276144, 1300234382, 367002109, 2545943034, 421527894,
                2013266181, 2321547461, 4265607635,
            ]
        );
    }

    #[test]
    fn sfc32_published_vector() {
        let mut rng = Sfc32::new(0, 12345, 0, 1);
        assert_eq!(
            take(&mut rng, 10),
            vec![
                235160590, 2967261163, 116171463, 2882324903, 362604721, 4227106926, 1933307004,
                1608300071, 2256615412, 2701957640,
            ]
        );
    }

    #[test]
    fn seed_from_u64_matches_explicit_state() {
        assert_eq!(Sfc32::seed_from_u64(12345), Sfc32::new(0, 12345, 0, 1));
        assert_eq!(Lcg32::seed_from_u64(1 << 32 | 7), Lcg32::new(7));
        let mut seed = [0u8; 16];
        seed[4..8].copy_from_slice(&12345u32.to_le_bytes());
        seed[12..16].copy_from_slice(&1u32.to_le_bytes());
        assert_eq!(Sfc32::from_seed(seed), Sfc32::new(0, 12345, 0, 1));
    }

    #[test]
    fn prng_dispatches_to_selected_algorithm() {
        let mut lcg = Prng::new(PrngKind::Lcg32, 0);
        assert_eq!(lcg.kind(), PrngKind::Lcg32);
        assert_eq!(take(&mut lcg, 2), vec![1178599519, 564134195]);

        let mut sfc = Prng::new(PrngKind::Sfc32, 12345);
        assert_eq!(sfc.kind(), PrngKind::Sfc32);
        assert_eq!(take(&mut sfc, 2), vec![235160590, 2967261163]);
    }

    #[test]
    fn next_u64_is_two_u32_draws_low_first() {
        let mut a = Sfc32::new(0, 12345, 0, 1);
        let mut b = a.clone();
        let lo = u64::from(b.next_u32());
        let hi = u64::from(b.next_u32());
        assert_eq!(a.next_u64(), hi << 32 | lo);
    }

    #[test]
    fn roll_stays_in_bounds() {
        let mut rng = Sfc32::seed_from_u64(99);
        for _ in 0..1000 {
            let r = roll(&mut rng, 3, 6);
            assert!((0..=15).contains(&r), "3d6 roll {} out of range", r);
        }
        for _ in 0..100 {
            assert_eq!(roll(&mut rng, 4, 1), 0);
        }
    }

    #[test]
    fn roll_with_non_positive_inputs_is_zero() {
        let mut rng = Lcg32::new(0);
        let before = rng.clone();
        assert_eq!(roll(&mut rng, 0, 6), 0);
        assert_eq!(roll(&mut rng, 3, 0), 0);
        assert_eq!(roll(&mut rng, -1, 6), 0);
        assert_eq!(roll(&mut rng, 3, -6), 0);
        assert_eq!(rng, before, "degenerate rolls must not advance the generator");
    }

    #[test]
    fn roll_is_sum_of_modulo_draws() {
        let mut a = Lcg32::new(0);
        let mut b = Lcg32::new(0);
        let expected: i64 = (0..5).map(|_| i64::from(b.next_u32() % 10)).sum();
        assert_eq!(roll(&mut a, 5, 10), expected);
    }

    #[test]
    fn prng_kind_parses_and_displays() {
        assert_eq!("lcg32".parse::<PrngKind>(), Ok(PrngKind::Lcg32));
        assert_eq!(" SFC32 ".parse::<PrngKind>(), Ok(PrngKind::Sfc32));
        assert!("mt19937".parse::<PrngKind>().is_err());
        assert_eq!(PrngKind::Sfc32.to_string(), "sfc32");
        assert_eq!(PrngKind::default(), PrngKind::Sfc32);
    }
}
