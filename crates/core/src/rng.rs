//! RNG module - deterministic piece selection
//!
//! Pieces and rotations are drawn uniformly at random. A small LCG keeps the
//! sequence reproducible from a seed, which the tests and the headless runner
//! rely on.

use crate::types::{PieceKind, Rotation, PIECE_KINDS, ROTATIONS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random integer in `lo..=hi`
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let span = hi - lo + 1;
        // High bits of an LCG are far better distributed than the low ones
        lo + (self.next_u32() >> 16) % span
    }

    pub fn piece_kind(&mut self) -> PieceKind {
        let index = self.range_inclusive(0, PIECE_KINDS as u32 - 1) as usize;
        PieceKind::ALL[index]
    }

    pub fn rotation(&mut self) -> Rotation {
        let index = self.range_inclusive(0, ROTATIONS as u32 - 1) as usize;
        Rotation::ALL[index]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_inclusive(3, 5);
            assert!((3..=5).contains(&v));
        }
    }

    #[test]
    fn test_every_piece_kind_appears() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; PIECE_KINDS];
        for _ in 0..500 {
            seen[rng.piece_kind().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "not all kinds drawn: {:?}", seen);
    }
}
