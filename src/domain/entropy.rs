use rand::{seq::SliceRandom, Rng};

use crate::domain::puzzle::PIECES;

/// Source of randomness for puzzle shuffles and heart spawning.
pub trait Entropy: Send + Sync {
    /// A permutation of the puzzle piece indices
    fn piece_order(&self) -> Vec<u8>;
    /// A uniform sample in [0, 1)
    fn unit(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn piece_order(&self) -> Vec<u8> {
        let mut order: Vec<u8> = (0..PIECES as u8).collect();
        order.shuffle(&mut rand::rng());
        order
    }

    fn unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic entropy for tests
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pub order: Vec<u8>,
    pub unit: f64,
}

impl FixedEntropy {
    pub fn new(order: Vec<u8>, unit: f64) -> Self {
        Self { order, unit }
    }
}

impl Default for FixedEntropy {
    fn default() -> Self {
        Self::new(vec![8, 7, 6, 5, 4, 3, 2, 1, 0], 0.5)
    }
}

impl Entropy for FixedEntropy {
    fn piece_order(&self) -> Vec<u8> {
        self.order.clone()
    }

    fn unit(&self) -> f64 {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_entropy_yields_permutation() {
        let mut order = ThreadEntropy.piece_order();
        order.sort_unstable();
        assert_eq!(order, (0..PIECES as u8).collect::<Vec<_>>());
    }

    #[test]
    fn thread_entropy_unit_in_range() {
        for _ in 0..100 {
            let u = ThreadEntropy.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
