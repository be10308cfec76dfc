//! Character pool and the regeneration engine
//!
//! Regeneration reassigns the glyph of every record while keeping ids,
//! positions and sizes. Randomness is injected so callers can seed it.

use crate::constants::{DIGITS, LETTERS};
use crate::types::{ChartError, PositionedCharacter, Result};
use rand::Rng;

/// Ordered set of characters eligible for random assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// `A..Z`, followed by `0..9` when digits are included
    pub fn new(include_digits: bool) -> Self {
        let mut chars: Vec<char> = LETTERS.chars().collect();
        if include_digits {
            chars.extend(DIGITS.chars());
        }
        Self { chars }
    }

    pub fn letters() -> Self {
        Self::new(false)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Uniformly random member of the pool
    pub fn pick<R: Rng>(&self, rng: &mut R) -> char {
        self.chars[rng.random_range(0..self.chars.len())]
    }

    /// Fisher–Yates shuffle of the pool, walking from the tail to the head
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<char> {
        let mut chars = self.chars.clone();
        for i in (1..chars.len()).rev() {
            let j = rng.random_range(0..=i);
            chars.swap(i, j);
        }
        chars
    }
}

/// Assign fresh characters to `letters`.
///
/// With `allow_duplicates` every record draws independently from the pool.
/// Otherwise the pool is shuffled and the first `letters.len()` characters are
/// handed out in order, which fails with [`ChartError::InsufficientPool`] when
/// the pool is too small.
pub fn regenerate<R: Rng>(
    letters: &[PositionedCharacter],
    include_digits: bool,
    allow_duplicates: bool,
    rng: &mut R,
) -> Result<Vec<PositionedCharacter>> {
    let pool = CharacterPool::new(include_digits);

    if allow_duplicates {
        return Ok(letters
            .iter()
            .map(|letter| PositionedCharacter {
                glyph: pool.pick(rng),
                ..letter.clone()
            })
            .collect());
    }

    if pool.len() < letters.len() {
        return Err(ChartError::InsufficientPool {
            required: letters.len(),
            available: pool.len(),
        });
    }

    let shuffled = pool.shuffled(rng);
    Ok(letters
        .iter()
        .zip(shuffled)
        .map(|(letter, glyph)| PositionedCharacter {
            glyph,
            ..letter.clone()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn layout(count: u32) -> Vec<PositionedCharacter> {
        (0..count)
            .map(|i| PositionedCharacter::new(i, 'A', i as f32, 2.0 * i as f32, 12.0))
            .collect()
    }

    #[test]
    fn pool_sizes() {
        assert_eq!(CharacterPool::new(false).len(), 26);
        assert_eq!(CharacterPool::new(true).len(), 36);
        assert!(CharacterPool::new(true).contains('7'));
        assert!(!CharacterPool::new(false).contains('7'));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let pool = CharacterPool::new(true);
        let mut rng = StdRng::seed_from_u64(9);
        let mut shuffled = pool.shuffled(&mut rng);
        shuffled.sort_unstable();
        let mut original = pool.as_slice().to_vec();
        original.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn unique_regeneration_has_no_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        for seed_round in 0..20 {
            let letters = layout(26);
            let result = regenerate(&letters, false, false, &mut rng).unwrap();
            let distinct: HashSet<char> = result.iter().map(|l| l.glyph).collect();
            assert_eq!(distinct.len(), 26, "round {seed_round} repeated a glyph");
        }
    }

    #[test]
    fn unique_regeneration_keeps_geometry() {
        let letters = layout(10);
        let mut rng = StdRng::seed_from_u64(1);
        let result = regenerate(&letters, true, false, &mut rng).unwrap();
        for (before, after) in letters.iter().zip(&result) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.x, after.x);
            assert_eq!(before.y, after.y);
            assert_eq!(before.font_size, after.font_size);
        }
    }

    #[test]
    fn unique_regeneration_fails_when_pool_too_small() {
        let letters = layout(28);
        let mut rng = StdRng::seed_from_u64(3);
        match regenerate(&letters, false, false, &mut rng) {
            Err(ChartError::InsufficientPool {
                required,
                available,
            }) => {
                assert_eq!(required, 28);
                assert_eq!(available, 26);
            }
            other => panic!("Expected InsufficientPool, got {other:?}"),
        }

        // Digits widen the pool enough
        assert!(regenerate(&letters, true, false, &mut rng).is_ok());
    }

    #[test]
    fn duplicate_regeneration_draws_from_pool() {
        let letters = layout(100);
        let mut rng = StdRng::seed_from_u64(5);
        let result = regenerate(&letters, false, true, &mut rng).unwrap();
        assert_eq!(result.len(), 100);
        assert!(result.iter().all(|l| l.glyph.is_ascii_uppercase()));

        let with_digits = regenerate(&letters, true, true, &mut rng).unwrap();
        let pool = CharacterPool::new(true);
        assert!(with_digits.iter().all(|l| pool.contains(l.glyph)));
    }

    #[test]
    fn same_seed_same_result() {
        let letters = layout(12);
        let a = regenerate(&letters, false, false, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = regenerate(&letters, false, false, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }
}
