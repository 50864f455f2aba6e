//! Weighted random choice over a fixed set of items.

use crate::error::GeneratorError;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;

/// A fixed set of items, each drawn with probability `weight / total`.
///
/// ```rust
/// use rand::SeedableRng;
/// use seed_generator::generators::WeightedChoice;
///
/// let diaper = WeightedChoice::new([("pee", 2), ("poop", 1)]).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// assert!(["pee", "poop"].contains(diaper.sample(&mut rng)));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    items: Vec<T>,
    weights: Vec<u32>,
    /// Sums in u64 so many large `u32` weights cannot overflow
    index: WeightedIndex<u64>,
}

impl<T> WeightedChoice<T> {
    /// Build from `(item, weight)` pairs.
    ///
    /// Fails if there are no items or all weights are zero. Items with zero
    /// weight are kept but never drawn.
    pub fn new<I>(pairs: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let (items, weights): (Vec<T>, Vec<u32>) = pairs.into_iter().unzip();

        let index = WeightedIndex::new(weights.iter().map(|&w| u64::from(w))).map_err(
            |e| match e {
                WeightedError::NoItem => GeneratorError::EmptyChoice,
                WeightedError::AllWeightsZero => GeneratorError::ZeroWeight,
                other => GeneratorError::InvalidWeights(other),
            },
        )?;

        Ok(Self {
            items,
            weights,
            index,
        })
    }

    /// Build with every item equally likely.
    pub fn uniform<I>(items: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items.into_iter().map(|item| (item, 1)))
    }

    /// Draw one item.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &T {
        &self.items[self.index.sample(rng)]
    }

    /// Probability of drawing the item at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let weight = *self.weights.get(index)?;
        let total: u64 = self.weights.iter().map(|&w| u64::from(w)).sum();
        Some(f64::from(weight) / total as f64)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
