use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// K-fold cross-validation splitter.
///
/// The default assigns contiguous index blocks to folds without shuffling,
/// so fold membership is deterministic for a fixed row ordering. The first
/// `n_samples % n_splits` folds are one element larger. A seeded shuffle
/// can be enabled when row order carries structure the folds should not.
#[derive(Clone, Debug)]
pub struct KFold {
    n_splits: usize,
    shuffle_seed: Option<u64>,
}

impl KFold {
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle_seed: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Returns `(train_indices, validation_indices)` per fold.
    pub fn split(&self, n_samples: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
        if self.n_splits < 2 {
            return Err(Error::InvalidParameter(format!(
                "n_splits must be at least 2, got {}",
                self.n_splits
            )));
        }
        if self.n_splits > n_samples {
            return Err(Error::InvalidParameter(format!(
                "cannot split {} samples into {} folds",
                n_samples, self.n_splits
            )));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if let Some(seed) = self.shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            indices.shuffle(&mut rng);
        }

        let base = n_samples / self.n_splits;
        let remainder = n_samples % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for fold in 0..self.n_splits {
            let size = base + usize::from(fold < remainder);
            let stop = start + size;

            let validation = indices[start..stop].to_vec();
            let train: Vec<usize> = indices[..start]
                .iter()
                .chain(indices[stop..].iter())
                .copied()
                .collect();

            folds.push((train, validation));
            start = stop;
        }

        Ok(folds)
    }
}
