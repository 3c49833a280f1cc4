use rand::Rng;
use rand_distr::Exp1;

use crate::error::{Result, ShowerError};

/// Single random stream shared by all process models of one run.
///
/// Every draw advances the same generator, so the order in which models call
/// `exponential` and `partition` determines the result under a fixed seed.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Exponentially distributed value with the given rate (mean `1 / rate`).
    ///
    /// The rate must be positive; process models only pass rates derived from
    /// positive constants.
    #[inline]
    pub fn exponential(&mut self, rate: f64) -> f64 {
        let x: f64 = self.rng.sample(Exp1);
        x / rate
    }

    /// Uniformly distributed value in `[low, high)`. Panics if `low >= high`.
    #[inline]
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }

    /// Split `total` into `count` random shares that sum to `total`.
    ///
    /// Shares are Exp(1) weights normalised to the total. The buffer is sized to
    /// `count`; requests above `capacity` fail before any draw is taken.
    pub fn partition(&mut self, total: f64, count: usize, capacity: usize) -> Result<Vec<f64>> {
        if count > capacity {
            return Err(ShowerError::CapacityExceeded {
                requested: count,
                capacity,
            });
        }

        let mut shares: Vec<f64> = (0..count).map(|_| self.exponential(1.0)).collect();
        let sum: f64 = shares.iter().sum();
        if sum > 0.0 {
            let scale = total / sum;
            for share in &mut shares {
                *share *= scale;
            }
        }
        Ok(shares)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
