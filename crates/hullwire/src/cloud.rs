//! Random 2D point clouds (gaussian scatter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the point clouds fed to the
//!   external hull library. The generator is parameterizable and reproducible,
//!   returning plain `Vector2<f64>` ready for either marshaling flow.
//!
//! Model
//! - Coordinates are standard-normal variates scaled by a constant factor
//!   (Box–Muller over the uniform RNG; one pair per 2D point).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points to draw.
    pub count: usize,
    /// Constant factor applied to the standard-normal coordinates.
    pub scale: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            scale: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points with coordinates `scale * N(0, 1)`.
///
/// A count of zero yields an empty cloud; the marshaling layer decides
/// whether an empty cloud is acceptable for a given boundary.
pub fn draw_cloud_normal(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| {
            let (zx, zy) = gaussian_pair(&mut rng);
            Vector2::new(zx * cfg.scale, zy * cfg.scale)
        })
        .collect()
}

/// One Box–Muller draw: two independent standard-normal variates.
#[inline]
fn gaussian_pair<R: Rng>(rng: &mut R) -> (f64, f64) {
    // u1 in (0, 1] so the log stays finite.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;
    (r * theta.cos(), r * theta.sin())
}
