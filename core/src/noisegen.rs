use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use crate::interp::{linear, s_curve3, s_curve5};

// Quality of coherent noise, i.e. which curve shapes the fractional lattice coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseQuality {
    // No shaping. The derivative is discontinuous at integer boundaries ("creasing").
    Fast,
    // Cubic S-curve. Continuous first derivative, discontinuous second.
    #[default]
    Standard,
    // Quintic S-curve. First and second derivatives are continuous.
    Best,
}

// Hash multipliers. All of them are primes and must stay prime.
const X_NOISE_GEN: i32 = 1619;
const Y_NOISE_GEN: i32 = 6971;
const SEED_NOISE_GEN: i32 = 1013;
const SHIFT_NOISE_GEN: u32 = 13;

// Folding bound for coordinates entering the kernel (2^30)
const INT32_RANGE: f64 = 1_073_741_824.0;

// Eight unit gradients at 45 degree steps
const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, 1.0),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (-1.0, 0.0),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (0.0, -1.0),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

// Offsets handed to gradient_noise are at most (1, 1) long, so dividing the
// dot product by sqrt(2) keeps it inside [-1, 1]
const GRADIENT_NORMALIZATION: f64 = SQRT_2;

// Interpolating four corners never reaches the single-corner bound; the blended
// value peaks just under 0.5. Scaling by 2 spreads one octave over [-1, 1].
const COHERENT_NOISE_SCALE: f64 = 2.0;

// Integer noise for a lattice point, in [0, 2^31 - 1].
// Wrapping arithmetic plus explicit 31-bit masks give the same bits on every platform.
#[inline]
pub fn int_hash(x: i32, y: i32, seed: i32) -> i32 {
    let mut n = X_NOISE_GEN
        .wrapping_mul(x)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(y))
        .wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed))
        & 0x7fff_ffff;
    n ^= n >> SHIFT_NOISE_GEN;
    n.wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff
}

// Value noise for a lattice point, in [-1, 1]
#[inline]
pub fn value_noise(x: i32, y: i32, seed: i32) -> f64 {
    1.0 - (int_hash(x, y, seed) as f64 / INT32_RANGE)
}

// Gradient noise contribution of lattice point (ix, iy) at (fx, fy).
// Requires |fx - ix| <= 1 and |fy - iy| <= 1; the result is then in [-1, 1].
#[inline]
pub fn gradient_noise(fx: f64, fy: f64, ix: i32, iy: i32, seed: i32) -> f64 {
    debug_assert!((fx - ix as f64).abs() <= 1.0 && (fy - iy as f64).abs() <= 1.0);
    let index = ((int_hash(ix, iy, seed) >> 8) & 7) as usize;
    let (gx, gy) = GRADIENTS[index];
    let dx = fx - ix as f64;
    let dy = fy - iy as f64;
    (gx * dx + gy * dy) / GRADIENT_NORMALIZATION
}

// Coherent gradient noise at (x, y) in [-1, 1]: the four surrounding lattice
// gradients blended with the curve selected by `quality`.
// Coordinates must already be inside the i32 range, see make_int32_range.
pub fn gradient_coherent_noise(x: f64, y: f64, seed: i32, quality: NoiseQuality) -> f64 {
    // Lattice cell containing the point
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    // Position inside the cell, shaped by the quality curve
    let (xs, ys) = {
        let fx = x - x0 as f64;
        let fy = y - y0 as f64;
        match quality {
            NoiseQuality::Fast => (fx, fy),
            NoiseQuality::Standard => (s_curve3(fx), s_curve3(fy)),
            NoiseQuality::Best => (s_curve5(fx), s_curve5(fy)),
        }
    };

    // Interpolate along x on both rows, then along y
    let n0 = gradient_noise(x, y, x0, y0, seed);
    let n1 = gradient_noise(x, y, x1, y0, seed);
    let ix0 = linear(n0, n1, xs);
    let n0 = gradient_noise(x, y, x0, y1, seed);
    let n1 = gradient_noise(x, y, x1, y1, seed);
    let ix1 = linear(n0, n1, xs);
    (linear(ix0, ix1, ys) * COHERENT_NOISE_SCALE).clamp(-1.0, 1.0)
}

// Folds any value into [-2^30, 2^30] so that it can be truncated to an i32.
// Apply it to coordinates before they reach the kernel once they may grow
// without bound (octave after octave of lacunarity scaling).
#[inline]
pub fn make_int32_range(n: f64) -> f64 {
    if n >= INT32_RANGE {
        (2.0 * (n % INT32_RANGE)) - INT32_RANGE
    } else if n <= -INT32_RANGE {
        (2.0 * (n % INT32_RANGE)) + INT32_RANGE
    } else {
        n
    }
}
