// Interpolation primitives shared by the kernel and the combinators.
// All of them expect the alpha value in [0, 1]; outside that range they extrapolate.

// Linear interpolation, exact at both ends
#[inline]
pub fn linear(n0: f64, n1: f64, a: f64) -> f64 {
    ((1.0 - a) * n0) + (a * n1)
}

// Cubic interpolation through four control points.
// Returns n1 at a = 0 and n2 at a = 1
#[inline]
pub fn cubic(n0: f64, n1: f64, n2: f64, n3: f64, a: f64) -> f64 {
    let p = (n3 - n2) - (n0 - n1);
    let q = (n0 - n1) - p;
    let r = n2 - n0;
    let s = n1;
    p * a * a * a + q * a * a + r * a + s
}

// Cubic S-curve 3a^2 - 2a^3
// First derivative is zero at a = 0 and a = 1
#[inline]
pub fn s_curve3(a: f64) -> f64 {
    a * a * (3.0 - 2.0 * a)
}

// Quintic S-curve 6a^5 - 15a^4 + 10a^3 (Ken Perlin's fade)
// First and second derivatives are zero at a = 0 and a = 1
#[inline]
pub fn s_curve5(a: f64) -> f64 {
    let a3 = a * a * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    (6.0 * a5) - (15.0 * a4) + (10.0 * a3)
}
