//! Bezier evaluation by repeated linear interpolation (de Casteljau).
//!
//! Control polygons are fixed-size arrays: a degree `d` curve has `d + 1`
//! points, and the array passed by value is the only scratch buffer.

use kurbo::{CubicBez, Point};

/// Point on the Bezier curve with control polygon `v` at parameter `t`.
pub fn eval<const N: usize>(mut v: [Point; N], t: f64) -> Point {
    for pass in 1..N {
        for j in 0..N - pass {
            v[j] = v[j].lerp(v[j + 1], t);
        }
    }
    v[0]
}

/// Control polygon of the derivative of a degree `M` curve.
///
/// The input holds `N = M + 1` points; any other pairing fails to build.
/// Within the crate it only runs down the cubic chain `4 -> 3 -> 2`. The
/// derivative polygon holds the scaled forward differences
/// `M * (v[i + 1] - v[i])`, stored as points so they can be fed back
/// into [`eval`].
pub(crate) fn derivative<const N: usize, const M: usize>(v: &[Point; N]) -> [Point; M] {
    let () = OneFewer::<N, M>::HOLDS;
    let degree = M as f64;
    std::array::from_fn(|i| ((v[i + 1] - v[i]) * degree).to_point())
}

struct OneFewer<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> OneFewer<N, M> {
    const HOLDS: () = assert!(N == M + 1, "derivative polygon must have one point fewer");
}

/// Control polygon of a cubic segment.
#[inline]
pub fn control_points(c: &CubicBez) -> [Point; 4] {
    [c.p0, c.p1, c.p2, c.p3]
}

/// Point on a cubic segment at `t`.
#[inline]
pub fn eval_cubic(c: &CubicBez, t: f64) -> Point {
    eval(control_points(c), t)
}
