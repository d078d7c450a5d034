use super::arch::exp_fast_lanes;
use super::exp::scalar_exp;
use super::poly::exp_poly_fast;
use super::{SHIFTER, f64_from_bits, f64_to_bits, pow2i};

/// Default batch width.
pub const VECTOR_LENGTH: usize = 4;

/// Every lane of a batch must satisfy `|x| < FAST_PATH_LIMIT` for the fast
/// path. Deliberately tighter than the scalar under/overflow bounds.
pub const FAST_PATH_LIMIT: f64 = 700.0;

pub(crate) const LOG2_E: f64 = 1.442695040888963407359924681001892137426645954153;
// LOG_2_HI has enough trailing zero bits that e * LOG_2_HI is exact for |e| < 2^11
pub(crate) const LOG_2_HI: f64 = 0.693147180559890330187045037746429443359375;
pub(crate) const LOG_2_LO: f64 = 5.4979230187083711552420206887059365096458163346682e-14;

#[inline(always)]
fn fast_path_ok(x: f64) -> bool {
    // false for NaN
    f64_from_bits(f64_to_bits(x) & 0x7fff_ffff_ffff_ffffu64) < FAST_PATH_LIMIT
}

/// One lane of the fast path. Requires `|x| < FAST_PATH_LIMIT`.
#[inline(always)]
pub(crate) fn exp_fast_lane(x: f64) -> f64 {
    let shifted = x * LOG2_E + SHIFTER;
    let e_double = shifted - SHIFTER;
    let e = e_double as i32;
    // exact by Sterbenz
    let t = x - e_double * LOG_2_HI;
    let r = t - e_double * LOG_2_LO;
    pow2i(e) * exp_poly_fast(r)
}

/// Fast path if every lane qualifies, otherwise the scalar path on every lane.
#[inline(always)]
fn exp_batch(xs: &[f64], ys: &mut [f64]) {
    let okay_slots = xs.iter().filter(|&&x| fast_path_ok(x)).count();
    if okay_slots != xs.len() {
        for (y, &x) in ys.iter_mut().zip(xs) {
            *y = scalar_exp(x);
        }
        return;
    }
    exp_fast_lanes(xs, ys);
}

/// Lane-wise `exp` over a fixed-width batch.
///
/// Each lane carries the same accuracy contract as [`scalar_exp`]. When any
/// lane is NaN, infinite or has `|x| >= FAST_PATH_LIMIT`, the whole batch is
/// computed by [`scalar_exp`] and the result is bit-identical to calling it
/// lane by lane.
#[inline]
pub fn vector_exp<const N: usize>(xs: &[f64; N]) -> [f64; N] {
    let mut ys = [0.0; N];
    exp_batch(xs, &mut ys);
    ys
}

/// `ys[i] = exp(xs[i])`, in batches of [`VECTOR_LENGTH`] with a scalar tail.
///
/// # Panics
///
/// Panics if the two slices have different lengths.
pub fn exp_slice(xs: &[f64], ys: &mut [f64]) {
    assert_eq!(
        xs.len(),
        ys.len(),
        "exp_slice: input and output lengths differ"
    );
    let mut x_chunks = xs.chunks_exact(VECTOR_LENGTH);
    let mut y_chunks = ys.chunks_exact_mut(VECTOR_LENGTH);
    for (x, y) in (&mut x_chunks).zip(&mut y_chunks) {
        exp_batch(x, y);
    }
    for (y, &x) in y_chunks.into_remainder().iter_mut().zip(x_chunks.remainder()) {
        *y = scalar_exp(x);
    }
}
