// Architecture-specific fast-path kernels (compile-time selected).

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86;

use super::vector::exp_fast_lane;

/// Fast path over lanes already checked against the fast-path limit.
#[inline(always)]
pub(crate) fn exp_fast_lanes(xs: &[f64], ys: &mut [f64]) {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    {
        let mut x_chunks = xs.chunks_exact(4);
        let mut y_chunks = ys.chunks_exact_mut(4);
        for (x, y) in (&mut x_chunks).zip(&mut y_chunks) {
            // Safety: compiled with AVX2 enabled; both chunks hold 4 lanes.
            unsafe { x86::exp_fast_avx2(x, y) }
        }
        exp_fast_portable(x_chunks.remainder(), y_chunks.into_remainder());
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
    exp_fast_portable(xs, ys);
}

#[inline(always)]
fn exp_fast_portable(xs: &[f64], ys: &mut [f64]) {
    for (y, &x) in ys.iter_mut().zip(xs) {
        *y = exp_fast_lane(x);
    }
}
