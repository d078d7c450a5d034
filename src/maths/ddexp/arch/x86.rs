use core::arch::x86_64::{
    _mm256_add_epi64, _mm256_add_pd, _mm256_castsi256_pd, _mm256_cvtepi32_epi64,
    _mm256_cvttpd_epi32, _mm256_loadu_pd, _mm256_mul_pd, _mm256_set1_epi64x, _mm256_set1_pd,
    _mm256_slli_epi64, _mm256_storeu_pd, _mm256_sub_pd,
};

use super::super::SHIFTER;
use super::super::poly::FAST_COEFFS;
use super::super::vector::{LOG_2_HI, LOG_2_LO, LOG2_E};

/// Four lanes of the fast path, operation for operation the same as the
/// scalar lane kernel (no FMA), so the results are bit-identical.
///
/// # Safety
///
/// AVX2 must be available, `xs` and `ys` must hold at least 4 elements and
/// every lane must satisfy `|x| < 700`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn exp_fast_avx2(xs: &[f64], ys: &mut [f64]) {
    debug_assert!(xs.len() >= 4 && ys.len() >= 4);
    unsafe {
        let x = _mm256_loadu_pd(xs.as_ptr());
        let shifter = _mm256_set1_pd(SHIFTER);
        let shifted = _mm256_add_pd(_mm256_mul_pd(x, _mm256_set1_pd(LOG2_E)), shifter);
        let e_double = _mm256_sub_pd(shifted, shifter);
        let t = _mm256_sub_pd(x, _mm256_mul_pd(e_double, _mm256_set1_pd(LOG_2_HI)));
        let r = _mm256_sub_pd(t, _mm256_mul_pd(e_double, _mm256_set1_pd(LOG_2_LO)));

        let mut p = _mm256_set1_pd(FAST_COEFFS[10]);
        for &c in FAST_COEFFS[..10].iter().rev() {
            p = _mm256_add_pd(_mm256_set1_pd(c), _mm256_mul_pd(p, r));
        }

        // 2^E via the exponent field, E + 1023 is in range for |x| < 700
        let e = _mm256_cvtepi32_epi64(_mm256_cvttpd_epi32(e_double));
        let biased = _mm256_add_epi64(e, _mm256_set1_epi64x(1023));
        let two_e = _mm256_castsi256_pd(_mm256_slli_epi64::<52>(biased));

        _mm256_storeu_pd(ys.as_mut_ptr(), _mm256_mul_pd(two_e, p));
    }
}
