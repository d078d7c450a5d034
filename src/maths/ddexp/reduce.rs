use super::dd::DoubleDouble;
use super::{SHIFTER, lo_word, pow2i};

/// Index width: the table holds `2^W` entries.
const W: u32 = 5;
const IDX_MASK: i32 = (1 << W) - 1;

/// log2(e) * 2^W
const LOG2_E_TIMES_32: f64 = 4.616624130844682838e1;
/// -ln(2) * 2^-W, split so that `m * hi` keeps most of the product exact.
const MINUS_LN2_OVER_32: DoubleDouble =
    DoubleDouble::new(-2.1660849392498290195e-2, -7.24702129326968612e-19);

/// `x = (E * 32 + idx) * ln(2)/32 + z`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Reduction {
    pub(crate) e: i32,
    pub(crate) idx: usize,
    pub(crate) z: f64,
}

impl Reduction {
    /// Requires `x` finite and inside the general range of the classifier.
    #[inline(always)]
    pub(crate) fn new(x: f64) -> Self {
        let t = x * LOG2_E_TIMES_32;
        let shifted = t + SHIFTER;
        let m = shifted - SHIFTER;
        let m_int = lo_word(shifted) as i32;
        let e = m_int >> W;
        let idx = (m_int & IDX_MASK) as usize;

        let rescaled = DoubleDouble::mul122(m, MINUS_LN2_OVER_32);
        let z = (x + rescaled.hi) + rescaled.lo;
        Reduction { e, idx, z }
    }

    /// `(2^E1, 2^E2)` with `E1 + E2 = E`, both representable even when `2^E`
    /// is not.
    #[inline(always)]
    pub(crate) fn scales(&self) -> (f64, f64) {
        let e1 = self.e >> 1;
        let e2 = self.e - e1;
        (pow2i(e1), pow2i(e2))
    }
}
