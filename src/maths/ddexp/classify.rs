use super::f64_to_bits;

/// At or below this, `exp` underflows to +0 whatever the rounding.
pub const UNDERFLOW_BOUND: f64 = -746.0;
/// At or above this, `exp` overflows to +Inf.
pub const OVERFLOW_BOUND: f64 = 711.0;
/// 0.75 * 2^-26: below this `1 + x` is within 2^-53 of `exp(x)`.
pub const NEGLIGIBLE_BOUND: f64 = 1.11758708953857421875e-8;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffffu64;
const INF_BITS: u64 = 0x7ff0_0000_0000_0000u64;
const NEGLIGIBLE_BITS: u64 = NEGLIGIBLE_BOUND.to_bits();

/// Routing of an `exp` argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExpClass {
    Nan,
    PosInf,
    NegInf,
    /// `x <= -746`
    Underflow,
    /// `x >= 711`
    Overflow,
    /// `|x| <= 0.75 * 2^-26`
    Negligible,
    /// Finite, in `(-746, 711)` and not negligible: needs range reduction.
    General,
}

/// Classifies `x` for the scalar exponential. The checks run in the order of
/// the variants; every class but `General` has a closed-form result.
#[inline(always)]
pub fn classify(x: f64) -> ExpClass {
    let ux = f64_to_bits(x);
    let ax = ux & ABS_MASK;
    if ax >= INF_BITS {
        if ax == INF_BITS {
            return if (ux >> 63) != 0 {
                ExpClass::NegInf
            } else {
                ExpClass::PosInf
            };
        }
        return ExpClass::Nan;
    }
    if x <= UNDERFLOW_BOUND {
        return ExpClass::Underflow;
    }
    if x >= OVERFLOW_BOUND {
        return ExpClass::Overflow;
    }
    // magnitude order matches bit order for non-negative finite patterns
    if ax <= NEGLIGIBLE_BITS {
        return ExpClass::Negligible;
    }
    ExpClass::General
}
