use core::hint::black_box;

use super::classify::{ExpClass, classify};
use super::dd::DoubleDouble;
use super::poly::exp_poly_dd;
use super::reduce::Reduction;
use super::table::two_power_index;

const TWO_M600: f64 = f64::from_bits(0x1a70_0000_0000_0000);
const TWO_600: f64 = f64::from_bits(0x6570_0000_0000_0000);

/// Result for every class but `General`.
#[inline(always)]
fn closed_form(class: ExpClass, x: f64) -> Option<f64> {
    match class {
        // keeps the payload of a NaN input
        ExpClass::Nan => Some(1.0 + x),
        ExpClass::NegInf => Some(0.0),
        ExpClass::PosInf => Some(x),
        // multiplied at run time so the underflow/overflow really happens
        ExpClass::Underflow => Some(black_box(TWO_M600) * TWO_M600),
        ExpClass::Overflow => Some(black_box(TWO_600) * TWO_600),
        ExpClass::Negligible => Some(1.0 + x),
        ExpClass::General => None,
    }
}

#[inline(always)]
fn exp_general(x: f64) -> DoubleDouble {
    let red = Reduction::new(x);
    let poly = exp_poly_dd(red.z);
    let table_times_poly = DoubleDouble::mul22(two_power_index(red.idx), poly);

    // 2^E1 first, then 2^E2: the intermediate stays finite near the extremes
    let (two_e1, two_e2) = red.scales();
    DoubleDouble::new(
        two_e2 * (two_e1 * table_times_poly.hi),
        two_e2 * (two_e1 * table_times_poly.lo),
    )
}

/// Double precision `exp(x)` with an error below 4 ulp.
///
/// NaN propagates as `1.0 + x`, `exp(-Inf)` is `+0`, arguments at or below
/// -746 give exactly `+0` and arguments at or above 711 give `+Inf`.
#[inline]
pub fn scalar_exp(x: f64) -> f64 {
    match closed_form(classify(x), x) {
        Some(y) => y,
        None => exp_general(x).to_f64(),
    }
}

/// `exp(x)` as an unevaluated sum `hi + lo`. For arguments with a closed-form
/// result the low word is zero.
#[inline]
pub fn exp_dd(x: f64) -> DoubleDouble {
    match closed_form(classify(x), x) {
        Some(y) => DoubleDouble::from_f64(y),
        None => exp_general(x),
    }
}
