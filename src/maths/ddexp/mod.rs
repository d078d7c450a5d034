//! Double-double exponential.
//!
//! The scalar path is table driven: the argument is classified on its bit
//! pattern, reduced to `x = (32 E + idx) * ln(2)/32 + z`, `exp(z)` is
//! evaluated as a double-double by a degree-6 minimax polynomial, multiplied
//! by the tabulated `2^(idx/32)` and finally rescaled by `2^E` in two halves.
//! The batch path trades the double-double machinery for a degree-10
//! polynomial when every lane is comfortably inside the finite range, and
//! falls back to the scalar path for the whole batch otherwise.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod arch;
mod classify;
mod dd;
mod exp;
mod poly;
mod reduce;
mod table;
mod vector;

pub use classify::{ExpClass, NEGLIGIBLE_BOUND, OVERFLOW_BOUND, UNDERFLOW_BOUND, classify};
pub use dd::DoubleDouble;
pub use exp::{exp_dd, scalar_exp, scalar_exp as exp};
pub use vector::{FAST_PATH_LIMIT, VECTOR_LENGTH, exp_slice, vector_exp};

/// 2^52 + 2^51: adding it rounds to the nearest integer (ties to even) and
/// leaves that integer in the low mantissa bits.
pub(crate) const SHIFTER: f64 = 6755399441055744.0;

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn lo_word(x: f64) -> u32 {
    (f64_to_bits(x) & 0xffff_ffffu64) as u32
}

/// 2^e built directly in the exponent field. Only valid for
/// `-1022 <= e <= 1023`.
#[inline(always)]
fn pow2i(e: i32) -> f64 {
    f64_from_bits(((e + 1023) as u64) << 52)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow2i() {
        for e in [-1022, -600, -1, 0, 1, 52, 600, 1023] {
            assert_eq!(pow2i(e), 2.0f64.powi(e), "pow2i({e}) failed");
        }
    }

    #[test]
    fn test_shifter_rounds_to_nearest_even() {
        let cases = [
            (0.5, 0i32),
            (1.5, 2),
            (2.5, 2),
            (-0.5, 0),
            (-1.5, -2),
            (-2.5, -2),
            (3.49, 3),
            (-3.51, -4),
            (12345.75, 12346),
        ];
        for &(t, expected) in &cases {
            let shifted = t + SHIFTER;
            assert_eq!(lo_word(shifted) as i32, expected, "shifter({t}) bits");
            assert_eq!(shifted - SHIFTER, expected as f64, "shifter({t}) value");
        }
    }
}
