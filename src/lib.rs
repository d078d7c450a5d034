#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::ddexp;
pub use maths::ddexp::{
    DoubleDouble, ExpClass, FAST_PATH_LIMIT, NEGLIGIBLE_BOUND, OVERFLOW_BOUND, UNDERFLOW_BOUND,
    VECTOR_LENGTH, classify, exp, exp_dd, exp_slice, scalar_exp, vector_exp,
};
