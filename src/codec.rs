//! A lossy two-component code for single precision values.
//!
//! A value `v` is split into an exponent bucket `l = ceil(log2(|v|))` and the ratio `|v| / 2^l`,
//! which lies in (0.5, 1]. The bucket is stored offset by [`EXPONENT_BIAS`] and saturates at
//! both ends of `[0, 62]`. The ratio is stretched onto (0, 1], signed, and quantized into
//! [`MANTISSA_STEPS`] steps on each side of the neutral code 511, giving a mantissa code in
//! `[0, 1022]`.
//!
//! The bottom exponent code is special: there the ratio is quantized linearly without the
//! stretch, which is also the path an exact zero takes.
//!
//! Nothing here can fail. Out of range magnitudes saturate, and non-finite inputs produce
//! unspecified codes.

use crate::consts::{
    EPS, EXPONENT_BIAS, MANTISSA_STEPS, MAX_EXPONENT_CODE, MAX_MANTISSA_CODE, ZERO_MANTISSA_CODE,
};
use crate::decode::ceil_log2;
use crate::utility::{clamp, sgn};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The (x, y) code of a value. Both components are integral when produced by [`decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodePair {
    /// Exponent code `x` in `[0, 62]`
    pub exponent: f32,
    /// Mantissa code `y` in `[0, 1022]`
    pub mantissa: f32,
}

impl CodePair {
    pub fn new(exponent: f32, mantissa: f32) -> Self {
        CodePair { exponent, mantissa }
    }

    /// Drops any fractional part of both components.
    pub fn floor(&self) -> Self {
        CodePair {
            exponent: self.exponent.floor(),
            mantissa: self.mantissa.floor(),
        }
    }

    pub fn exponent_code(&self) -> u8 {
        clamp(self.exponent, 0.0, MAX_EXPONENT_CODE as f32) as u8
    }

    pub fn mantissa_code(&self) -> u16 {
        clamp(self.mantissa, 0.0, MAX_MANTISSA_CODE as f32) as u16
    }

    /// Whether the exponent sits in the bottom (linearly quantized) bucket
    pub fn is_low_saturated(&self) -> bool {
        self.exponent == 0.0
    }

    /// Whether the mantissa code carries a zero ratio
    pub fn is_neutral(&self) -> bool {
        self.mantissa == ZERO_MANTISSA_CODE as f32
    }

    pub fn compose(&self) -> f32 {
        compose(self.exponent, self.mantissa)
    }
}

/// Encodes `value` into its code pair.
pub fn decompose(value: f32) -> CodePair {
    let magnitude = value.abs();
    let bucket = if magnitude == 0.0 {
        -EXPONENT_BIAS
    } else {
        ceil_log2(magnitude)
    };
    let exponent = clamp(bucket + EXPONENT_BIAS, 0, MAX_EXPONENT_CODE) as f32;

    // Scaling by a power of two is exact in f64 for every f32 bucket
    let ratio = f64::from(magnitude) * 2.0_f64.powi(-bucket);
    let steps = f64::from(MANTISSA_STEPS);
    let raw_ratio = if exponent <= EPS {
        sgn(f64::from(value)) * (ratio * steps).floor()
    } else {
        sgn(f64::from(value)) * ((ratio * 2.0 - 1.0) * steps).floor()
    };
    let mantissa = clamp(raw_ratio + steps, 0.0, f64::from(MAX_MANTISSA_CODE)) as f32;

    trace!(
        "decompose {} -> bucket {}, raw ratio {}, code ({}, {})",
        value,
        bucket,
        raw_ratio,
        exponent,
        mantissa
    );
    CodePair { exponent, mantissa }
}

/// Reconstructs an approximation of the value behind the code `(exponent, mantissa)`.
///
/// Fractional codes are not rejected, they simply go through the same arithmetic.
pub fn compose(exponent: f32, mantissa: f32) -> f32 {
    let bucket = exponent - EXPONENT_BIAS as f32;
    let steps = MANTISSA_STEPS as f32;
    let code_value = (mantissa - steps) / steps;
    let ratio = if exponent != 0.0 {
        // Undo the (0.5, 1] -> (0, 1] stretch applied outside the bottom bucket
        sgn(code_value) * ((code_value.abs() + 1.0) * 0.5)
    } else {
        code_value
    };
    (f64::from(bucket).exp2() * f64::from(ratio)) as f32
}
