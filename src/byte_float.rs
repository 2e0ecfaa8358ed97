//! An alternative 8-bit sign/exponent/mantissa decoding, independent of the pair codec in
//! [`crate::codec`].
//!
//! Codes 0..=126 decode to negative values, 127..=255 to positive ones. Within a sign, the upper
//! 3 bits of the code are a power of one half and the lower 4 bits a mantissa offset, which is
//! renormalized into [1, 2) before scaling.

use crate::consts::{BYTE_HALF_RANGE, BYTE_MANTISSA_SIZE, BYTE_SIGN_PIVOT};
use crate::utility::{clamp, sgn};
use tracing::trace;

/// Sign, exponent and mantissa of a decoded byte
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByteFloat {
    pub sign: f32,
    pub exponent: f32,
    pub mantissa: f32,
}

impl ByteFloat {
    pub fn from_code(code: f32) -> Self {
        let code = clamp(code.floor(), 0.0, 2.0 * BYTE_HALF_RANGE);
        let sign = if sgn(code - BYTE_SIGN_PIVOT) < 0.0 {
            -1.0
        } else {
            1.0
        };
        let code = code % BYTE_HALF_RANGE;
        let mut exponent = (code / BYTE_MANTISSA_SIZE).floor();
        let mut mantissa = code % BYTE_MANTISSA_SIZE + 1.0;

        let shift = mantissa.log2().floor();
        exponent -= shift;
        mantissa /= shift.exp2();
        ByteFloat {
            sign,
            exponent,
            mantissa,
        }
    }

    pub fn value(&self) -> f32 {
        self.sign * 0.5_f32.powf(self.exponent) * self.mantissa
    }
}

/// Decodes a byte code (given as a float, floored and clamped to [0, 256]) into its value.
pub fn byte_to_float(code: f32) -> f32 {
    let decoded = ByteFloat::from_code(code);
    let value = decoded.value();
    trace!(
        "i: {}, e: {}, m: {}: {}",
        code,
        decoded.exponent,
        decoded.mantissa,
        value
    );
    value
}
