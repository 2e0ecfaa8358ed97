/// Half-width of the exponent code range. An exponent bucket `l` is stored as `l + EXPONENT_BIAS`.
pub const EXPONENT_BIAS: i32 = 31;

/// Number of quantization steps for one sign of the mantissa ratio.
pub const MANTISSA_STEPS: i32 = 511;

pub const MAX_EXPONENT_CODE: i32 = 2 * EXPONENT_BIAS;
pub const MAX_MANTISSA_CODE: i32 = 2 * MANTISSA_STEPS;

/// Mantissa code carrying a ratio of exactly zero
pub const ZERO_MANTISSA_CODE: i32 = MANTISSA_STEPS;

/// Only used to decide whether the exponent code hit the bottom of its range
pub const EPS: f32 = 1.0e-20;

// Byte float layout: 1 sign, 3 exponent and 4 mantissa bits
pub const BYTE_EXPONENT_BITS: u32 = 3;
pub const BYTE_MANTISSA_BITS: u32 = 4;
pub const BYTE_MANTISSA_SIZE: f32 = (1 << BYTE_MANTISSA_BITS) as f32;
pub const BYTE_SIGN_PIVOT: f32 = 127.0;
pub const BYTE_HALF_RANGE: f32 = (1 << (BYTE_EXPONENT_BITS + BYTE_MANTISSA_BITS)) as f32;

/// Number of inputs the verification harness walks by default (i = 0..65535)
pub const DEFAULT_HARNESS_COUNT: u32 = 1 << 16;
