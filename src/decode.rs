/// 2^64, used to lift subnormals into the normal range before reading their exponent
const SUBNORMAL_SCALE: f32 = 18446744073709551616.0;
const SUBNORMAL_SHIFT: i32 = 64;

pub fn exponent_field_f32(f: f32) -> u32 {
    (f.to_bits() >> 23) & 0xff
}

/// Splits `f` into a mantissa in [1, 2) (carrying the sign of `f`) and its unbiased exponent.
pub fn integer_decode_f32(f: f32) -> (f32, i32) {
    let bits = f.to_bits();
    let mut exponent = exponent_field_f32(f) as i32;
    let mantissa = f32::from_bits((bits & 0x807fffff) | 0x3f800000);
    // Exponent bias
    exponent -= 127;
    (mantissa, exponent)
}

/// The smallest integer `l` such that `2^l >= magnitude`, read straight from the bit layout so
/// that values just above a power of two never round onto it.
///
/// `magnitude` is expected to be positive and finite. Zero yields a value below every real
/// bucket rather than panicking.
pub fn ceil_log2(magnitude: f32) -> i32 {
    let (normalized, shift) = if exponent_field_f32(magnitude) == 0 {
        (magnitude * SUBNORMAL_SCALE, SUBNORMAL_SHIFT)
    } else {
        (magnitude, 0)
    };
    let (mantissa, exponent) = integer_decode_f32(normalized);
    let bucket = if mantissa.abs() == 1.0 {
        exponent
    } else {
        exponent + 1
    };
    bucket - shift
}
