pub const RADIX: u32 = 10;

pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9'
];

pub const MAX_CONSTANT: usize = 16;

/// Below this many digits (in either operand) `MulStrategy::Auto` uses the grade-school algorithm.
pub const KARATSUBA_THRESHOLD: usize = 48;

/// At or above this many digits (in both operands) `MulStrategy::Auto` uses the complex transform.
pub const FFT_THRESHOLD: usize = 1536;

/// Longest operand, in digits, handed to the complex transform.
///
/// Every convolution coefficient is at most `81 * len`, and the transform length is
/// at most `4 * len`. With directly computed twiddle factors the accumulated error of
/// a double-precision radix-2 transform stays far below `FFT_ROUNDING_MARGIN` up to
/// this size. Longer operands are multiplied with Karatsuba.
pub const FFT_MAX_DIGITS: usize = 1 << 18;

/// Largest distance from the nearest integer an inverse-transform coefficient may have
/// before the product is recomputed with Karatsuba.
///
/// This only catches drift early. An error above one half rounds to the wrong integer
/// and may still pass, so exactness comes from `FFT_MAX_DIGITS`.
pub const FFT_ROUNDING_MARGIN: f64 = 0.25;
