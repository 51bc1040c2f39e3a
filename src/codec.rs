use crate::decimal::value::BASE;

/// Base conversion between mantissa digits and bytes.
///
/// The mantissa travels as one big number written in base `RADIX` on the
/// decimal side and base 256 on the wire. This module holds the two
/// multiply-accumulate loops that convert between them over little-endian
/// byte buffers.
///
/// # Responsibilities
/// - Folds mantissa digits into a little-endian byte accumulator.
/// - Unfolds wire bytes back into base-`RADIX` digits.
pub mod baseconv;
/// Reconstruction of decimals from wire bytes.
///
/// Decoding is total: every byte string maps to a decimal, to `NaN` for
/// byte patterns the encoder cannot produce, or to the absent value for the
/// empty string.
///
/// # Responsibilities
/// - Recognizes the reserved single bytes and small-integer forms.
/// - Unpacks the exponent and validates it against the supported range.
/// - Expands run-length markers back into mantissa limbs.
pub mod decode;
/// Serialization of decimals into wire bytes.
///
/// Produces the shortest form available: one reserved byte for specials,
/// one byte for small integers, and otherwise a first byte describing sign
/// and exponent, optional exponent bytes, and the base-converted mantissa
/// with zero and nine runs compressed.
///
/// # Responsibilities
/// - Picks between the single-byte and general layouts.
/// - Packs the exponent inline or as trailing little-endian bytes.
/// - Tokenizes mantissa runs before base conversion.
pub mod encode;

/// The base the mantissa digits are written in on the decimal side.
///
/// Two values above [`BASE`] are reserved so a digit can also be a
/// run-length marker.
pub const RADIX: u32 = BASE + 2;
/// Marks a run of all-zero limbs; the next digit is the repeat count.
pub const ZEROS_SIGNIFIER: u32 = BASE;
/// Marks a run of all-nine limbs; the next digit is the repeat count.
pub const NINES_SIGNIFIER: u32 = BASE + 1;

/// The single byte encoding `NaN`.
pub const NAN_BYTE: u8 = 0b0100_0000;
/// The single byte encoding positive infinity.
pub const POSITIVE_INFINITY_BYTE: u8 = 0b0111_1111;
/// The single byte encoding negative infinity.
pub const NEGATIVE_INFINITY_BYTE: u8 = 0b1111_1111;

/// First-byte bit: the value is negative.
pub const SIGN_BIT: u8 = 0x80;
/// First-byte bit: the exponent is negative, or (in the single-byte form)
/// the small integer lies in the upper range.
pub const EXPONENT_SIGN_BIT: u8 = 0x40;
/// Mask for the six-bit field in the first byte.
pub const FIELD_MASK: u8 = 0x3F;

/// Field values above this bias encode the exponent magnitude inline.
pub const EXPONENT_BIAS: u8 = 7;
/// The largest exponent magnitude the first byte can carry inline.
pub const INLINE_EXPONENT_MAX: u64 = 30;
/// Bias of the single-byte form for small integers in `[0, 25]`.
pub const SMALL_INT_BIAS: u8 = 38;
/// Bias of the single-byte form for small integers in `[26, 50]`.
pub const SMALL_INT_HIGH_BIAS: u8 = 12;
/// The largest value of the lower single-byte range.
pub const SMALL_INT_SPLIT: u32 = 25;
/// The largest integer the single-byte form can carry.
pub const SMALL_INT_MAX: u32 = 50;
