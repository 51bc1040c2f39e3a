use decima::{
    codec::{decode::decode, encode::encode},
    decimal::value::{Decimal, Sign},
};

fn dec(text: &str) -> Decimal {
    text.parse()
        .unwrap_or_else(|e| panic!("Failed to parse '{text}': {e}"))
}

fn assert_roundtrip(text: &str) {
    let value = dec(text);
    let bytes = encode(&value);
    let decoded = decode(&bytes);
    assert_eq!(decoded, Some(value), "decode(encode({text})) changed the value");
    assert_eq!(encode(&decoded.unwrap()),
               bytes,
               "re-encoding {text} changed the bytes");
}

#[test]
fn specials_encode_to_one_byte() {
    assert_eq!(encode(&dec("NaN")), vec![0x40]);
    assert_eq!(encode(&dec("Infinity")), vec![0x7F]);
    assert_eq!(encode(&dec("-Infinity")), vec![0xFF]);
}

#[test]
fn small_integers_encode_to_one_byte() {
    assert_eq!(encode(&dec("0")), vec![0x26]);
    assert_eq!(encode(&dec("-0")), vec![0xA6]);
    assert_eq!(encode(&dec("1")), vec![0x27]);
    assert_eq!(encode(&dec("-1")), vec![0xA7]);
    assert_eq!(encode(&dec("9")), vec![0x2F]);
    assert_eq!(encode(&dec("12")), vec![0x32]);
    assert_eq!(encode(&dec("25")), vec![0x3F]);

    // 26 through 50 move to the upper range, flagged by bit 6.
    assert_eq!(encode(&dec("26")), vec![0x66]);
    assert_eq!(encode(&dec("50")), vec![0x7E]);
    assert_eq!(encode(&dec("-50")), vec![0xFE]);
}

#[test]
fn fifty_one_needs_two_bytes() {
    assert_eq!(encode(&dec("51")), vec![0x08, 0x33]);
    assert_eq!(encode(&dec("-51")), vec![0x88, 0x33]);
}

#[test]
fn single_byte_forms_decode_back() {
    for text in ["0", "-0", "1", "-1", "9", "10", "-10", "25", "26", "49", "50", "-50"] {
        assert_roundtrip(text);
    }
}

#[test]
fn inline_exponents_pack_into_the_first_byte() {
    // 0.1 is one limb (1000000) with exponent -1.
    assert_eq!(encode(&dec("0.1")), vec![0x48, 0x40, 0x42, 0x0F]);
    // 1e30 still fits inline: field 30 + 7.
    assert_eq!(encode(&dec("1e30")), vec![0x25, 0x64]);
}

#[test]
fn large_exponents_take_trailing_bytes() {
    // 1e31 is the first exponent that needs a trailing byte.
    assert_eq!(encode(&dec("1e31")), vec![0x01, 0x1F, 0xE8, 0x03]);
    assert_roundtrip("1e31");
    assert_roundtrip("1e-31");
    assert_roundtrip("2.5e300");
    assert_roundtrip("-2.5e-300");
    assert_roundtrip("1e9000000000000000");
    assert_roundtrip("1e-9000000000000000");
}

#[test]
fn general_values_roundtrip() {
    for text in ["123.45",
                 "-123.45",
                 "0.00123",
                 "5.5",
                 "9999999",
                 "10000000",
                 "123456789012345678901234567890",
                 "3.14159265358979323846",
                 "1e100",
                 "7e-7",
                 "NaN",
                 "Infinity",
                 "-Infinity"]
    {
        assert_roundtrip(text);
    }
}

#[test]
fn all_nines_mantissa_reproduces_its_limbs() {
    let value = dec(&"9".repeat(35));
    assert_eq!(value.limbs(), &[9_999_999; 5]);

    let decoded = decode(&encode(&value)).unwrap();
    assert_eq!(decoded.limbs(), &[9_999_999; 5]);
    assert_eq!(decoded, value);
}

#[test]
fn zero_limb_runs_roundtrip_at_every_length() {
    // One, two (below the compression threshold), three and ten zero limbs.
    for zeros in [1, 2, 3, 10] {
        let text = format!("1{}0000001", "0000000".repeat(zeros));
        assert_roundtrip(&text);
    }
}

#[test]
fn nine_limb_runs_roundtrip_at_every_length() {
    for nines in [1, 2, 3, 10] {
        let text = format!("1{}0000001", "9999999".repeat(nines));
        assert_roundtrip(&text);
    }
}

#[test]
fn runs_of_two_stay_literal_in_the_bytes() {
    // Limbs [1, 0, 0, 1]: both zero limbs ride along as literal mantissa
    // digits, so the number under the first byte is R³ + 1.
    let two_zeros = dec(&format!("1{}0000001", "0000000".repeat(2)));
    assert_eq!(two_zeros.limbs(), &[1, 0, 0, 1]);
    assert_eq!(encode(&two_zeros),
               vec![0x1C, 0x09, 0x8E, 0xA4, 0x48, 0x78, 0xCF, 0xCB, 0x35, 0x36]);

    // Limbs [1, 9999999, 9999999, 1] likewise stay literal.
    let two_nines = dec(&format!("1{}0000001", "9999999".repeat(2)));
    assert_eq!(two_nines.limbs(), &[1, 9_999_999, 9_999_999, 1]);
    assert_eq!(encode(&two_nines),
               vec![0x1C, 0x83, 0x24, 0xC6, 0x69, 0x0A, 0xE9, 0x96, 0x6B, 0x6C]);
}

#[test]
fn runs_of_three_compress_to_a_marker_and_count() {
    // Limbs [1, 0, 0, 0, 1] become the digits [1, ZEROS_SIGNIFIER, 3, 1]:
    // one limb more than the literal case above, yet no extra bytes.
    let three_zeros = dec(&format!("1{}0000001", "0000000".repeat(3)));
    assert_eq!(three_zeros.limbs(), &[1, 0, 0, 0, 1]);
    assert_eq!(encode(&three_zeros),
               vec![0x23, 0x8F, 0xAB, 0x59, 0x6D, 0x0A, 0xE9, 0x96, 0x6B, 0x6C]);

    // Limbs [1, 9999999, 9999999, 9999999, 1] become [1, NINES_SIGNIFIER, 3, 1].
    let three_nines = dec(&format!("1{}0000001", "9999999".repeat(3)));
    assert_eq!(three_nines.limbs(), &[1, 9_999_999, 9_999_999, 9_999_999, 1]);
    assert_eq!(encode(&three_nines),
               vec![0x23, 0x93, 0x45, 0x36, 0x80, 0xFD, 0x43, 0x97, 0x6B, 0x6C]);
}

#[test]
fn long_zero_runs_compress() {
    // Ten all-zero limbs collapse to a marker and a count, so the encoding
    // stays far below the seventy digits it carries.
    let wide = dec(&format!("1{}0000001", "0000000".repeat(10)));
    assert!(encode(&wide).len() < 15, "run compression did not kick in");
}

#[test]
fn empty_input_decodes_to_absent() {
    assert_eq!(decode(&[]), None);
}

#[test]
fn out_of_range_exponents_decode_to_nan() {
    let magnitude: u64 = 9_000_000_000_000_001;

    let mut bytes = vec![0x07];
    bytes.extend_from_slice(&magnitude.to_le_bytes()[..7]);
    bytes.push(0x01);
    assert_eq!(decode(&bytes), Some(Decimal::NaN));

    // The same magnitude with the exponent sign bit set underflows instead.
    let mut bytes = vec![0x47];
    bytes.extend_from_slice(&magnitude.to_le_bytes()[..7]);
    bytes.push(0x01);
    assert_eq!(decode(&bytes), Some(Decimal::NaN));
}

#[test]
fn boundary_exponent_still_decodes() {
    let value = dec("1e9000000000000000");
    let decoded = decode(&encode(&value)).unwrap();
    assert_eq!(decoded.exponent(), Some(9_000_000_000_000_000));
}

#[test]
fn malformed_bytes_decode_to_nan() {
    // A single byte below the small-integer range denotes no value.
    assert_eq!(decode(&[0x00]), Some(Decimal::NaN));
    // A zeros marker with no count after it is a malformed mantissa.
    assert_eq!(decode(&[0x00, 0x80, 0x96, 0x98]), Some(Decimal::NaN));
}

#[test]
fn signs_survive_the_wire() {
    let negative_zero = decode(&encode(&dec("-0"))).unwrap();
    assert_eq!(negative_zero.sign(), Some(Sign::Negative));
    assert!(negative_zero.is_zero());

    let nan = decode(&encode(&Decimal::NaN)).unwrap();
    assert_eq!(nan.sign(), None);
}
