use pairfloat::byte_float::{byte_to_float, ByteFloat};

#[test]
fn known_codes() {
    let expected = [
        (0.0, -1.0),
        (16.0, -0.5),
        (17.0, -1.0),
        (20.0, -2.5),
        (127.0, 0.125),
        (128.0, 1.0),
        (143.0, 16.0),
        (200.0, 0.5625),
        (255.0, 0.125),
    ];
    for (code, value) in expected {
        assert_eq!(byte_to_float(code), value, "code {}", code);
    }
}

#[test]
fn out_of_range_codes_are_clamped() {
    assert_eq!(byte_to_float(300.0), 1.0);
    assert_eq!(byte_to_float(-5.0), -1.0);
    assert_eq!(byte_to_float(200.7), byte_to_float(200.0));
}

#[test]
fn mantissa_is_normalized() {
    for code in 0..256 {
        let decoded = ByteFloat::from_code(code as f32);
        assert!(
            (1.0..2.0).contains(&decoded.mantissa),
            "code {} gave mantissa {}",
            code,
            decoded.mantissa
        );
        assert!(decoded.sign == 1.0 || decoded.sign == -1.0);
    }
}
