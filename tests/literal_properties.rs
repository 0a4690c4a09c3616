use proptest::prelude::*;
use sqlvalue::expression::compare_values;
use sqlvalue::literal::{
    convert, pack_bits, pack_hex, validate_bits, validate_hex, ErrorCategory, LiteralToken,
};
use sqlvalue::value::ScalarValue;
use std::cmp::Ordering;

fn bit_digits() -> impl Strategy<Value = String> {
    "[01]{0,64}"
}

fn hex_digits() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..32)
        .prop_map(|bytes| bytes.iter().map(|b| format!("{b:02x}")).collect())
}

fn binary_value() -> impl Strategy<Value = ScalarValue> {
    prop::collection::vec(any::<u8>(), 0..6).prop_map(ScalarValue::binary)
}

proptest! {
    #[test]
    fn packed_bits_keep_every_digit(digits in bit_digits()) {
        let packed = pack_bits(&digits);
        prop_assert_eq!(packed.len(), digits.len().div_ceil(8));

        let rendered: String = packed.iter().map(|b| format!("{b:08b}")).collect();
        let padding = rendered.len() - digits.len();
        prop_assert!(rendered[..padding].chars().all(|c| c == '0'));
        prop_assert_eq!(&rendered[padding..], digits.as_str());
    }

    #[test]
    fn packed_hex_is_half_length_and_case_insensitive(digits in hex_digits()) {
        let lower = pack_hex(&digits);
        prop_assert_eq!(lower.len(), digits.len() / 2);
        prop_assert_eq!(lower, pack_hex(&digits.to_ascii_uppercase()));
    }

    #[test]
    fn bit_validation_rejects_other_characters(
        prefix in bit_digits(),
        bad in "[2-9a-zA-Z ]",
        suffix in bit_digits(),
    ) {
        let raw = format!("{prefix}{bad}{suffix}");
        let err = validate_bits(&raw).unwrap_err();
        prop_assert_eq!(err.category(), ErrorCategory::SyntaxViolation);
    }

    #[test]
    fn hex_validation_rejects_odd_lengths(digits in hex_digits(), extra in "[0-9a-fA-F]") {
        let raw = format!("{digits}{extra}");
        let err = validate_hex(&raw).unwrap_err();
        prop_assert_eq!(err.category(), ErrorCategory::SyntaxViolation);
        prop_assert!(err.to_string().contains("even number of digits"));
    }

    #[test]
    fn national_strings_are_never_converted(text in ".*") {
        let err = convert(&LiteralToken::national(text)).unwrap_err();
        prop_assert_eq!(err.category(), ErrorCategory::UnsupportedConstruct);
    }

    #[test]
    fn binary_comparison_is_a_total_order(
        a in binary_value(),
        b in binary_value(),
        c in binary_value(),
    ) {
        let cmp = |l: &ScalarValue, r: &ScalarValue| compare_values(l, r).unwrap().unwrap();

        prop_assert_eq!(cmp(&a, &b), cmp(&b, &a).reverse());
        prop_assert_eq!(cmp(&a, &a), Ordering::Equal);
        if cmp(&a, &b) != Ordering::Greater && cmp(&b, &c) != Ordering::Greater {
            prop_assert_ne!(cmp(&a, &c), Ordering::Greater);
        }
    }
}
