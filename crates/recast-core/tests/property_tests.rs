//! Property-based tests for conversion invariants.
//!
//! These tests verify properties that should always hold:
//! - Render then parse is the identity for every base
//! - Padding never changes the parsed value when the parse can skip it
//! - A failure never leaks a partial value
//! - Reusing one configuration never changes results

use proptest::prelude::*;

use recast_core::prelude::*;

fn any_base() -> impl Strategy<Value = Base> {
    prop_oneof![Just(Base::Dec), Just(Base::Hex), Just(Base::Oct)]
}

fn any_case() -> impl Strategy<Value = Case> {
    prop_oneof![Just(Case::Lower), Just(Case::Upper)]
}

proptest! {
    #[test]
    fn round_trip_i64(n in any::<i64>(), base in any_base(), case in any_case(), show in any::<bool>()) {
        let fmt = Format::builder()
            .base(base)
            .case(case)
            .show_base(show)
            .build();
        let text = render_int(n, &fmt);
        prop_assert_eq!(parse_int::<i64>(&text, &fmt), Converted::Success(n));
    }

    #[test]
    fn round_trip_u64(n in any::<u64>(), base in any_base()) {
        let fmt = Format::builder().base(base).build();
        let text = render_int(n, &fmt);
        prop_assert_eq!(parse_int::<u64>(&text, &fmt), Converted::Success(n));
    }

    #[test]
    fn round_trip_narrow_types(n in any::<i8>(), base in any_base()) {
        let fmt = Format::builder().base(base).build();
        let text = render_int(n, &fmt);
        prop_assert_eq!(parse_int::<i8>(&text, &fmt), Converted::Success(n));
    }

    #[test]
    fn left_padding_is_absorbed_by_whitespace_skip(
        n in any::<i32>(),
        base in any_base(),
        width in 0usize..20,
    ) {
        let fmt = Format::builder()
            .base(base)
            .width(width)
            .skip_whitespace(true)
            .build();
        let text = render_int(n, &fmt);
        prop_assert!(text.chars().count() >= width);
        prop_assert_eq!(parse_int::<i32>(&text, &fmt), Converted::Success(n));
    }

    #[test]
    fn right_padding_is_trailing_whitespace(
        n in any::<i32>(),
        width in 0usize..20,
    ) {
        // Space fill on the left-adjusted side lands after the numeral,
        // and trailing whitespace is tolerated.
        let fmt = Format::builder()
            .width(width)
            .adjustment(Adjustment::Left)
            .build();
        let text = render_int(n, &fmt);
        prop_assert_eq!(parse_int::<i32>(&text, &fmt), Converted::Success(n));
    }

    #[test]
    fn wider_type_agrees_with_narrow_success(n in any::<i16>()) {
        let fmt = Format::new();
        let text = render_int(n, &fmt);
        let wide = parse_int::<i64>(&text, &fmt);
        prop_assert_eq!(wide, Converted::Success(i64::from(n)));
    }

    #[test]
    fn out_of_range_is_overflow_not_garbage(n in 128i64..=1_000_000) {
        let fmt = Format::new();
        let text = render_int(n, &fmt);
        prop_assert_eq!(
            parse_int::<i8>(&text, &fmt).failure_kind(),
            Some(FailureKind::Overflow)
        );
    }

    #[test]
    fn value_or_matches_value(n in any::<i64>(), junk in "[a-z ]{1,8}") {
        let fmt = Format::new();
        let good = parse_int::<i64>(&render_int(n, &fmt), &fmt);
        prop_assert_eq!(good.value_or(0), good.value().unwrap());

        let bad = parse_int::<i64>(&junk, &fmt);
        prop_assert!(bad.is_failure());
        prop_assert_eq!(bad.value_or(-1), -1);
        prop_assert!(bad.value().is_err());
    }

    #[test]
    fn repeated_calls_are_identical(n in any::<i64>(), base in any_base()) {
        let cnv = Converter::with_format(Format::builder().base(base).width(6).build());
        let first = cnv.to_text(n).value_or_else(|_| String::new());
        let second = cnv.to_text(n).value_or_else(|_| String::new());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(cnv.to_int::<i64>(&first), cnv.to_int::<i64>(&second));
    }
}
