//! Numeric literal evaluation and console-style number rendering.
#![allow(clippy::approx_constant)]

use primitives_core::{format_number, parse_literal, Literal, LiteralKind, PrimitiveError};

// ============================================================================
// parse_literal
// ============================================================================

#[test]
fn decimal_literal() {
    let lit = parse_literal("987").unwrap();
    assert_eq!(lit.value, 987.0);
    assert_eq!(lit.kind, LiteralKind::Decimal);
}

#[test]
fn decimal_with_fraction() {
    assert_eq!(parse_literal("3.14").unwrap().value, 3.14);
    assert_eq!(parse_literal(".5").unwrap().value, 0.5);
    assert_eq!(parse_literal("5.").unwrap().value, 5.0);
    assert_eq!(parse_literal("0.25").unwrap().kind, LiteralKind::Decimal);
}

#[test]
fn hex_literal() {
    let lit = parse_literal("0xCAFE").unwrap();
    assert_eq!(lit.value, 51966.0);
    assert_eq!(lit.kind, LiteralKind::Hexadecimal);
    assert_eq!(parse_literal("0Xcafe").unwrap().value, 51966.0);
}

#[test]
fn octal_literal_needs_explicit_prefix() {
    let lit = parse_literal("0o100").unwrap();
    assert_eq!(lit.value, 64.0);
    assert_eq!(lit.kind, LiteralKind::Octal);
    assert_eq!(parse_literal("0O17").unwrap().value, 15.0);
}

#[test]
fn binary_literal() {
    let lit = parse_literal("0b100101").unwrap();
    assert_eq!(lit.value, 37.0);
    assert_eq!(lit.kind, LiteralKind::Binary);
}

#[test]
fn scientific_literals() {
    let c = parse_literal("2.99E8").unwrap();
    assert_eq!(c.value, 299_000_000.0);
    assert_eq!(c.kind, LiteralKind::Scientific);

    let h = parse_literal("6.62607004e-34").unwrap();
    assert_eq!(h.value, 6.62607004e-34);
    assert_eq!(h.kind, LiteralKind::Scientific);

    assert_eq!(parse_literal("1e+3").unwrap().value, 1000.0);
}

#[test]
fn negative_and_whitespace() {
    assert_eq!(parse_literal("  -42 ").unwrap().value, -42.0);
    assert_eq!(parse_literal("-0x10").unwrap().value, -16.0);
}

#[test]
fn legacy_octal_is_ambiguous() {
    for input in ["0100", "012", "-0755", "09"] {
        assert!(
            matches!(
                parse_literal(input),
                Err(PrimitiveError::AmbiguousOctal(ref s)) if s == input
            ),
            "{:?} should be rejected as ambiguous",
            input
        );
    }
}

#[test]
fn lone_zero_is_not_legacy_octal() {
    assert_eq!(parse_literal("0").unwrap().value, 0.0);
    assert_eq!(parse_literal("0.5").unwrap().value, 0.5);
    assert_eq!(parse_literal("0e5").unwrap().value, 0.0);
}

#[test]
fn malformed_literals() {
    for input in [
        "", "-", "abc", "12px", "0x", "0xG", "0b102", "0o8", "1e", "1e+", ".", "1.2.3", "--1",
        "+1", "inf", "NaN", "1_000",
    ] {
        assert!(
            matches!(parse_literal(input), Err(PrimitiveError::InvalidLiteral(_))),
            "{:?} should be an invalid literal",
            input
        );
    }
}

#[test]
fn huge_hex_literal_loses_precision_instead_of_failing() {
    let lit = parse_literal("0xFFFFFFFFFFFFFFFFFF").unwrap();
    assert!(lit.value > 4.7e21);
}

#[test]
fn literal_displays_like_console() {
    assert_eq!(parse_literal("2.99E8").unwrap().to_string(), "299000000");
    assert_eq!(parse_literal("0xCAFE").unwrap().to_string(), "51966");
}

#[test]
fn literal_json_roundtrip() {
    let lit = parse_literal("0o100").unwrap();
    let json = serde_json::to_string(&lit).unwrap();
    assert_eq!(json, r#"{"value":64.0,"kind":"octal"}"#);
    let back: Literal = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lit);
}

// ============================================================================
// format_number
// ============================================================================

#[test]
fn integers_have_no_fraction() {
    assert_eq!(format_number(1024.0), "1024");
    assert_eq!(format_number(-5.0), "-5");
    assert_eq!(format_number(299_000_000.0), "299000000");
}

#[test]
fn fractions() {
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(123.456), "123.456");
    assert_eq!(format_number(-2.5), "-2.5");
    assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
}

#[test]
fn zero_and_negative_zero() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn non_finite() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn exponent_thresholds() {
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(1.5e21), "1.5e+21");
    assert_eq!(format_number(0.000001), "0.000001");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(1.5e-7), "1.5e-7");
}

#[test]
fn tiny_constant() {
    assert_eq!(format_number(6.62607004e-34), "6.62607004e-34");
    assert_eq!(format_number(-1.23e-18), "-1.23e-18");
}
