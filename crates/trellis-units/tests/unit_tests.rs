//! Tests for length-pair parsing, serialization and margin/padding shorthands.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use trellis_units::{EdgeLengths, LengthError, LengthPair, Side, Unit};

#[test]
fn test_parse_pixels() {
    let pair = LengthPair::parse("10px").unwrap();
    assert_eq!(pair, LengthPair::px(10.0));
}

#[test]
fn test_parse_percentage_is_stored_as_fraction() {
    let pair = LengthPair::parse("50%").unwrap();
    assert_eq!(pair.unit, Unit::Percentage);
    assert_eq!(pair.length, 0.5);
    assert_eq!(pair.magnitude(), 50.0);
}

#[test]
fn test_parse_viewport_units_are_not_scaled() {
    assert_eq!(LengthPair::parse("50vw").unwrap(), LengthPair::vw(50.0));
    assert_eq!(LengthPair::parse("12.5vh").unwrap(), LengthPair::vh(12.5));
}

#[test]
fn test_parse_ignores_interior_whitespace() {
    assert_eq!(LengthPair::parse("  1 0 px").unwrap(), LengthPair::px(10.0));
    assert_eq!("\t25 %".parse::<LengthPair>().unwrap(), LengthPair::percent(0.25));
}

#[test]
fn test_lenient_parse_maps_unknown_unit_to_not_set() {
    let pair = LengthPair::parse("2em").unwrap();
    assert_eq!(pair.unit, Unit::NotSet);
    assert_eq!(pair.length, 2.0);
    assert!(!pair.is_set());
}

#[test]
fn test_strict_parse_rejects_unknown_unit() {
    let err = "2em".parse::<LengthPair>().unwrap_err();
    assert_eq!(
        err,
        LengthError::UnknownUnit {
            text: "2em".to_string(),
            unit: "em".to_string(),
        }
    );
}

#[test]
fn test_strict_parse_reads_bare_magnitude_as_not_set() {
    let pair = "10".parse::<LengthPair>().unwrap();
    assert_eq!(pair, LengthPair::new(Unit::NotSet, 10.0));
    assert_eq!("0".parse::<LengthPair>().unwrap(), LengthPair::NOT_SET);
}

#[test]
fn test_parse_accepts_leading_minus() {
    assert_eq!("-5px".parse::<LengthPair>().unwrap(), LengthPair::px(-5.0));
    assert_eq!(LengthPair::parse("- 12.5%").unwrap(), LengthPair::percent(-0.125));
    assert_eq!(LengthPair::px(-20.0).serialize(), "-20px");
    assert_eq!(LengthPair::percent(-0.5).serialize(), "-50%");
}

#[test]
fn test_parse_rejects_missing_magnitude() {
    assert!(matches!(
        LengthPair::parse("px"),
        Err(LengthError::MissingMagnitude { .. })
    ));
    assert!(matches!(
        LengthPair::parse("-px"),
        Err(LengthError::MissingMagnitude { .. })
    ));
    assert!(matches!(
        LengthPair::parse(""),
        Err(LengthError::MissingMagnitude { .. })
    ));
}

#[test]
fn test_parse_rejects_malformed_magnitude() {
    assert!(matches!(
        LengthPair::parse("1.2.3px"),
        Err(LengthError::InvalidMagnitude { .. })
    ));
}

#[test]
fn test_serialize_is_inverse_of_parse() {
    for text in ["10px", "50%", "12.5%", "33vw", "0.5vh", "7"] {
        let pair = LengthPair::parse(text).unwrap();
        assert_eq!(pair.serialize(), text);
        assert_eq!(LengthPair::parse(&pair.serialize()).unwrap(), pair);
    }
}

#[test]
fn test_not_set_serializes_as_bare_magnitude() {
    assert_eq!(LengthPair::NOT_SET.serialize(), "0");
    assert_eq!(LengthPair::new(Unit::NotSet, 3.0).to_string(), "3");
}

#[test]
fn test_percentage_text_has_no_float_noise() {
    assert_eq!(LengthPair::parse("3.5%").unwrap().serialize(), "3.5%");
    assert_eq!(LengthPair::parse("3.5%").unwrap(), LengthPair::percent(0.035));
    assert_eq!(LengthPair::percent(0.007).serialize(), "0.7%");
    assert_eq!(LengthPair::parse("0.7%").unwrap(), LengthPair::percent(0.007));
    assert_eq!(LengthPair::percent(0.09).serialize(), "9%");
    assert_eq!(LengthPair::percent(0.000_01).serialize(), "0.001%");
}

#[quickcheck]
fn prop_percentage_text_parses_to_same_fraction(fraction: f64) -> TestResult {
    if !fraction.is_finite() {
        return TestResult::discard();
    }
    let pair = LengthPair::percent(fraction);
    let text = pair.serialize();
    TestResult::from_bool(
        LengthPair::parse(&text) == Ok(pair) && text.parse::<LengthPair>() == Ok(pair),
    )
}

#[test]
fn test_every_serialized_pair_deserializes() {
    let pairs = [
        LengthPair::NOT_SET,
        LengthPair::new(Unit::NotSet, 2.5),
        LengthPair::px(-5.0),
        LengthPair::percent(-0.25),
        LengthPair::percent(0.035),
        LengthPair::vw(-0.5),
    ];
    for pair in pairs {
        let json = serde_json::to_string(&pair).unwrap();
        let back: LengthPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair, "{json}");
    }
}

#[test]
fn test_length_pair_serde_uses_text_form() {
    let json = serde_json::to_string(&LengthPair::percent(0.25)).unwrap();
    assert_eq!(json, "\"25%\"");
    let back: LengthPair = serde_json::from_str("\"40px\"").unwrap();
    assert_eq!(back, LengthPair::px(40.0));
    assert!(serde_json::from_str::<LengthPair>("\"40em\"").is_err());
}

// ---------------------------------------------------------------------------
// Shorthand lists
// ---------------------------------------------------------------------------

#[test]
fn test_shorthand_one_value() {
    let edges = EdgeLengths::parse_shorthand("10px").unwrap();
    for side in Side::ALL {
        assert_eq!(edges.get(side), LengthPair::px(10.0));
    }
}

#[test]
fn test_shorthand_two_values() {
    let edges = EdgeLengths::parse_shorthand("10px 20px").unwrap();
    assert_eq!(edges.up, LengthPair::px(10.0));
    assert_eq!(edges.down, LengthPair::px(10.0));
    assert_eq!(edges.left, LengthPair::px(20.0));
    assert_eq!(edges.right, LengthPair::px(20.0));
}

#[test]
fn test_shorthand_three_values() {
    let edges = EdgeLengths::parse_shorthand("1px 2px 3px").unwrap();
    assert_eq!(edges.up, LengthPair::px(1.0));
    assert_eq!(edges.left, LengthPair::px(2.0));
    assert_eq!(edges.right, LengthPair::px(2.0));
    assert_eq!(edges.down, LengthPair::px(3.0));
}

#[test]
fn test_shorthand_four_values() {
    let edges: EdgeLengths = "1px 2px 3px 4px".parse().unwrap();
    assert_eq!(
        edges.to_array(),
        [
            LengthPair::px(1.0),
            LengthPair::px(2.0),
            LengthPair::px(3.0),
            LengthPair::px(4.0),
        ]
    );
}

#[test]
fn test_shorthand_drops_empty_tokens() {
    let edges = EdgeLengths::parse_shorthand("  5%   1vw ").unwrap();
    assert_eq!(edges, EdgeLengths::symmetric(LengthPair::percent(0.05), LengthPair::vw(1.0)));
}

#[test]
fn test_shorthand_arity_errors() {
    assert_eq!(
        EdgeLengths::parse_shorthand(""),
        Err(LengthError::ShorthandArity {
            text: String::new(),
            count: 0,
        })
    );
    assert!(matches!(
        EdgeLengths::parse_shorthand("1px 2px 3px 4px 5px"),
        Err(LengthError::ShorthandArity { count: 5, .. })
    ));
}

#[test]
fn test_shorthand_rejects_bad_token() {
    assert!(matches!(
        EdgeLengths::parse_shorthand("1px 2em"),
        Err(LengthError::UnknownUnit { .. })
    ));
}

#[test]
fn test_shorthand_serializes_to_minimal_form() {
    for text in ["10px", "10px 20px", "1px 2px 3px", "1px 2px 3px 4px", "50% 0px"] {
        let edges = EdgeLengths::parse_shorthand(text).unwrap();
        assert_eq!(edges.to_shorthand(), text);
    }
    let expanded = EdgeLengths::parse_shorthand("4px 4px 4px 4px").unwrap();
    assert_eq!(expanded.to_string(), "4px");
}

#[test]
fn test_shorthand_round_trips_unset_and_negative_sides() {
    let unset = EdgeLengths::default();
    assert_eq!(unset.to_shorthand(), "0");
    assert_eq!(EdgeLengths::parse_shorthand(&unset.to_shorthand()).unwrap(), unset);

    let negative = EdgeLengths::all(LengthPair::px(-5.0));
    assert_eq!(negative.to_shorthand(), "-5px");
    assert_eq!(negative.to_string().parse::<EdgeLengths>().unwrap(), negative);

    let json = serde_json::to_string(&negative).unwrap();
    assert_eq!(serde_json::from_str::<EdgeLengths>(&json).unwrap(), negative);
}

#[test]
fn test_side_names() {
    assert_eq!(Side::Up.to_string(), "up");
    assert_eq!("left".parse::<Side>().unwrap(), Side::Left);
}
