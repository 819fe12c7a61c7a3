use a11y_scan::domain::{AccessibilityScore, ScoreBand};

#[test]
fn given_well_formed_scores_when_parsing_then_round_trips_to_same_percentage() {
    for raw in ["0%", "7%", "50%", "85%", "100%"] {
        let score: AccessibilityScore = raw.parse().unwrap();

        assert_eq!(score.to_string(), raw);
        assert_eq!(
            u16::from(score.percent()),
            raw.trim_end_matches('%').parse::<u16>().unwrap()
        );
    }
}

#[test]
fn given_leading_zero_score_when_parsing_then_keeps_integer_value() {
    let score: AccessibilityScore = "085%".parse().unwrap();

    assert_eq!(score.percent(), 85);
}

#[test]
fn given_malformed_scores_when_parsing_then_rejects_them() {
    for raw in ["", "%", "85", "85 %", "8.5%", "-5%", "1000%", "101%", "abc%"] {
        assert!(
            raw.parse::<AccessibilityScore>().is_err(),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn given_score_json_when_deserializing_then_accepts_string_and_serializes_back() {
    let score: AccessibilityScore = serde_json::from_str(r#""64%""#).unwrap();

    assert_eq!(score.percent(), 64);
    assert_eq!(serde_json::to_string(&score).unwrap(), r#""64%""#);
}

#[test]
fn given_numeric_score_json_when_deserializing_then_rejects_it() {
    let result = serde_json::from_str::<AccessibilityScore>("64");

    assert!(result.is_err());
}

#[test]
fn given_scores_around_thresholds_when_banding_then_uses_strict_greater_than() {
    assert_eq!(ScoreBand::from_percent(100), ScoreBand::Good);
    assert_eq!(ScoreBand::from_percent(81), ScoreBand::Good);
    assert_eq!(ScoreBand::from_percent(80), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_percent(51), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_percent(50), ScoreBand::Poor);
    assert_eq!(ScoreBand::from_percent(0), ScoreBand::Poor);
}

#[test]
fn given_parsed_score_when_banding_then_matches_percentage_band() {
    let score: AccessibilityScore = "85%".parse().unwrap();

    assert_eq!(score.band(), ScoreBand::Good);
    assert_eq!(score.band().as_str(), "good");
}

#[test]
fn given_out_of_range_value_when_constructing_then_returns_none() {
    assert!(AccessibilityScore::new(101).is_none());
    assert_eq!(AccessibilityScore::new(100).map(|s| s.percent()), Some(100));
}
