// tests/integration/facade.rs
use period_range::{LooseBound, Range, TextRange, TimeRange, Timestamp};

#[test]
fn legacy_text_range_becomes_a_time_range() {
    let raw: Range<LooseBound<Timestamp>> =
        Range::parse_with("[2024-05-01T06:00:00Z;+oo)", |s| {
            Ok::<_, std::convert::Infallible>(LooseBound::text(s))
        })
        .unwrap();
    let typed: TimeRange = Range::coerce_timestamps(&raw).unwrap();
    assert_eq!(typed.to_string(), "[2024-05-01T06:00:00Z,)");
    assert!(!typed.upper_inclusive());

    let text: TextRange = Range::coerce_text(&raw);
    assert_eq!(text.to_string(), "[2024-05-01T06:00:00Z,)");
}
