use period_range_domain::{Range, intersection, overlaps};
use proptest::prelude::*;

fn any_range() -> impl Strategy<Value = Range<i64>> {
    (
        proptest::option::of(-40i64..40),
        any::<bool>(),
        proptest::option::of(-40i64..40),
        any::<bool>(),
    )
        .prop_map(|(lower, lower_inclusive, upper, upper_inclusive)| {
            Range::from_bounds(lower, lower_inclusive, upper, upper_inclusive)
        })
}

proptest! {
    #[test]
    fn display_then_parse_roundtrips(r in any_range()) {
        let text = r.to_string();
        let parsed: Range<i64> = text.parse().unwrap();
        prop_assert_eq!(parsed, r);
    }

    #[test]
    fn reversed_closed_open_is_empty(a in -1000i64..1000, gap in 1i64..1000) {
        let r = Range::new(Some(a + gap), Some(a), "[)").unwrap();
        prop_assert!(r.is_empty());
    }

    #[test]
    fn overlap_is_symmetric(a in any_range(), b in any_range()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn intersection_is_pointwise_and(a in any_range(), b in any_range()) {
        let i = intersection(&a, &b);
        if overlaps(&a, &b) {
            prop_assert!(!i.is_empty());
        } else {
            prop_assert!(i.is_empty());
        }
        for p in -45i64..45 {
            prop_assert_eq!(i.contains(&p), a.contains(&p) && b.contains(&p), "point {}", p);
        }
    }

    #[test]
    fn intersection_with_itself_is_identity(a in any_range()) {
        prop_assume!(!a.is_empty());
        let i = intersection(&a, &a);
        prop_assert_eq!(i.inclusivity(), a.inclusivity());
        prop_assert_eq!(i, a);
    }

    #[test]
    fn intersection_is_commutative(a in any_range(), b in any_range()) {
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
    }
}
