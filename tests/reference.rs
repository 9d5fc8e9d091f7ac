//! Known distances between short strings.
use pa_distance::*;

const S1: &[u8] = b"hello my name is jose";
const S2: &[u8] = b"hello m yname is jose";
const S3: &[u8] = b"hlelo my name is jose";

#[test]
fn edit_distances() {
    assert_eq!(levenshtein(S1, S2), 2);
    assert_eq!(hamming(S1, S2).unwrap(), 2);
    assert_eq!(damerau(S1, S2), 0);
    assert_eq!(damerau(S1, S3), 0);
    assert_eq!(damerau_with_transposition_cost(S1, S3, 1), 1);
}

#[test]
fn minkowski_power_sums() {
    assert_eq!(minkowski(S1, S2, 1).unwrap(), 23.);
    assert_eq!(minkowski(S1, S2, 2).unwrap(), 265.);
    assert_eq!(minkowski(S1, S2, 3).unwrap(), 3059.);
    assert!(matches!(minkowski(S1, S2, -1), Err(Error::InvalidOrder(-1))));
}

#[test]
fn needleman_wunsch_scores() {
    let nw = NW::new(CostModel::new(0.1, 1.0));
    for (a, b, expected) in [(S1, S2, 0.2), (S2, S3, 0.4), (S1, S3, 0.2)] {
        let cost = nw.cost(a, b);
        assert!((cost - expected).abs() < 0.01, "{cost} != {expected}");
    }
}

#[test]
fn cost_model_override() {
    let mut nw = NW::new(CostModel::unit());
    let before = nw.cost(b"hay", b"h@y");
    nw.cm.set_conversion(b'a', b'@', 0.1);
    assert!(nw.cost(b"hay", b"h@y") < before);
}

#[test]
fn cost_model_from_json() {
    let cm = CostModel::from_json(
        r#"{ "insertion": 0.1, "substitution": 1.0,
             "conversions": [{ "from": "1", "to": "l", "cost": 0.0 }] }"#,
    )
    .unwrap();
    assert_eq!(needleman_wunsch(b"1ow", b"low", &cm), 0.);
    assert!(matches!(
        CostModel::from_json(r#"{ "insertion": 0.1 }"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn jaccard_sentinel() {
    assert_eq!(jaccard(S1, S1), 0.);
    assert_eq!(jaccard(b"i like to party", b"this is started"), DISJOINT);
    assert_eq!(jaccard_sets(["spam", "eggs"], ["ham"]), -1.);
}
