//! Path interpretation and normalization, end to end.

use kana_outline::geometry::normalize::normalize_segments;
use kana_outline::{parse_path, OutlineError, Point, Segment, ViewBox};

fn flat_points(segs: &[Segment]) -> Vec<(f64, f64)> {
    segs.iter()
        .flat_map(|s| s.points().iter().map(|p| (p.x, p.y)))
        .collect()
}

#[test]
fn closed_square_normalizes_to_unit_points() {
    let segs = parse_path("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(segs.len(), 3);
    assert!(segs.iter().all(|s| matches!(s, Segment::Line { .. })));
    let vb = ViewBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
    let norm = normalize_segments(&segs, &vb);
    assert_eq!(
        flat_points(&norm),
        vec![(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0, 1.0), (0.0, 0.0)]
    );
}

#[test]
fn smooth_cubic_example() {
    let segs = parse_path("M0,0 C0,10 10,10 10,0 S20,-10 20,0").unwrap();
    assert_eq!(segs.len(), 2);
    match &segs[1] {
        Segment::Cubic { points } => assert_eq!(points[1], Point::new(10.0, -10.0)),
        other => panic!("expected cubic, got {other:?}"),
    }
}

#[test]
fn arc_command_is_rejected() {
    assert!(matches!(
        parse_path("M0,0 A10,10 0 0,1 20,0"),
        Err(OutlineError::UnsupportedCommand { command: 'A' })
    ));
}

#[test]
fn relative_and_absolute_agree_for_every_command() {
    let abs = parse_path("M10 10 L20 10 H30 V20 C30 30 20 30 20 20 S10 10 10 20 Q5 25 0 20 T0 10 Z").unwrap();
    let rel = parse_path("m10 10 l10 0 h10 v10 c0 10 -10 10 -10 0 s-10 -10 -10 0 q-5 5 -10 0 t0 -10 z").unwrap();
    assert_eq!(abs, rel);
}

#[test]
fn implicit_repetition_matches_explicit_letters() {
    let implicit = parse_path("M0 0 L1 1 2 0 3 1 Q4 2 5 1 6 0 7 1").unwrap();
    let explicit = parse_path("M0 0 L1 1 L2 0 L3 1 Q4 2 5 1 Q6 0 7 1").unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn close_resets_relative_origin() {
    let segs = parse_path("M5 5 h10 v10 z m2 2 l1 0").unwrap();
    assert_eq!(segs.last().unwrap().points(), &[Point::new(7.0, 7.0), Point::new(8.0, 7.0)]);
}

#[test]
fn compact_number_syntax() {
    // typical minified authoring output
    let segs = parse_path("M.5-.5l1.5.25c0-1 1-1 1 0").unwrap();
    assert_eq!(segs[0].end(), Point::new(2.0, -0.25));
    assert_eq!(segs[1].end(), Point::new(3.0, -0.25));
}

#[test]
fn segments_are_continuous() {
    let segs = parse_path("M3 3 q2 4 5 0 t5 0 s3 -3 4 0 h-2 v-2 z").unwrap();
    for pair in segs.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
}
