use kana_outline::compose::compose_compound;
use kana_outline::geometry::normalize::{denormalize_point, normalize_point, normalize_segments};
use kana_outline::geometry::tolerance::{points_close, EPS_ROUND_TRIP};
use kana_outline::{parse_path, MemorySource, OutlineConfig, Point, ViewBox};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Line { x: i16, y: i16 },
    Horizontal { x: i16 },
    Vertical { y: i16 },
    Cubic { c: [i16; 6] },
    SmoothCubic { c: [i16; 4] },
    Quad { c: [i16; 4] },
    SmoothQuad { x: i16, y: i16 },
    Close,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::Line { x, y }),
        any::<i16>().prop_map(|x| Op::Horizontal { x }),
        any::<i16>().prop_map(|y| Op::Vertical { y }),
        any::<[i16; 6]>().prop_map(|c| Op::Cubic { c }),
        any::<[i16; 4]>().prop_map(|c| Op::SmoothCubic { c }),
        any::<[i16; 4]>().prop_map(|c| Op::Quad { c }),
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::SmoothQuad { x, y }),
        Just(Op::Close),
    ]
}

fn pair(v: &[i16], cx: i64, cy: i64) -> String {
    v.chunks(2)
        .map(|p| format!("{},{}", p[0] as i64 - cx, p[1] as i64 - cy))
        .collect::<Vec<_>>()
        .join(" ")
}

// Render the same geometry twice: once with absolute letters, once relative.
fn render(start: (i16, i16), ops: &[Op]) -> (String, String) {
    let (sx, sy) = (start.0 as i64, start.1 as i64);
    let mut abs = format!("M{sx},{sy}");
    let mut rel = format!("m{sx},{sy}");
    let (mut cx, mut cy) = (sx, sy);
    for op in ops {
        match op {
            Op::Line { x, y } => {
                abs.push_str(&format!(" L{x},{y}"));
                rel.push_str(&format!(" l{}", pair(&[*x, *y], cx, cy)));
                (cx, cy) = (*x as i64, *y as i64);
            }
            Op::Horizontal { x } => {
                abs.push_str(&format!(" H{x}"));
                rel.push_str(&format!(" h{}", *x as i64 - cx));
                cx = *x as i64;
            }
            Op::Vertical { y } => {
                abs.push_str(&format!(" V{y}"));
                rel.push_str(&format!(" v{}", *y as i64 - cy));
                cy = *y as i64;
            }
            Op::Cubic { c } => {
                abs.push_str(&format!(" C{}", pair(c, 0, 0)));
                rel.push_str(&format!(" c{}", pair(c, cx, cy)));
                (cx, cy) = (c[4] as i64, c[5] as i64);
            }
            Op::SmoothCubic { c } => {
                abs.push_str(&format!(" S{}", pair(c, 0, 0)));
                rel.push_str(&format!(" s{}", pair(c, cx, cy)));
                (cx, cy) = (c[2] as i64, c[3] as i64);
            }
            Op::Quad { c } => {
                abs.push_str(&format!(" Q{}", pair(c, 0, 0)));
                rel.push_str(&format!(" q{}", pair(c, cx, cy)));
                (cx, cy) = (c[2] as i64, c[3] as i64);
            }
            Op::SmoothQuad { x, y } => {
                abs.push_str(&format!(" T{x},{y}"));
                rel.push_str(&format!(" t{}", pair(&[*x, *y], cx, cy)));
                (cx, cy) = (*x as i64, *y as i64);
            }
            Op::Close => {
                abs.push_str(" Z");
                rel.push_str(" z");
                (cx, cy) = (sx, sy);
            }
        }
    }
    (abs, rel)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn relative_matches_absolute(start in any::<(i16, i16)>(), ops in prop::collection::vec(op_strategy(), 1..24)) {
        let (abs, rel) = render(start, &ops);
        let a = parse_path(&abs);
        let r = parse_path(&rel);
        match (a, r) {
            (Ok(a), Ok(r)) => {
                let vb = ViewBox::new(-40000.0, -40000.0, 80000.0, 80000.0).unwrap();
                prop_assert_eq!(normalize_segments(&a, &vb), normalize_segments(&r, &vb));
            }
            // e.g. only closes on an empty subpath
            (Err(_), Err(_)) => {}
            (a, r) => prop_assert!(false, "diverged: {:?} vs {:?}", a, r),
        }
    }

    #[test]
    fn implicit_lines_match_explicit(pts in prop::collection::vec(any::<(i16, i16)>(), 1..32)) {
        let implicit = format!(
            "M0 0 L{}",
            pts.iter().map(|(x, y)| format!("{x} {y}")).collect::<Vec<_>>().join(" ")
        );
        let explicit = format!(
            "M0 0 {}",
            pts.iter().map(|(x, y)| format!("L{x} {y}")).collect::<Vec<_>>().join(" ")
        );
        prop_assert_eq!(parse_path(&implicit).unwrap(), parse_path(&explicit).unwrap());
    }

    #[test]
    fn implicit_cubics_match_explicit(groups in prop::collection::vec(any::<[i16; 6]>(), 1..12)) {
        let body = |prefix: &str| groups
            .iter()
            .map(|c| format!("{prefix}{} {} {} {} {} {}", c[0], c[1], c[2], c[3], c[4], c[5]))
            .collect::<Vec<_>>()
            .join(" ");
        let implicit = format!("M1 1 c{}", body("").trim_start());
        let explicit = format!("M1 1 {}", body("c"));
        prop_assert_eq!(parse_path(&implicit).unwrap(), parse_path(&explicit).unwrap());
    }

    #[test]
    fn normalize_round_trip(
        x in -1.0e6f64..1.0e6,
        y in -1.0e6f64..1.0e6,
        min_x in -1.0e3f64..1.0e3,
        min_y in -1.0e3f64..1.0e3,
        w in 1.0f64..2048.0,
        h in 1.0f64..2048.0,
    ) {
        let vb = ViewBox::new(min_x, min_y, w, h).unwrap();
        let p = Point::new(x, y);
        let back = denormalize_point(normalize_point(p, &vb), &vb);
        let tol = EPS_ROUND_TRIP * (1.0 + x.abs().max(y.abs()));
        prop_assert!(points_close(back, p, tol), "{:?} -> {:?}", p, back);
    }

    #[test]
    fn compound_ids_are_dense(base_n in 1usize..6, small_n in 1usize..6) {
        let vb = ViewBox::DEFAULT;
        let base: Vec<String> = (0..base_n).map(|i| format!("M{i} 0 L{i} 100")).collect();
        let small: Vec<String> = (0..small_n).map(|i| format!("M0 {i} L100 {i}")).collect();
        let mut src = MemorySource::new();
        src.insert("き", &base.iter().map(String::as_str).collect::<Vec<_>>(), vb);
        src.insert("ょ", &small.iter().map(String::as_str).collect::<Vec<_>>(), vb);
        let strokes = compose_compound("きょ", &src, &OutlineConfig::default()).unwrap();
        prop_assert_eq!(strokes.len(), base_n + small_n);
        let ids: Vec<u32> = strokes.iter().map(|s| s.id).collect();
        let expected: Vec<u32> = (1..=(base_n + small_n) as u32).collect();
        prop_assert_eq!(ids, expected);
    }
}
