//! View box <-> unit square mapping. No clamping: geometry outside the
//! declared box normalizes outside `[0,1]`.

use crate::model::{Point, Segment, ViewBox};

#[inline]
pub fn normalize_point(p: Point, vb: &ViewBox) -> Point {
    Point {
        x: (p.x - vb.min_x) / vb.width,
        y: (p.y - vb.min_y) / vb.height,
    }
}

#[inline]
pub fn denormalize_point(p: Point, vb: &ViewBox) -> Point {
    Point {
        x: p.x * vb.width + vb.min_x,
        y: p.y * vb.height + vb.min_y,
    }
}

pub fn normalize_segment(seg: &Segment, vb: &ViewBox) -> Segment {
    seg.map_points(|p| normalize_point(p, vb))
}

pub fn normalize_segments(segs: &[Segment], vb: &ViewBox) -> Vec<Segment> {
    segs.iter().map(|s| normalize_segment(s, vb)).collect()
}
