//! Repositioning of the subscript component of a compound glyph.

use serde::{Deserialize, Serialize};

use crate::model::{Point, Segment, ViewBox};

/// Scale toward the view box origin, then shift by a fraction of the box.
/// Applied in the small component's native space, before normalization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptTransform {
    pub scale: f64,
    pub offset_x: f64, // fraction of view box width
    pub offset_y: f64, // fraction of view box height
}

impl SubscriptTransform {
    pub const DEFAULT: SubscriptTransform = SubscriptTransform {
        scale: 0.6,
        offset_x: 0.4,
        offset_y: 0.4,
    };

    pub fn apply(&self, p: Point, vb: &ViewBox) -> Point {
        Point {
            x: vb.min_x + (p.x - vb.min_x) * self.scale + self.offset_x * vb.width,
            y: vb.min_y + (p.y - vb.min_y) * self.scale + self.offset_y * vb.height,
        }
    }

    pub fn apply_segments(&self, segs: &[Segment], vb: &ViewBox) -> Vec<Segment> {
        segs.iter()
            .map(|s| s.map_points(|p| self.apply(p, vb)))
            .collect()
    }
}

impl Default for SubscriptTransform {
    fn default() -> Self {
        Self::DEFAULT
    }
}
