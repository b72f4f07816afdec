// Tolerances for comparing normalized geometry

pub const EPS_POS: f64 = 1e-9;            // point coincidence in unit space
pub const EPS_ROUND_TRIP: f64 = 1e-9;     // normalize/denormalize slack

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn points_close(a: crate::model::Point, b: crate::model::Point, eps: f64) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}
