// Ingestion limits for authored path data

// Path string caps
pub const MAX_PATH_CHARS: usize = 1024 * 1024; // per 'd' attribute

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && (COORD_MIN..=COORD_MAX).contains(&x) }
