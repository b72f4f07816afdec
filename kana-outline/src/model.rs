use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset by another point, used for relative path commands.
    pub fn offset(self, by: Point) -> Point {
        Point {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }

    /// Mirror `control` through `self`.
    pub fn reflect(self, control: Point) -> Point {
        Point {
            x: 2.0 * self.x - control.x,
            y: 2.0 * self.y - control.y,
        }
    }
}

/// Native coordinate rectangle a drawing is authored in. Width and height
/// are always finite and positive, including when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewBoxFields")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const DEFAULT: ViewBox = ViewBox {
        min_x: 0.0,
        min_y: 0.0,
        width: 1024.0,
        height: 1024.0,
    };

    /// Returns `None` unless width and height are finite and positive.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Option<Self> {
        let finite = [min_x, min_y, width, height].iter().all(|v| v.is_finite());
        if finite && width > 0.0 && height > 0.0 {
            Some(Self {
                min_x,
                min_y,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// Parse an SVG `viewBox` attribute value ("0 0 1024 1024", commas allowed).
    pub fn parse(attr: &str) -> Option<Self> {
        let parts: Vec<f64> = attr
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [x, y, w, h] => Self::new(*x, *y, *w, *h),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ViewBoxFields {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl TryFrom<ViewBoxFields> for ViewBox {
    type Error = String;

    fn try_from(f: ViewBoxFields) -> Result<Self, Self::Error> {
        ViewBox::new(f.min_x, f.min_y, f.width, f.height).ok_or_else(|| {
            format!(
                "view box {}x{} must have positive width and height",
                f.width, f.height
            )
        })
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A line or curve primitive. Points run start, controls..., end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Segment {
    Line { points: [Point; 2] },
    Quad { points: [Point; 3] },
    Cubic { points: [Point; 4] },
}

impl Segment {
    pub fn line(start: Point, end: Point) -> Self {
        Segment::Line {
            points: [start, end],
        }
    }

    pub fn quad(start: Point, control: Point, end: Point) -> Self {
        Segment::Quad {
            points: [start, control, end],
        }
    }

    pub fn cubic(start: Point, c1: Point, c2: Point, end: Point) -> Self {
        Segment::Cubic {
            points: [start, c1, c2, end],
        }
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Segment::Line { points } => points,
            Segment::Quad { points } => points,
            Segment::Cubic { points } => points,
        }
    }

    pub fn start(&self) -> Point {
        self.points()[0]
    }

    pub fn end(&self) -> Point {
        let pts = self.points();
        pts[pts.len() - 1]
    }

    /// Apply `f` to every point, keeping the variant and point order.
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Segment {
        match self {
            Segment::Line { points } => Segment::Line {
                points: points.map(&mut f),
            },
            Segment::Quad { points } => Segment::Quad {
                points: points.map(&mut f),
            },
            Segment::Cubic { points } => Segment::Cubic {
                points: points.map(&mut f),
            },
        }
    }
}

/// Tolerance region for where a traced stroke must start or end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn around(p: Point, radius: f64) -> Self {
        Self {
            x: p.x,
            y: p.y,
            radius,
        }
    }
}

/// Tracing rules consumed by the stroke matcher.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRules {
    pub direction_enforced: bool,
    pub corridor_radius: f64,
    pub start_must_be_near: f64,
    pub end_must_be_near: f64,
}

impl MatchRules {
    pub const DEFAULT: MatchRules = MatchRules {
        direction_enforced: true,
        corridor_radius: 0.05,
        start_must_be_near: 0.08,
        end_must_be_near: 0.08,
    };
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub id: u32, // 1-based, dense in drawing order
    pub start_hint: Circle,
    pub end_hint: Circle,
    pub path_hint: Vec<Segment>,
    pub arrow_hints: Vec<serde_json::Value>, // reserved, always empty
    pub rules: MatchRules,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterDef {
    #[serde(rename = "kana")]
    pub glyph: String,
    #[serde(rename = "romaji")]
    pub romanized_label: String,
    pub stroke_count: usize,
    pub strokes: Vec<Stroke>,
}

impl CharacterDef {
    pub fn new(glyph: &str, romanized_label: &str, strokes: Vec<Stroke>) -> Self {
        Self {
            glyph: glyph.to_string(),
            romanized_label: romanized_label.to_string(),
            stroke_count: strokes.len(),
            strokes,
        }
    }
}
