//! Path command interpreter.
//!
//! Folds the token stream through [`PathState`] and emits segments in the
//! drawing's native coordinates. Coordinate groups after a command repeat
//! that command until the next letter, as SVG path data allows.

use super::tokenize::{tokenize, Token};
use crate::error::{OutlineError, Result};
use crate::model::{Point, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    Horizontal,
    Vertical,
    CubicTo,
    SmoothCubicTo,
    QuadTo,
    SmoothQuadTo,
    ClosePath,
}

impl CommandKind {
    /// Numbers consumed per coordinate group.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => 2,
            CommandKind::Horizontal | CommandKind::Vertical => 1,
            CommandKind::CubicTo => 6,
            CommandKind::SmoothCubicTo | CommandKind::QuadTo => 4,
            CommandKind::ClosePath => 0,
        }
    }

    fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::Horizontal => 'H',
            CommandKind::Vertical => 'V',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::QuadTo => 'Q',
            CommandKind::SmoothQuadTo => 'T',
            CommandKind::ClosePath => 'Z',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub relative: bool,
}

impl Command {
    pub fn from_letter(c: char) -> Result<Command> {
        let kind = match c.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::Horizontal,
            'V' => CommandKind::Vertical,
            'C' => CommandKind::CubicTo,
            'S' => CommandKind::SmoothCubicTo,
            'Q' => CommandKind::QuadTo,
            'T' => CommandKind::SmoothQuadTo,
            'Z' => CommandKind::ClosePath,
            _ => return Err(OutlineError::UnsupportedCommand { command: c }),
        };
        Ok(Command {
            kind,
            relative: c.is_ascii_lowercase(),
        })
    }

    fn letter(self) -> char {
        let c = self.kind.letter();
        if self.relative {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }
}

/// Interpreter state carried between coordinate groups.
#[derive(Clone, Debug, Default)]
pub struct PathState {
    pub current: Point,
    pub subpath_start: Point,
    pub last_kind: Option<CommandKind>,
    pub last_control: Option<Point>,
}

impl PathState {
    fn resolve(&self, cmd: Command, p: Point) -> Point {
        if cmd.relative {
            p.offset(self.current)
        } else {
            p
        }
    }

    // Implicit control point for S/T: reflect only when chained to a curve
    // of the same family, otherwise collapse onto the current point.
    fn reflected(&self, family: [CommandKind; 2]) -> Point {
        match (self.last_kind, self.last_control) {
            (Some(k), Some(ctrl)) if family.contains(&k) => self.current.reflect(ctrl),
            _ => self.current,
        }
    }

    /// Apply one coordinate group of `cmd`. `first` marks the first group
    /// after the command letter, which matters only for moveto.
    pub fn apply(
        &mut self,
        cmd: Command,
        args: &[f64],
        first: bool,
        out: &mut Vec<Segment>,
    ) {
        let at = |i: usize| Point::new(args[i], args[i + 1]);
        let mut control = None;
        match cmd.kind {
            CommandKind::MoveTo => {
                let p = self.resolve(cmd, at(0));
                if first {
                    self.subpath_start = p;
                } else {
                    out.push(Segment::line(self.current, p));
                }
                self.current = p;
            }
            CommandKind::LineTo => {
                let p = self.resolve(cmd, at(0));
                out.push(Segment::line(self.current, p));
                self.current = p;
            }
            CommandKind::Horizontal => {
                let x = if cmd.relative { self.current.x + args[0] } else { args[0] };
                let p = Point::new(x, self.current.y);
                out.push(Segment::line(self.current, p));
                self.current = p;
            }
            CommandKind::Vertical => {
                let y = if cmd.relative { self.current.y + args[0] } else { args[0] };
                let p = Point::new(self.current.x, y);
                out.push(Segment::line(self.current, p));
                self.current = p;
            }
            CommandKind::CubicTo => {
                let c1 = self.resolve(cmd, at(0));
                let c2 = self.resolve(cmd, at(2));
                let p = self.resolve(cmd, at(4));
                out.push(Segment::cubic(self.current, c1, c2, p));
                self.current = p;
                control = Some(c2);
            }
            CommandKind::SmoothCubicTo => {
                let c1 = self.reflected([CommandKind::CubicTo, CommandKind::SmoothCubicTo]);
                let c2 = self.resolve(cmd, at(0));
                let p = self.resolve(cmd, at(2));
                out.push(Segment::cubic(self.current, c1, c2, p));
                self.current = p;
                control = Some(c2);
            }
            CommandKind::QuadTo => {
                let c = self.resolve(cmd, at(0));
                let p = self.resolve(cmd, at(2));
                out.push(Segment::quad(self.current, c, p));
                self.current = p;
                control = Some(c);
            }
            CommandKind::SmoothQuadTo => {
                let c = self.reflected([CommandKind::QuadTo, CommandKind::SmoothQuadTo]);
                let p = self.resolve(cmd, at(0));
                out.push(Segment::quad(self.current, c, p));
                self.current = p;
                control = Some(c);
            }
            CommandKind::ClosePath => {
                if self.current != self.subpath_start {
                    out.push(Segment::line(self.current, self.subpath_start));
                }
                self.current = self.subpath_start;
            }
        }
        self.last_control = control;
        self.last_kind = Some(cmd.kind);
    }
}

/// Interpret a token stream into native-space segments.
pub fn interpret(tokens: &[Token]) -> Result<Vec<Segment>> {
    let mut state = PathState::default();
    let mut segments = Vec::new();
    let mut active: Option<Command> = None;
    let mut i = 0usize;
    while i < tokens.len() {
        let mut first = false;
        if let Token::Command(c) = tokens[i] {
            let cmd = Command::from_letter(c)?;
            i += 1;
            first = true;
            active = Some(cmd);
            if cmd.kind == CommandKind::ClosePath {
                state.apply(cmd, &[], true, &mut segments);
                continue;
            }
            if !matches!(tokens.get(i), Some(Token::Number(_))) {
                // letter with no coordinates still counts as the previous command
                state.last_kind = Some(cmd.kind);
                state.last_control = None;
                continue;
            }
        }
        let cmd = match active {
            Some(cmd) if cmd.kind.arity() > 0 => cmd,
            _ => return Err(OutlineError::MissingCommand { position: i }),
        };
        // consume coordinate groups until the next letter or end of stream
        let mut args = [0.0f64; 6];
        while let Some(Token::Number(_)) = tokens.get(i) {
            let n = cmd.kind.arity();
            for (slot, k) in args.iter_mut().zip(0..n) {
                match tokens.get(i + k) {
                    Some(Token::Number(v)) => *slot = *v,
                    _ => {
                        return Err(OutlineError::TruncatedCoordinates {
                            command: cmd.letter(),
                            expected: n,
                            found: k,
                        })
                    }
                }
            }
            state.apply(cmd, &args[..n], first, &mut segments);
            first = false;
            i += n;
        }
    }
    if segments.is_empty() {
        return Err(OutlineError::EmptySegments);
    }
    Ok(segments)
}

/// Tokenize and interpret one path `d` string.
pub fn parse_path(d: &str) -> Result<Vec<Segment>> {
    let tokens = tokenize(d)?;
    interpret(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn closed_square_emits_closing_line() {
        let segs = parse_path("M0,0 L10,0 L10,10 Z").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::line(pt(0.0, 0.0), pt(10.0, 0.0)),
                Segment::line(pt(10.0, 0.0), pt(10.0, 10.0)),
                Segment::line(pt(10.0, 10.0), pt(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn smooth_cubic_reflects_previous_control() {
        let segs = parse_path("M0,0 C0,10 10,10 10,0 S20,-10 20,0").unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].points()[1], pt(10.0, -10.0));
    }

    #[test]
    fn smooth_cubic_without_curve_uses_current_point() {
        let segs = parse_path("M5,5 L10,0 S20,-10 20,0").unwrap();
        assert_eq!(segs[1].points()[1], pt(10.0, 0.0));
    }

    #[test]
    fn smooth_cubic_after_quad_does_not_reflect() {
        let segs = parse_path("M0,0 Q5,10 10,0 S20,-10 20,0").unwrap();
        assert_eq!(segs[1].points()[1], pt(10.0, 0.0));
    }

    #[test]
    fn smooth_quad_after_line_uses_current_point() {
        let segs = parse_path("M0 0 L10 0 T20 0").unwrap();
        assert_eq!(segs[1], Segment::quad(pt(10.0, 0.0), pt(10.0, 0.0), pt(20.0, 0.0)));
    }

    #[test]
    fn smooth_quad_after_cubic_does_not_reflect() {
        let segs = parse_path("M0,0 C0,10 10,10 10,0 T20,0").unwrap();
        assert_eq!(segs[1].points()[1], pt(10.0, 0.0));
    }

    #[test]
    fn smooth_quad_chains_reflection() {
        let segs = parse_path("M0,0 Q5,10 10,0 T20,0 T30,0").unwrap();
        assert_eq!(segs[1].points()[1], pt(15.0, -10.0));
        assert_eq!(segs[2].points()[1], pt(25.0, 10.0));
    }

    #[test]
    fn implicit_smooth_cubic_repeats_reflect() {
        let a = parse_path("M0,0 C0,10 10,10 10,0 S20,-10 20,0 30,10 30,0").unwrap();
        let b = parse_path("M0,0 C0,10 10,10 10,0 S20,-10 20,0 S30,10 30,0").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[2].points()[1], pt(20.0, 10.0));
    }

    #[test]
    fn moveto_extra_pairs_are_lines() {
        let segs = parse_path("m1,1 2,0 0,2").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::line(pt(1.0, 1.0), pt(3.0, 1.0)),
                Segment::line(pt(3.0, 1.0), pt(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn horizontal_and_vertical_hold_other_axis() {
        let segs = parse_path("M2,3 H8 v4 h-1 V0").unwrap();
        let ends: Vec<Point> = segs.iter().map(|s| s.end()).collect();
        assert_eq!(ends, vec![pt(8.0, 3.0), pt(8.0, 7.0), pt(7.0, 7.0), pt(7.0, 0.0)]);
    }

    #[test]
    fn close_then_relative_continues_from_subpath_start() {
        let segs = parse_path("M10,10 l5,0 l0,5 z l1,1").unwrap();
        assert_eq!(segs.last().unwrap(), &Segment::line(pt(10.0, 10.0), pt(11.0, 11.0)));
    }

    #[test]
    fn close_at_start_emits_nothing() {
        let segs = parse_path("M0,0 L5,0 L0,0 Z").unwrap();
        assert_eq!(segs.len(), 2);
    }

    #[test]
    fn lone_moveto_is_empty() {
        assert!(matches!(parse_path("M10 10"), Err(OutlineError::EmptySegments)));
        assert!(matches!(parse_path(""), Err(OutlineError::EmptySegments)));
    }

    #[test]
    fn arc_is_unsupported() {
        let err = parse_path("M0 0 A5 5 0 0 1 10 0").unwrap_err();
        assert!(matches!(err, OutlineError::UnsupportedCommand { command: 'A' }));
    }

    #[test]
    fn numbers_before_command_are_rejected() {
        assert!(matches!(
            parse_path("10 10 L 5 5"),
            Err(OutlineError::MissingCommand { position: 0 })
        ));
        assert!(matches!(
            parse_path("M0 0 L1 1 Z 4 4"),
            Err(OutlineError::MissingCommand { .. })
        ));
    }

    #[test]
    fn truncated_group_is_rejected() {
        let err = parse_path("M0 0 c1 2 3 4 5").unwrap_err();
        assert!(matches!(
            err,
            OutlineError::TruncatedCoordinates { command: 'c', expected: 6, found: 5 }
        ));
    }

    #[test]
    fn arity_table() {
        assert_eq!(CommandKind::CubicTo.arity(), 6);
        assert_eq!(CommandKind::SmoothCubicTo.arity(), 4);
        assert_eq!(CommandKind::Vertical.arity(), 1);
        assert_eq!(CommandKind::ClosePath.arity(), 0);
    }
}
