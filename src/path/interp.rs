use super::arc::EndpointArc;
use super::flatten::{flatten_arc, flatten_cubic, flatten_quadratic};
use super::syntax::{CommandKind, PathCommand, PathSyntax, Token};
use crate::errors::PathWarning;
use crate::geometry::{Point, Subpath};

/// Cursor state threaded through path interpretation, in source units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    pub current: Point,
    // location to return to for 'Z'/'z' commands
    pub start: Point,
    // reflected second control point of the previous 'C'/'S' (if any),
    // used as the first control point of a following 'S'
    pub cubic_reflection: Option<Point>,
    // reflected control point of the previous 'Q'/'T' (if any)
    pub quad_reflection: Option<Point>,
}

impl CursorState {
    /// Resolve a coordinate pair, relative to the current point if needed
    pub fn resolve(&self, absolute: bool, x: f64, y: f64) -> Point {
        if absolute {
            Point::new(x, y)
        } else {
            self.current.offset(x, y)
        }
    }

    fn cleared(&self, current: Point) -> Self {
        Self {
            current,
            start: self.start,
            cubic_reflection: None,
            quad_reflection: None,
        }
    }
}

/// Result of a drawing command: the new state and the vertices to append,
/// not including the (already present) current point.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: CursorState,
    pub vertices: Vec<Point>,
}

/// Start a new subpath; reflections never carry over a moveto.
pub fn move_to(to: Point) -> CursorState {
    CursorState {
        current: to,
        start: to,
        cubic_reflection: None,
        quad_reflection: None,
    }
}

pub fn close_path(state: &CursorState) -> CursorState {
    state.cleared(state.start)
}

pub fn line_to(state: &CursorState, to: Point) -> Step {
    Step {
        state: state.cleared(to),
        vertices: vec![to],
    }
}

pub fn cubic_to(state: &CursorState, c1: Point, c2: Point, to: Point, tolerance: f64) -> Step {
    let mut vertices = flatten_cubic(state.current, c1, c2, to, tolerance);
    vertices.remove(0);
    Step {
        state: CursorState {
            current: to,
            start: state.start,
            cubic_reflection: Some(c2.reflect_about(to)),
            quad_reflection: None,
        },
        vertices,
    }
}

/// Cubic whose first control point mirrors the previous cubic's second
/// one; with no previous cubic it coincides with the current point.
pub fn smooth_cubic_to(state: &CursorState, c2: Point, to: Point, tolerance: f64) -> Step {
    let c1 = state.cubic_reflection.unwrap_or(state.current);
    cubic_to(state, c1, c2, to, tolerance)
}

pub fn quad_to(state: &CursorState, ctrl: Point, to: Point, tolerance: f64) -> Step {
    let mut vertices = flatten_quadratic(state.current, ctrl, to, tolerance);
    vertices.remove(0);
    Step {
        state: CursorState {
            current: to,
            start: state.start,
            cubic_reflection: None,
            quad_reflection: Some(ctrl.reflect_about(to)),
        },
        vertices,
    }
}

pub fn smooth_quad_to(state: &CursorState, to: Point, tolerance: f64) -> Step {
    let ctrl = state.quad_reflection.unwrap_or(state.current);
    quad_to(state, ctrl, to, tolerance)
}

pub fn arc_to(
    state: &CursorState,
    radii: (f64, f64),
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    to: Point,
    tolerance: f64,
) -> Step {
    let arc = EndpointArc {
        from: state.current,
        to,
        radii,
        x_axis_rotation,
        large_arc,
        sweep,
    };
    let mut vertices = flatten_arc(&arc, tolerance);
    vertices.remove(0);
    Step {
        state: state.cleared(to),
        vertices,
    }
}

/// Flattened output of one path data string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathGeometry {
    pub subpaths: Vec<Subpath>,
    pub warnings: Vec<PathWarning>,
}

struct PathInterpreter<'a, F> {
    tokens: PathSyntax<'a>,
    state: CursorState,
    // most recent command letter; bare operands repeat it
    command: Option<char>,
    open: Option<Subpath>,
    output: PathGeometry,
    tolerance: f64,
    xf: F,
}

/// Interpret SVG path data, flattening curves to within `tolerance`
/// (in source units) and mapping every vertex through `xf`.
///
/// Problems are reported as warnings; a malformed moveto abandons the
/// remainder of the string but keeps what was already built.
pub fn interpret_path<F>(data: &str, tolerance: f64, xf: F) -> PathGeometry
where
    F: Fn(Point) -> Point,
{
    let mut interp = PathInterpreter {
        tokens: PathSyntax::new(data),
        state: CursorState::default(),
        command: None,
        open: None,
        output: PathGeometry::default(),
        tolerance,
        xf,
    };
    interp.run();
    log::trace!(
        "path: {} subpaths, {} vertices, {} warnings",
        interp.output.subpaths.len(),
        interp.output.subpaths.iter().map(Subpath::len).sum::<usize>(),
        interp.output.warnings.len()
    );
    interp.output
}

impl<F> PathInterpreter<'_, F>
where
    F: Fn(Point) -> Point,
{
    fn run(&mut self) {
        while let Some(token) = self.tokens.next_token() {
            let letter = match token {
                Token::Command(c) => {
                    self.command = Some(c);
                    c
                }
                Token::Operands => match self.command {
                    Some(c) => c,
                    None => {
                        self.tokens.skip_operands();
                        self.warn(PathWarning::StrayOperands(None));
                        continue;
                    }
                },
            };
            let Some(cmd) = PathCommand::from_letter(letter) else {
                if token == Token::Operands {
                    // operands of an unsupported command; already reported
                    self.tokens.skip_operands();
                } else {
                    self.warn(PathWarning::Unsupported(letter));
                }
                continue;
            };
            if !self.process(cmd, token) {
                break;
            }
        }
        self.finish_subpath();
    }

    /// Handle one command; returns false if interpretation must stop.
    fn process(&mut self, cmd: PathCommand, token: Token) -> bool {
        let state = self.state;
        let abs = cmd.absolute;
        let tol = self.tolerance;
        let step = match cmd.kind {
            CommandKind::MoveTo => {
                let Some([x, y]) = self.tokens.read_numbers() else {
                    self.warn(PathWarning::BadMoveTo);
                    return false;
                };
                self.state = move_to(state.resolve(abs, x, y));
                self.finish_subpath();
                self.open = Some(Subpath::new((self.xf)(self.state.current)));
                self.command = Some(cmd.repeated().letter());
                return true;
            }
            CommandKind::Close => {
                if token == Token::Operands {
                    self.tokens.skip_operands();
                    self.warn(PathWarning::StrayOperands(Some(cmd.letter())));
                    return true;
                }
                if let Some(mut sp) = self.open.take() {
                    sp.close();
                    self.output.subpaths.push(sp);
                }
                self.state = close_path(&state);
                return true;
            }
            CommandKind::LineTo => self
                .tokens
                .read_numbers()
                .map(|[x, y]| line_to(&state, state.resolve(abs, x, y))),
            CommandKind::HorizontalTo => self.tokens.read_number().map(|x| {
                let x = if abs { x } else { state.current.x + x };
                line_to(&state, Point::new(x, state.current.y))
            }),
            CommandKind::VerticalTo => self.tokens.read_number().map(|y| {
                let y = if abs { y } else { state.current.y + y };
                line_to(&state, Point::new(state.current.x, y))
            }),
            CommandKind::CubicTo => self.tokens.read_numbers().map(|[x1, y1, x2, y2, x, y]| {
                let c1 = state.resolve(abs, x1, y1);
                let c2 = state.resolve(abs, x2, y2);
                cubic_to(&state, c1, c2, state.resolve(abs, x, y), tol)
            }),
            CommandKind::SmoothCubicTo => self.tokens.read_numbers().map(|[x2, y2, x, y]| {
                let c2 = state.resolve(abs, x2, y2);
                smooth_cubic_to(&state, c2, state.resolve(abs, x, y), tol)
            }),
            CommandKind::QuadTo => self.tokens.read_numbers().map(|[x1, y1, x, y]| {
                let c1 = state.resolve(abs, x1, y1);
                quad_to(&state, c1, state.resolve(abs, x, y), tol)
            }),
            CommandKind::SmoothQuadTo => self
                .tokens
                .read_numbers()
                .map(|[x, y]| smooth_quad_to(&state, state.resolve(abs, x, y), tol)),
            CommandKind::ArcTo => self.read_arc().map(|(rx, ry, rot, large, sweep, x, y)| {
                arc_to(&state, (rx, ry), rot, large, sweep, state.resolve(abs, x, y), tol)
            }),
        };

        match step {
            Some(step) => {
                self.state = step.state;
                for pt in step.vertices {
                    self.append(pt);
                }
            }
            None => self.warn(PathWarning::BadOperands(cmd.letter())),
        }
        true
    }

    #[allow(clippy::type_complexity)]
    fn read_arc(&mut self) -> Option<(f64, f64, f64, bool, bool, f64, f64)> {
        let [rx, ry, rot] = self.tokens.read_numbers()?;
        let large = self.tokens.read_flag()?;
        let sweep = self.tokens.read_flag()?;
        let [x, y] = self.tokens.read_numbers()?;
        Some((rx, ry, rot, large, sweep, x, y))
    }

    /// Transform a source-unit vertex and add it to the open subpath,
    /// opening one if needed.
    fn append(&mut self, pt: Point) {
        let pt = (self.xf)(pt);
        match self.open.as_mut() {
            Some(sp) => {
                sp.push(pt);
            }
            None => self.open = Some(Subpath::new(pt)),
        }
    }

    /// Hand off the open subpath (if any) without closing it.
    fn finish_subpath(&mut self) {
        if let Some(sp) = self.open.take() {
            self.output.subpaths.push(sp);
        }
    }

    fn warn(&mut self, warning: PathWarning) {
        log::debug!("path data: {warning}");
        self.output.warnings.push(warning);
    }
}
