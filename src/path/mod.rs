mod arc;
mod flatten;
mod interp;
mod syntax;

pub use arc::{ArcParameterization, CenterArc, EndpointArc};
pub use flatten::{
    arc_segment_count, circle_segment_count, elevate_quadratic, flatten_arc, flatten_circle,
    flatten_cubic, flatten_quadratic,
};
pub use interp::{
    arc_to, close_path, cubic_to, interpret_path, line_to, move_to, quad_to, smooth_cubic_to,
    smooth_quad_to, CursorState, PathGeometry, Step,
};
pub use syntax::{CommandKind, PathCommand, PathSyntax, Token};
