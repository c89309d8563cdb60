//! Draw-primitive values crossing the interception seams
//!
//! A [`DrawEvent`] is the engine's view of one intercepted draw call: which
//! surface, which geometry class, and the pen or brush about to be used. It
//! exists only for the duration of that call; the engine mutates the tool in
//! place and the host then draws with whatever is left in it.

use crate::color::Color;
use crate::surface::SurfaceId;

/// Pen used for outline primitives
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
}

impl Pen {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// One-pixel pen, the width the host uses for orbital and comet paths
    pub fn hairline(color: Color) -> Self {
        Self::new(color, 1.0)
    }
}

/// Gradient stop, for brushes the engine observes but never rewrites
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Brush for filled primitives
///
/// Only solid brushes participate in color rewriting; gradient brushes pass
/// through every rule untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Vec<GradientStop>),
}

impl Brush {
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Brush::Solid(color) => Some(*color),
            Brush::Gradient(_) => None,
        }
    }

    /// Replace the color of a solid brush; no-op on gradients
    pub fn set_solid_color(&mut self, color: Color) {
        if let Brush::Solid(c) = self {
            *c = color;
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Geometry classes of intercepted draw calls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Line,
    EllipseOutline,
    EllipseFill,
    RectOutline,
    RectFill,
    Text,
}

/// The pen or brush in flight for one draw call
#[derive(Clone, Debug, PartialEq)]
pub enum PaintTool {
    Pen(Pen),
    Brush(Brush),
}

impl PaintTool {
    pub fn pen(&self) -> Option<&Pen> {
        match self {
            PaintTool::Pen(pen) => Some(pen),
            PaintTool::Brush(_) => None,
        }
    }

    pub fn brush(&self) -> Option<&Brush> {
        match self {
            PaintTool::Brush(brush) => Some(brush),
            PaintTool::Pen(_) => None,
        }
    }
}

/// One intercepted draw-primitive invocation. Not persisted anywhere; lives
/// only across the call it describes.
#[derive(Clone, Debug)]
pub struct DrawEvent {
    pub surface: SurfaceId,
    pub kind: DrawKind,
    pub tool: PaintTool,
}

impl DrawEvent {
    pub fn pen(surface: SurfaceId, kind: DrawKind, pen: Pen) -> Self {
        Self {
            surface,
            kind,
            tool: PaintTool::Pen(pen),
        }
    }

    pub fn brush(surface: SurfaceId, kind: DrawKind, brush: Brush) -> Self {
        Self {
            surface,
            kind,
            tool: PaintTool::Brush(brush),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_brush_color_access() {
        let mut brush = Brush::from(Color::rgb(255, 0, 0));
        assert_eq!(brush.solid_color(), Some(Color::rgb(255, 0, 0)));
        brush.set_solid_color(Color::BLACK);
        assert_eq!(brush.solid_color(), Some(Color::BLACK));
    }

    #[test]
    fn gradient_brush_never_rewrites() {
        let mut brush = Brush::Gradient(vec![GradientStop {
            offset: 0.0,
            color: Color::WHITE,
        }]);
        brush.set_solid_color(Color::BLACK);
        assert_eq!(brush.solid_color(), None);
        assert!(matches!(brush, Brush::Gradient(_)));
    }
}
