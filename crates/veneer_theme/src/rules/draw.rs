//! Draw-primitive rules
//!
//! Per-geometry pipelines of mutation stages. Stages are unconditional and
//! run in registration order; each sees the pen or brush as the previous
//! stages left it. Discrimination inside a stage is the stage's own
//! business (pen width, exact color identity, whatever the call site
//! needs), which is what lets one stage restore a color a global
//! construction rule already rewrote.

use rustc_hash::FxHashMap;
use veneer_core::{Brush, DrawKind, PaintTool, Pen, Surface};

use crate::palette::ThemePalette;

/// One pen-mutation stage
pub type PenStage = Box<dyn Fn(&mut Surface, &mut Pen, &ThemePalette) + Send + Sync>;

/// One brush-mutation stage
pub type BrushStage = Box<dyn Fn(&mut Surface, &mut Brush, &ThemePalette) + Send + Sync>;

/// Registration-ordered draw pipelines, one per geometry kind
#[derive(Default)]
pub struct DrawRules {
    pens: FxHashMap<DrawKind, Vec<PenStage>>,
    brushes: FxHashMap<DrawKind, Vec<BrushStage>>,
}

impl DrawRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pen stage to `kind`'s pipeline
    pub fn on_pen<F>(&mut self, kind: DrawKind, stage: F)
    where
        F: Fn(&mut Surface, &mut Pen, &ThemePalette) + Send + Sync + 'static,
    {
        self.pens.entry(kind).or_default().push(Box::new(stage));
    }

    /// Append a brush stage to `kind`'s pipeline
    pub fn on_brush<F>(&mut self, kind: DrawKind, stage: F)
    where
        F: Fn(&mut Surface, &mut Brush, &ThemePalette) + Send + Sync + 'static,
    {
        self.brushes.entry(kind).or_default().push(Box::new(stage));
    }

    /// Run the pipeline for one intercepted draw call, mutating the tool in
    /// place before the host's underlying draw executes
    pub fn apply(
        &self,
        kind: DrawKind,
        surface: &mut Surface,
        tool: &mut PaintTool,
        palette: &ThemePalette,
    ) {
        match tool {
            PaintTool::Pen(pen) => {
                if let Some(stages) = self.pens.get(&kind) {
                    for stage in stages {
                        stage(surface, pen, palette);
                    }
                }
            }
            PaintTool::Brush(brush) => {
                if let Some(stages) = self.brushes.get(&kind) {
                    for stage in stages {
                        stage(surface, brush, palette);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{Color, Smoothing};

    #[test]
    fn stages_run_in_registration_order() {
        let palette = ThemePalette::default();
        let mut rules = DrawRules::new();
        rules.on_pen(DrawKind::Line, |_, pen, _| {
            pen.color = Color::rgb(1, 0, 0);
        });
        rules.on_pen(DrawKind::Line, |_, pen, _| {
            // Only fires on the previous stage's output.
            if pen.color == Color::rgb(1, 0, 0) {
                pen.color = Color::rgb(2, 0, 0);
            }
        });

        let mut surface = Surface::default();
        let mut tool = PaintTool::Pen(Pen::hairline(Color::BLACK));
        rules.apply(DrawKind::Line, &mut surface, &mut tool, &palette);
        assert_eq!(tool.pen().unwrap().color, Color::rgb(2, 0, 0));
    }

    #[test]
    fn pipelines_are_scoped_per_geometry_kind() {
        let palette = ThemePalette::default();
        let mut rules = DrawRules::new();
        rules.on_pen(DrawKind::EllipseOutline, |_, pen, _| {
            pen.color = Color::WHITE;
        });

        let mut surface = Surface::default();
        let mut tool = PaintTool::Pen(Pen::hairline(Color::BLACK));
        rules.apply(DrawKind::Line, &mut surface, &mut tool, &palette);
        assert_eq!(tool.pen().unwrap().color, Color::BLACK);
    }

    #[test]
    fn brush_stage_can_raise_surface_smoothing() {
        let palette = ThemePalette::default();
        let mut rules = DrawRules::new();
        rules.on_brush(DrawKind::EllipseFill, |surface, _, _| {
            surface.smoothing = Smoothing::AntiAlias;
        });

        let mut surface = Surface::default();
        let mut tool = PaintTool::Brush(Brush::from(Color::WHITE));
        rules.apply(DrawKind::EllipseFill, &mut surface, &mut tool, &palette);
        assert_eq!(surface.smoothing, Smoothing::AntiAlias);
    }

    #[test]
    fn pen_width_discriminates_same_colored_lines() {
        let palette = ThemePalette::default();
        let mut rules = DrawRules::new();
        let trail = Color::rgb(50, 205, 50);
        rules.on_pen(DrawKind::Line, move |_, pen, _| {
            if pen.color == trail && pen.width == 1.0 {
                pen.color = Color::rgba(128, 128, 128, 128);
            }
        });

        let mut surface = Surface::default();

        let mut thin = PaintTool::Pen(Pen::hairline(trail));
        rules.apply(DrawKind::Line, &mut surface, &mut thin, &palette);
        assert_eq!(thin.pen().unwrap().color, Color::rgba(128, 128, 128, 128));

        let mut thick = PaintTool::Pen(Pen::new(trail, 3.0));
        rules.apply(DrawKind::Line, &mut surface, &mut thick, &palette);
        assert_eq!(thick.pen().unwrap().color, trail);
    }
}
