//! Drives the dark retrofit against a simulated host: installs hooks,
//! opens two map windows with duplicated toolbar controls, and exercises
//! the construction, draw, and interaction seams.
//!
//! Run with `RUST_LOG=debug cargo run --example retrofit` to watch the
//! engine narrate its decisions.

use std::sync::Arc;

use image::RgbaImage;
use veneer_core::{
    DrawEvent, DrawKind, EventKind, Pen, Surface, SurfaceArena, SurfaceId, Widget, WidgetKind,
    WidgetTree,
};
use veneer_engine::retrofit::{host_colors, Retrofit};
use veneer_engine::{
    ButtonRole, GroupKind, HookError, HookHost, Seam, StaticCatalog, SurfaceOrigin,
};

/// A host whose build is missing one fill overload, to show fault-isolated
/// installation.
struct SimHost;

impl HookHost for SimHost {
    fn attach(&mut self, seam: Seam) -> Result<(), HookError> {
        match seam {
            Seam::FillRectangle => Err(HookError::MissingCallPath(
                "FillRectangle(Brush, RectangleF)".into(),
            )),
            _ => Ok(()),
        }
    }
}

struct SimOrigin;

impl SurfaceOrigin for SimOrigin {
    fn is_themed(&self, _surface: SurfaceId) -> bool {
        true
    }
}

fn disc_mask() -> Arc<RgbaImage> {
    let mut mask = RgbaImage::new(16, 16);
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let dx = x as f32 - 7.5;
        let dy = y as f32 - 7.5;
        let alpha = if dx * dx + dy * dy <= 49.0 { 255 } else { 0 };
        *pixel = image::Rgba([0, 0, 0, alpha]);
    }
    Arc::new(mask)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = StaticCatalog::new()
        .with_button(ButtonRole::SpaceMaster, "cmdSM")
        .with_button(ButtonRole::AutoTurns, "cmdToolbarAuto")
        .with_button(ButtonRole::TimeIncrement, "cmdIncrement30D")
        .with_button(ButtonRole::SubPulse, "cmdSubPulse5")
        .with_prefix(GroupKind::TimeIncrement, "cmdIncrement")
        .with_prefix(GroupKind::SubPulse, "cmdSubPulse");

    let mut engine = Retrofit::new()
        .toggle_icon(ButtonRole::SpaceMaster, disc_mask(), disc_mask())
        .toggle_icon(ButtonRole::AutoTurns, disc_mask(), disc_mask())
        .build(Box::new(catalog), Box::new(SimOrigin));

    let report = engine.install_hooks(&mut SimHost);
    println!(
        "hooks: {} installed, {} failed",
        report.installed.len(),
        report.failed.len()
    );

    // The host opens its two map windows.
    let mut tree = WidgetTree::new();
    let tactical = tree.open_window("wndTactical");
    let sm_tactical = tree.insert(tactical, Widget::new(WidgetKind::Button, "cmdSM"));
    tree.insert(tactical, Widget::new(WidgetKind::Button, "cmdIncrement30D"));
    tree.insert(tactical, Widget::new(WidgetKind::Button, "cmdIncrement5D"));
    engine.window_created(&mut tree, tactical);

    let galactic = tree.open_window("wndGalactic");
    let sm_galactic = tree.insert(galactic, Widget::new(WidgetKind::Button, "cmdSM"));
    engine.window_created(&mut tree, galactic);

    // Colors pass through the construction seam on their way to the host.
    println!(
        "legacy text {} now renders as {}",
        host_colors::TEXT,
        engine.intercept_color(host_colors::TEXT)
    );

    // A paint cycle over the tactical map.
    let mut surfaces = SurfaceArena::new();
    let surface = surfaces.create(Surface::default());
    let mut orbit = DrawEvent::pen(
        surface,
        DrawKind::EllipseOutline,
        Pen::hairline(host_colors::TRAIL),
    );
    engine.before_draw(&mut surfaces, &mut orbit);
    println!(
        "orbit ring repainted as {}",
        orbit.tool.pen().expect("pen event").color
    );

    // The user toggles supervisor mode on the foreground (galactic) window;
    // the tactical duplicate follows without re-firing.
    engine.interaction(&mut tree, sm_galactic, EventKind::AppearanceChanged);
    let on = engine
        .toggle(ButtonRole::SpaceMaster)
        .expect("space-master toggle")
        .is_on();
    let mirrored = tree
        .get(sm_tactical)
        .and_then(|w| w.background_image.as_ref())
        .is_some();
    println!("space-master on: {on}; tactical duplicate mirrored: {mirrored}");
}
