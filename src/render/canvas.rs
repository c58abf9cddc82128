//! Canvas2D painter
//!
//! Paints a [`WheelScene`] onto a 2d context. Draw order is hub first,
//! then wedges, then labels: the wedges are annular and leave the hub
//! visible through their inner cutout.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render::palette::{Rgb, ui};
use crate::render::scene::{Label, Wedge, WheelScene};

const WEDGE_BORDER: &str = "rgba(255, 255, 255, 0.3)";
const LABEL_OUTLINE: &str = "rgba(0, 0, 0, 0.4)";
const LABEL_FONT: &str = "bold 18px Inter, -apple-system, BlinkMacSystemFont, sans-serif";
const PROMPT_FONT_LARGE: &str = "bold 24px Inter, -apple-system, BlinkMacSystemFont, sans-serif";
const PROMPT_FONT_SMALL: &str = "18px Inter, -apple-system, BlinkMacSystemFont, sans-serif";

/// Owns the 2d context of the wheel canvas
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    /// Draw one full frame.
    pub fn paint(&self, scene: &WheelScene) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(scene.viewport.width),
            f64::from(scene.viewport.height),
        );

        if scene.is_placeholder() {
            self.paint_placeholder(scene);
            return;
        }

        self.paint_hub(scene);
        for wedge in &scene.wedges {
            self.paint_wedge(scene, wedge);
        }
        for label in &scene.labels {
            self.paint_label(label);
        }
    }

    fn paint_hub(&self, scene: &WheelScene) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(
            f64::from(scene.center.x),
            f64::from(scene.center.y),
            f64::from(scene.hub_radius),
            0.0,
            TAU,
        )
        .ok();
        ctx.set_fill_style_str(&ui::HUB_FILL.css());
        ctx.fill();
        ctx.set_stroke_style_str(&ui::WHEEL_RING.css());
        ctx.set_line_width(4.0);
        ctx.stroke();
    }

    fn paint_wedge(&self, scene: &WheelScene, wedge: &Wedge) {
        let ctx = &self.ctx;
        let cx = f64::from(scene.center.x);
        let cy = f64::from(scene.center.y);

        ctx.begin_path();
        ctx.arc(
            cx,
            cy,
            f64::from(wedge.outer_radius),
            f64::from(wedge.start),
            f64::from(wedge.end),
        )
        .ok();
        ctx.arc_with_anticlockwise(
            cx,
            cy,
            f64::from(wedge.inner_radius),
            f64::from(wedge.end),
            f64::from(wedge.start),
            true,
        )
        .ok();
        ctx.close_path();

        match self.radial_fill(scene, wedge.color) {
            Some(gradient) => ctx.set_fill_style_canvas_gradient(&gradient),
            None => ctx.set_fill_style_str(&wedge.color.css()),
        }
        ctx.fill();
        ctx.set_stroke_style_str(WEDGE_BORDER);
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    /// Gradient from a lightened tone at the wheel center out to the base
    /// color at the rim.
    fn radial_fill(&self, scene: &WheelScene, color: Rgb) -> Option<CanvasGradient> {
        let cx = f64::from(scene.center.x);
        let cy = f64::from(scene.center.y);
        let gradient = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, f64::from(scene.outer_radius))
            .ok()?;
        gradient.add_color_stop(0.0, &color.lighten(0.3).css()).ok();
        gradient.add_color_stop(1.0, &color.css()).ok();
        Some(gradient)
    }

    fn paint_label(&self, label: &Label) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(f64::from(label.anchor.x), f64::from(label.anchor.y))
            .ok();
        ctx.rotate(f64::from(label.rotation)).ok();
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_stroke_style_str(LABEL_OUTLINE);
        ctx.set_line_width(3.0);
        ctx.stroke_text(&label.text, 0.0, 0.0).ok();
        ctx.set_fill_style_str("#FFFFFF");
        ctx.fill_text(&label.text, 0.0, 0.0).ok();
        ctx.restore();
    }

    /// Empty-wheel prompt: muted disc, rim ring and a two-line hint.
    fn paint_placeholder(&self, scene: &WheelScene) {
        let ctx = &self.ctx;
        let cx = f64::from(scene.center.x);
        let cy = f64::from(scene.center.y);

        ctx.begin_path();
        ctx.arc(cx, cy, f64::from(scene.outer_radius), 0.0, TAU).ok();
        match self.empty_fill(scene) {
            Some(gradient) => ctx.set_fill_style_canvas_gradient(&gradient),
            None => ctx.set_fill_style_str(&ui::EMPTY_RIM.css()),
        }
        ctx.fill();
        ctx.set_stroke_style_str(&ui::WHEEL_RING.css());
        ctx.set_line_width(4.0);
        ctx.stroke();

        ctx.set_fill_style_str(&ui::PROMPT_TEXT.css());
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_font(PROMPT_FONT_LARGE);
        ctx.fill_text("Add participants", cx, cy - 10.0).ok();
        ctx.set_font(PROMPT_FONT_SMALL);
        ctx.fill_text("to start spinning!", cx, cy + 20.0).ok();

        self.paint_hub(scene);
    }

    fn empty_fill(&self, scene: &WheelScene) -> Option<CanvasGradient> {
        let cx = f64::from(scene.center.x);
        let cy = f64::from(scene.center.y);
        let gradient = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, f64::from(scene.outer_radius))
            .ok()?;
        gradient.add_color_stop(0.0, &ui::EMPTY_CENTER.css()).ok();
        gradient.add_color_stop(1.0, &ui::EMPTY_RIM.css()).ok();
        Some(gradient)
    }
}
