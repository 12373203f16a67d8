//! Rendering: draws the map's vector layers to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of [`MapCore`] and produces pixels; it does
//! not mutate any map state. Tiles are not drawn here.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The host decides what to do with a failed frame.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, CanvasWindingRule, HtmlCanvasElement};

use crate::camera::Camera;
use crate::engine::MapCore;
use crate::geo::Feature;
use crate::layers::LayerKind;

/// Fill/stroke style for one layer kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub fill: &'static str,
    pub fill_opacity: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

/// Style used for city boundary outlines.
pub const BOUNDARY_STYLE: LayerStyle =
    LayerStyle { fill: "#c84041", fill_opacity: 0.0, stroke: "#c84041", stroke_width: 4.0 };

/// Style used for parking lot polygons.
pub const DETAIL_STYLE: LayerStyle =
    LayerStyle { fill: "#FF0000", fill_opacity: 0.6, stroke: "#FF0000", stroke_width: 1.0 };

/// Style for a layer kind.
#[must_use]
pub fn style_for(kind: LayerKind) -> LayerStyle {
    match kind {
        LayerKind::Boundaries => BOUNDARY_STYLE,
        LayerKind::Detail => DETAIL_STYLE,
    }
}

/// Canvas element plus its 2D context.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    /// Bind a renderer to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store for `width` x `height` CSS pixels at `dpr`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&self, width: f64, height: f64, dpr: f64) {
        self.canvas.set_width((width * dpr).round() as u32);
        self.canvas.set_height((height * dpr).round() as u32);
    }

    /// Draw every visible layer of `core` bottom-first.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn draw(&self, core: &MapCore, dpr: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let camera = &core.camera;
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, camera.width, camera.height);

        let view = camera.bounds();
        for layer in core.layers.iter_visible() {
            let style = style_for(layer.kind);
            for feature in &layer.data.features {
                if feature.bounds().is_some_and(|b| b.intersects(&view)) {
                    draw_feature(ctx, camera, feature, style);
                }
            }
        }
        Ok(())
    }
}

fn draw_feature(ctx: &CanvasRenderingContext2d, camera: &Camera, feature: &Feature, style: LayerStyle) {
    ctx.begin_path();
    for rings in feature.geometry.polygons() {
        for ring in rings {
            let mut points = ring.iter().map(|ll| camera.lat_lng_to_container_point(*ll));
            let Some(first) = points.next() else {
                continue;
            };
            ctx.move_to(first.x, first.y);
            for p in points {
                ctx.line_to(p.x, p.y);
            }
            ctx.close_path();
        }
    }

    if style.fill_opacity > 0.0 {
        ctx.set_global_alpha(style.fill_opacity);
        ctx.set_fill_style_str(style.fill);
        ctx.fill_with_canvas_winding_rule(CanvasWindingRule::Evenodd);
        ctx.set_global_alpha(1.0);
    }
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(style.stroke_width);
    ctx.stroke();
}
