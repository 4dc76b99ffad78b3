use crate::core::{FadeRamp, StarField};
use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Canvas2D star layer: owns the star batch, the fade ramp and the surface
/// it draws on.
pub struct StarRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pub field: StarField,
    pub fade: FadeRamp,
    // First frame timestamp of the render loop; twinkle phase runs from here.
    clock_origin: Option<f64>,
}

impl StarRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, fade_duration_ms: f64) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            field: StarField::from_entropy(),
            fade: FadeRamp::new(fade_duration_ms),
            clock_origin: None,
        })
    }

    /// Match the backing store to viewport × device pixel ratio, keep the CSS
    /// size at the viewport, and regenerate the stars for the new area.
    pub fn resize(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let (width, height, dpr) = dom::viewport(&window);
        self.canvas.set_width((width * dpr) as u32);
        self.canvas.set_height((height * dpr) as u32);
        let style = self.canvas.style();
        _ = style.set_property("width", "100%");
        _ = style.set_property("height", "100%");
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        self.field.resize(width, height);
        log::debug!(
            "[stars] resize {:.0}x{:.0} dpr={:.2} count={}",
            self.field.width(),
            self.field.height(),
            dpr,
            self.field.stars.len()
        );
    }

    #[allow(deprecated)]
    pub fn draw_frame(&mut self, timestamp: f64) {
        let origin = *self.clock_origin.get_or_insert(timestamp);
        let elapsed = timestamp - origin;
        let ctx = &self.ctx;

        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        let global_alpha = self.fade.global_alpha();
        ctx.save();
        ctx.set_global_alpha(global_alpha);

        self.field.advance();
        for star in &self.field.stars {
            let alpha = star.twinkle_alpha(elapsed);
            ctx.begin_path();
            ctx.set_fill_style(&JsValue::from_str(star.color.css()));
            ctx.set_global_alpha(alpha * global_alpha);
            _ = ctx.arc(star.position.x, star.position.y, star.radius, 0.0, TAU);
            ctx.fill();
        }

        ctx.restore();
    }
}
