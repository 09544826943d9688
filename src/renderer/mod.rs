//! Canvas 2D rendering
//!
//! The renderer consumes a read-only `GameState` snapshot once per frame
//! and never mutates it. World coordinates are centered at the playfield
//! origin with +y toward the far edge; the screen mapping flips y so the
//! player sits at the bottom of the canvas.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Acquire the 2D context. Failure here is fatal at startup; the loop
    /// never starts without a render surface.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn to_screen(&self, pos: Vec2) -> (f64, f64) {
        (
            (pos.x + GAME_WIDTH / 2.0) as f64,
            (GAME_HEIGHT / 2.0 - pos.y) as f64,
        )
    }

    /// Paint the full frame: background, stars, player, bullets, enemies
    pub fn draw(&self, state: &GameState, settings: &Settings) {
        let ctx = &self.ctx;

        ctx.set_fill_style_str("#000000");
        ctx.fill_rect(0.0, 0.0, GAME_WIDTH as f64, GAME_HEIGHT as f64);

        if settings.starfield {
            ctx.set_fill_style_str("#ffffff");
            for star in &state.stars {
                let (x, y) = self.to_screen(star.pos);
                ctx.begin_path();
                let _ = ctx.arc(x, y, 1.5, 0.0, std::f64::consts::TAU);
                ctx.fill();
            }
        }

        self.draw_player(state);

        ctx.set_fill_style_str("#00ff00");
        for bullet in &state.bullets {
            let (x, y) = self.to_screen(bullet.pos);
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        ctx.set_fill_style_str("#ff4444");
        for enemy in &state.enemies {
            let (x, y) = self.to_screen(enemy.pos);
            ctx.save();
            let _ = ctx.translate(x, y);
            // Nose toward the player's edge
            ctx.begin_path();
            ctx.move_to(0.0, 20.0);
            ctx.line_to(-15.0, -15.0);
            ctx.line_to(15.0, -15.0);
            ctx.close_path();
            ctx.fill();
            ctx.restore();
        }
    }

    fn draw_player(&self, state: &GameState) {
        let ctx = &self.ctx;
        let (x, y) = self.to_screen(state.player.pos);

        ctx.save();
        let _ = ctx.translate(x, y);

        ctx.set_fill_style_str("#00ffff");
        ctx.begin_path();
        ctx.move_to(0.0, -20.0);
        ctx.line_to(-15.0, 15.0);
        ctx.line_to(15.0, 15.0);
        ctx.close_path();
        ctx.fill();

        // Engine glow
        ctx.set_fill_style_str("#ffff00");
        ctx.set_global_alpha(0.7);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 20.0, 5.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
        ctx.set_global_alpha(1.0);

        ctx.restore();
    }
}
