//! Render boundary
//!
//! The draw surface is opaque to the simulation: a canvas-like sink of
//! rectangles, curves and sprite blits behind a trait. Draw functions only
//! read simulation state, and a sprite that has not finished loading falls
//! back to a flat placeholder fill rather than failing the frame.

use glam::{Affine2, Vec2};

use crate::consts::*;
use crate::sim::{Body, Camera, Guillotine, Platform, Viewport};

/// RGBA color, 0..1 per channel.
pub type Color = [f32; 4];

pub const BODY_BLUE: Color = [0.29, 0.56, 0.89, 1.0];
pub const BODY_SHADE: Color = [0.21, 0.48, 0.74, 1.0];
pub const HAIR_ORANGE: Color = [1.0, 0.5, 0.0, 1.0];
pub const BLOOD_RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const FACE_BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const FRAME_BROWN: Color = [0.55, 0.27, 0.07, 1.0];
pub const BLADE_STEEL: Color = [0.75, 0.75, 0.75, 1.0];
pub const PLATFORM_GREEN: Color = [0.3, 0.65, 0.3, 1.0];

const HAIR_THICKNESS: f32 = 6.0;

/// Sprites the surface may or may not have loaded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    GuillotineBlade,
}

/// An opaque draw target supplied by the host.
pub trait DrawSurface {
    /// Set the world-to-view transform for subsequent draws.
    fn set_transform(&mut self, transform: Affine2);
    fn fill_rect(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32);
    /// Quadratic curve from `from` to `to` bending toward `control`.
    fn stroke_curve(&mut self, color: Color, thickness: f32, from: Vec2, control: Vec2, to: Vec2);
    /// Blit a sprite. Returns false while the asset is still loading, in
    /// which case the caller draws a placeholder instead.
    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32, width: f32, height: f32) -> bool;
}

/// Install the camera's transform on the surface for world-space drawing.
pub fn apply_camera(camera: &Camera, viewport: Viewport, surface: &mut dyn DrawSurface) {
    surface.set_transform(camera.transform(viewport));
}

pub fn draw_platform(platform: &Platform, surface: &mut dyn DrawSurface) {
    surface.fill_rect(
        PLATFORM_GREEN,
        platform.x,
        platform.y,
        platform.width,
        platform.height,
    );
}

pub fn draw_guillotine(hazard: &Guillotine, surface: &mut dyn DrawSurface) {
    // Frame: two posts and the top beam.
    surface.fill_rect(FRAME_BROWN, hazard.x, hazard.y, 10.0, hazard.height);
    surface.fill_rect(
        FRAME_BROWN,
        hazard.x + hazard.width - 10.0,
        hazard.y,
        10.0,
        hazard.height,
    );
    surface.fill_rect(FRAME_BROWN, hazard.x, hazard.y, hazard.width, 10.0);

    // Blade sprite, flat steel while the image loads.
    if !surface.draw_sprite(
        SpriteId::GuillotineBlade,
        hazard.x,
        hazard.blade_y,
        hazard.width,
        BLADE_HEIGHT,
    ) {
        surface.fill_rect(BLADE_STEEL, hazard.x, hazard.blade_y, hazard.width, BLADE_HEIGHT);
    }
}

pub fn draw_body(body: &Body, surface: &mut dyn DrawSurface) {
    if body.is_dead {
        // Torso without the head.
        surface.fill_rect(
            BODY_BLUE,
            body.pos.x,
            body.pos.y + HEAD_HEIGHT,
            body.width,
            body.height - HEAD_HEIGHT,
        );
        // The head, falling away with its hair.
        let head_y = body.pos.y + body.head_offset;
        surface.fill_rect(BODY_BLUE, body.pos.x, head_y, body.width, HEAD_HEIGHT);
        let anchor = Vec2::new(body.pos.x + body.width / 2.0, head_y);
        surface.stroke_curve(
            HAIR_ORANGE,
            HAIR_THICKNESS,
            anchor,
            anchor + body.hair.control,
            anchor + body.hair.end,
        );
        surface.fill_rect(
            BLOOD_RED,
            body.pos.x,
            body.pos.y + HEAD_HEIGHT,
            body.width,
            5.0,
        );
    } else {
        surface.fill_rect(BODY_BLUE, body.pos.x, body.pos.y, body.width, body.height);
        // Right-edge shading.
        surface.fill_rect(
            BODY_SHADE,
            body.pos.x + body.width * 0.8,
            body.pos.y,
            body.width * 0.2,
            body.height,
        );
        let anchor = Vec2::new(body.pos.x + body.width / 2.0, body.pos.y);
        surface.stroke_curve(
            HAIR_ORANGE,
            HAIR_THICKNESS,
            anchor,
            anchor + body.hair.control,
            anchor + body.hair.end,
        );
        // Eye and mouth.
        surface.fill_rect(
            FACE_BLACK,
            body.pos.x + body.width * 0.6,
            body.pos.y + 15.0,
            4.0,
            4.0,
        );
        surface.fill_rect(
            FACE_BLACK,
            body.pos.x + body.width * 0.6,
            body.pos.y + 25.0,
            8.0,
            2.0,
        );
    }
}
