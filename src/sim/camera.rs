//! Smoothed viewport camera
//!
//! Two modes: follow a target body with velocity look-ahead and a slight
//! speed tilt, or zoom out to frame the whole scene (overview). All motion is
//! exponential easing toward the mode's desired pose.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;

/// Viewport size in pixels, read fresh each frame (it changes on resize).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Viewport transform state, continuously eased toward its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World-to-view translation component.
    pub offset: Vec2,
    pub scale: f32,
    pub target_scale: f32,
    /// Smoothed horizontal look-ahead accumulator.
    pub look_ahead_x: f32,
    /// Small tilt derived from the target's horizontal speed.
    pub rotation: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            target_scale: 1.0,
            look_ahead_x: 0.0,
            rotation: 0.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame toward the target body (follow mode) or the fixed
    /// scene bounds (overview mode).
    pub fn update(&mut self, target: &Body, viewport: Viewport, overview: bool) {
        if overview {
            let scene_width = SCENE_MAX_X - SCENE_MIN_X;
            let scene_height = SCENE_MAX_Y - SCENE_MIN_Y;

            // Fit the padded scene, but never zoom in past 1:1.
            let horizontal_scale = viewport.width / (scene_width + SCENE_PADDING);
            let vertical_scale = viewport.height / (scene_height + SCENE_PADDING);
            self.target_scale = horizontal_scale.min(vertical_scale).min(1.0);

            let center = Vec2::new(
                (SCENE_MIN_X + SCENE_MAX_X) / 2.0,
                (SCENE_MIN_Y + SCENE_MAX_Y) / 2.0,
            );
            let desired = -center + viewport.center();
            self.offset += (desired - self.offset) * CAMERA_SMOOTHING;
        } else {
            self.target_scale = 1.0;

            let target_look_ahead = target.vel.x * LOOK_AHEAD_AMOUNT;
            self.look_ahead_x += (target_look_ahead - self.look_ahead_x) * LOOK_AHEAD_SMOOTHING;

            let desired = Vec2::new(
                -target.pos.x - self.look_ahead_x + viewport.width / 2.0,
                -target.pos.y + viewport.height / 2.0,
            );
            self.offset += (desired - self.offset) * CAMERA_SMOOTHING;
        }

        self.scale += (self.target_scale - self.scale) * CAMERA_SMOOTHING;
        self.rotation = if overview {
            0.0
        } else {
            target.vel.x * TILT_FACTOR
        };
    }

    /// The world-to-view transform for the current pose.
    ///
    /// Applied as: translate to the viewport center, rotate, scale, then
    /// translate by the center-adjusted offset. The order matters; rotation
    /// and zoom pivot on the viewport center.
    pub fn transform(&self, viewport: Viewport) -> Affine2 {
        let center = viewport.center();
        Affine2::from_translation(center)
            * Affine2::from_angle(self.rotation)
            * Affine2::from_scale(Vec2::splat(self.scale))
            * Affine2::from_translation(self.offset - center)
    }
}
