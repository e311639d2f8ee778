//! Kinematic bodies
//!
//! One `Body` per actor: the locally controlled player, and one mirror per
//! connected remote peer. Movement intents set velocity, `integrate` advances
//! it by one frame, and death/respawn is driven by a polled one-shot timer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::timer::OneShot;
use crate::consts::*;

/// Cosmetic hair-swirl control points, animated from the clock and the
/// movement direction. Read by the renderer only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HairSwirl {
    pub control: Vec2,
    pub end: Vec2,
}

impl Default for HairSwirl {
    fn default() -> Self {
        Self {
            control: Vec2::new(0.0, -15.0),
            end: Vec2::new(15.0, -10.0),
        }
    }
}

/// Position/velocity state for one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_jumping: bool,
    pub is_dead: bool,
    /// Instant of the most recent death (ms), cleared by respawn.
    pub death_time: Option<f64>,
    /// Head-drop animation progress while dead.
    pub head_offset: f32,
    /// Immutable origin the body returns to on respawn.
    spawn: Vec2,
    /// Pending death-respawn deadline. Deliberately not cancelled by an
    /// interim fall-respawn; respawn itself is idempotent.
    respawn_timer: Option<OneShot>,
    pub hair: HairSwirl,
}

impl Body {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            is_jumping: false,
            is_dead: false,
            death_time: None,
            head_offset: 0.0,
            spawn: Vec2::new(x, y),
            respawn_timer: None,
            hair: HairSwirl::default(),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn move_left(&mut self) {
        if !self.is_dead {
            self.vel.x = -MOVE_SPEED;
        }
    }

    pub fn move_right(&mut self) {
        if !self.is_dead {
            self.vel.x = MOVE_SPEED;
        }
    }

    /// Start a jump. Guarded against double-jump: only fires while alive and
    /// grounded (not already jumping).
    pub fn jump(&mut self) {
        if !self.is_dead && !self.is_jumping {
            self.vel.y = -JUMP_FORCE;
            self.is_jumping = true;
        }
    }

    /// Kill the body and arm a one-shot respawn. Idempotent while dead: a
    /// second call neither reschedules the respawn nor touches `death_time`.
    pub fn die(&mut self, now_ms: f64) {
        if !self.is_dead {
            self.is_dead = true;
            self.death_time = Some(now_ms);
            self.respawn_timer = Some(OneShot::after(now_ms, RESPAWN_DELAY_MS));
        }
    }

    /// Return to the spawn point with all transient state cleared.
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.vel = Vec2::ZERO;
        self.is_jumping = false;
        self.is_dead = false;
        self.death_time = None;
        self.head_offset = 0.0;
    }

    /// Advance one frame.
    ///
    /// Dead bodies only animate the falling head. Live bodies accelerate
    /// under gravity, move by their velocity, shed horizontal speed to
    /// friction every frame, and respawn unconditionally once below the fall
    /// threshold.
    pub fn integrate(&mut self, now_ms: f64) {
        // The queued respawn fires even if a fall-respawn already brought the
        // body back in the meantime.
        if let Some(timer) = &mut self.respawn_timer {
            if timer.poll(now_ms) {
                self.respawn_timer = None;
                self.respawn();
            }
        }

        if self.is_dead {
            self.head_offset += HEAD_FALL_STEP;
            return;
        }

        self.vel.y += GRAVITY;
        self.pos += self.vel;
        self.vel.x *= FRICTION;

        if self.pos.y > FALL_RESPAWN_Y {
            self.respawn();
        }

        self.animate_hair(now_ms);
    }

    /// Whether a death-respawn is armed and not yet fired.
    pub fn respawn_pending(&self) -> bool {
        self.respawn_timer.is_some_and(|t| !t.is_spent())
    }

    fn animate_hair(&mut self, now_ms: f64) {
        self.hair.control.y = -15.0 + ((now_ms / 200.0).sin() as f32) * 2.0;
        self.hair.end.y = -10.0 + ((now_ms / 300.0).cos() as f32) * 2.0;

        // Hair trails opposite the movement direction.
        if self.vel.x > 0.5 {
            self.hair.end.x = 15.0;
            self.hair.control.x = 0.0;
        } else if self.vel.x < -0.5 {
            self.hair.end.x = -15.0;
            self.hair.control.x = 0.0;
        }
    }
}
