//! Timed guillotine hazards
//!
//! A guillotine idles with its blade retracted, drops when a live body walks
//! into range, rests at the floor of its frame for a fixed delay, then
//! retracts. While dropping, the blade takes the head of any body whose head
//! region crosses its span.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::timer::OneShot;
use crate::consts::*;

/// Observable phase of the blade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BladePhase {
    /// Blade parked at the top of the frame, armed.
    Retracted,
    /// Blade moving down.
    Dropping,
    /// Blade at the floor, retraction scheduled.
    ResetPending,
}

/// One guillotine: a fixed frame with a vertically travelling blade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guillotine {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Top of the blade, from `y` (retracted) to the frame floor.
    pub blade_y: f32,
    pub is_dropping: bool,
    /// Armed exactly once per drop cycle, when the blade reaches the floor.
    reset_timer: Option<OneShot>,
}

impl Guillotine {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: GUILLOTINE_WIDTH,
            height: GUILLOTINE_HEIGHT,
            blade_y: y,
            is_dropping: false,
            reset_timer: None,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Lowest position the blade top can reach.
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.y + self.height - BLADE_HEIGHT
    }

    pub fn phase(&self) -> BladePhase {
        if self.reset_timer.is_some() {
            BladePhase::ResetPending
        } else if self.is_dropping {
            BladePhase::Dropping
        } else {
            BladePhase::Retracted
        }
    }

    /// Drop the blade if a live body's center is in range and the blade is
    /// fully retracted. A blade mid-drop or mid-reset cannot re-trigger.
    pub fn try_trigger(&mut self, body: &Body) {
        if body.is_dead {
            return;
        }
        let distance = (self.center_x() - body.center_x()).abs();
        if distance < TRIGGER_DISTANCE && !self.is_dropping && self.blade_y == self.y {
            self.is_dropping = true;
            log::debug!("guillotine at ({}, {}) triggered", self.x, self.y);
        }
    }

    /// Advance the blade one frame and poll the retraction timer.
    pub fn step(&mut self, now_ms: f64) {
        if let Some(timer) = &mut self.reset_timer {
            if timer.poll(now_ms) {
                self.reset_timer = None;
                self.is_dropping = false;
                self.blade_y = self.y;
            }
            return;
        }

        if self.is_dropping {
            self.blade_y += BLADE_SPEED;
            if self.blade_y >= self.floor_y() {
                self.blade_y = self.floor_y();
                self.reset_timer = Some(OneShot::after(now_ms, BLADE_RESET_DELAY_MS));
            }
        }
    }

    /// Whether the blade currently catches this body's head: frames overlap
    /// horizontally, the head region crosses the blade span, and the blade is
    /// in motion (a parked blade is harmless).
    pub fn hits(&self, body: &Body) -> bool {
        body.left() < self.x + self.width
            && body.right() > self.x
            && body.top() < self.blade_y + BLADE_HEIGHT
            && body.top() + HEAD_HEIGHT > self.blade_y
            && self.is_dropping
    }
}
