//! Aggregate simulation state

use std::collections::HashMap;

use super::body::Body;
use super::camera::Camera;
use super::hazard::Guillotine;
use super::level;
use super::platform::Platform;
use super::presence::{PeerId, PresenceReconciler, PresenceSnapshot};

/// Everything one frame of simulation reads and mutates.
///
/// The platform and guillotine lists are fixed after construction; the
/// remote-body map is owned by the reconciler and only ever changes when an
/// inbound presence batch is applied between frames.
pub struct GameState {
    pub player: Body,
    pub platforms: Vec<Platform>,
    pub guillotines: Vec<Guillotine>,
    pub camera: Camera,
    pub presence: PresenceReconciler,
    /// Frames simulated so far.
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(local_id: impl Into<PeerId>, local_name: impl Into<String>) -> Self {
        Self {
            player: Body::new(level::PLAYER_SPAWN.x, level::PLAYER_SPAWN.y),
            platforms: level::default_platforms(),
            guillotines: level::default_guillotines(),
            camera: Camera::new(),
            presence: PresenceReconciler::new(local_id, local_name),
            time_ticks: 0,
        }
    }

    /// Apply a complete inbound presence set, atomically with respect to the
    /// frame loop (called between ticks, never during one).
    pub fn apply_presence_batch(&mut self, batch: &HashMap<PeerId, PresenceSnapshot>) {
        self.presence.apply_batch(batch);
    }

    /// Decode and apply a JSON presence batch; malformed payloads are
    /// absorbed with a warning.
    pub fn apply_presence_json(&mut self, payload: &str) {
        self.presence.apply_json(payload);
    }
}
