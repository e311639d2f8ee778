//! Guillotine Run - a 2D platformer with shared multiplayer presence
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, hazards, camera, presence)
//! - `render`: Opaque draw-surface boundary (read-only view of simulation state)
//!
//! Rendering primitives, asset loading, raw input capture and the presence
//! transport are external collaborators behind trait seams; only the resulting
//! boolean intents and snapshot records cross into the simulation.

pub mod render;
pub mod sim;

pub use sim::{Body, Camera, GameState, Guillotine, Platform, TickInput, Viewport, tick};

/// Game tuning constants
///
/// The simulation integrates per animation frame, so linear quantities are in
/// pixels/frame and accelerations in pixels/frame². Delays are wall-clock
/// milliseconds checked against the caller-supplied monotonic clock.
pub mod consts {
    /// Player body size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Height of the head region (the part a guillotine blade can take)
    pub const HEAD_HEIGHT: f32 = 20.0;

    /// Horizontal run speed (pixels/frame)
    pub const MOVE_SPEED: f32 = 5.0;
    /// Upward jump impulse (pixels/frame)
    pub const JUMP_FORCE: f32 = 15.0;
    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.8;
    /// Multiplicative horizontal damping, applied every frame
    pub const FRICTION: f32 = 0.9;

    /// A body below this y has fallen out of the world and respawns
    pub const FALL_RESPAWN_Y: f32 = 1200.0;
    /// Head-drop animation step while dead (pixels/frame)
    pub const HEAD_FALL_STEP: f32 = 5.0;
    /// Delay between death and the scheduled respawn (ms)
    pub const RESPAWN_DELAY_MS: f64 = 1000.0;

    /// Guillotine frame size
    pub const GUILLOTINE_WIDTH: f32 = 80.0;
    pub const GUILLOTINE_HEIGHT: f32 = 120.0;
    /// Blade size and drop speed (pixels/frame)
    pub const BLADE_HEIGHT: f32 = 40.0;
    pub const BLADE_SPEED: f32 = 15.0;
    /// Delay before a dropped blade retracts (ms)
    pub const BLADE_RESET_DELAY_MS: f64 = 2000.0;
    /// Horizontal center distance that triggers a retracted blade
    pub const TRIGGER_DISTANCE: f32 = 100.0;

    /// Camera offset easing fraction per frame
    pub const CAMERA_SMOOTHING: f32 = 0.05;
    /// Look-ahead accumulator easing fraction per frame
    pub const LOOK_AHEAD_SMOOTHING: f32 = 0.1;
    /// Look-ahead distance per unit of horizontal velocity
    pub const LOOK_AHEAD_AMOUNT: f32 = 50.0;
    /// Camera tilt per unit of horizontal velocity (radians)
    pub const TILT_FACTOR: f32 = 0.0002;

    /// Fixed world bounds framed by the overview camera
    pub const SCENE_MIN_X: f32 = -800.0;
    pub const SCENE_MAX_X: f32 = 1400.0;
    pub const SCENE_MIN_Y: f32 = -150.0;
    pub const SCENE_MAX_Y: f32 = 1000.0;
    /// Extra margin around the scene bounds when fitting the overview
    pub const SCENE_PADDING: f32 = 200.0;
}
