//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and testable:
//! - One update per animation frame, in a fixed order
//! - Time is a parameter (monotonic milliseconds), never read from the OS
//! - Deferred mutations are polled one-shot timers, not OS timers
//! - No rendering or transport dependencies (both are trait seams)

pub mod body;
pub mod camera;
pub mod collision;
pub mod hazard;
pub mod level;
pub mod platform;
pub mod presence;
pub mod state;
pub mod tick;
pub mod timer;

pub use body::{Body, HairSwirl};
pub use camera::{Camera, Viewport};
pub use collision::{overlaps, resolve, resolve_against};
pub use hazard::{BladePhase, Guillotine};
pub use platform::Platform;
pub use presence::{
    LoopbackChannel, PeerId, PresenceChannel, PresenceReconciler, PresenceSnapshot,
};
pub use state::GameState;
pub use tick::{TickInput, tick};
pub use timer::OneShot;
