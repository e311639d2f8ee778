//! Per-frame simulation pass
//!
//! One call to [`tick`] advances the world by one animation frame in a fixed
//! order: apply intents, integrate the local body, animate remote deaths,
//! update hazards against every body, resolve platform collisions, update
//! the camera, publish presence. Nothing in the pass blocks or panics; a
//! frame always runs to completion.

use super::camera::Viewport;
use super::collision;
use super::presence::PresenceChannel;
use super::state::GameState;
use crate::consts::HEAD_FALL_STEP;

/// Frame-local boolean intents, decoupled from the input device that
/// produced them. Sourced once per frame by the host harness.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Frame the whole scene instead of following the player.
    pub overview: bool,
}

/// Advance the simulation by one frame.
///
/// `now_ms` is the host's monotonic clock; it drives the deferred respawn
/// and blade-reset timers, which are polled here rather than scheduled with
/// the OS.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    viewport: Viewport,
    now_ms: f64,
    channel: &mut dyn PresenceChannel,
) {
    // Intents. The body ignores them while dead.
    if input.left {
        state.player.move_left();
    }
    if input.right {
        state.player.move_right();
    }
    if input.jump {
        state.player.jump();
    }

    state.player.integrate(now_ms);

    // Remote bodies are authoritative from their snapshots; between updates
    // only the death animation advances locally.
    for (_, body) in state.presence.remote_bodies_mut() {
        if body.is_dead {
            body.head_offset += HEAD_FALL_STEP;
        }
    }

    // Hazards see every body, local and remote, once per frame.
    for hazard in &mut state.guillotines {
        hazard.try_trigger(&state.player);
        for (_, body) in state.presence.remote_bodies() {
            hazard.try_trigger(body);
        }

        hazard.step(now_ms);

        if hazard.hits(&state.player) {
            state.player.die(now_ms);
        }
        for (peer, body) in state.presence.remote_bodies_mut() {
            if hazard.hits(body) {
                log::debug!("remote peer {peer} lost their head");
                body.die(now_ms);
            }
        }
    }

    // Only the locally authoritative body is resolved against geometry.
    collision::resolve_against(&mut state.player, &state.platforms);

    state.camera.update(&state.player, viewport, input.overview);

    state.presence.publish_local(&state.player, channel);

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::hazard::BladePhase;
    use crate::sim::platform::Platform;
    use crate::sim::presence::{LoopbackChannel, PresenceSnapshot};
    use std::collections::HashMap;

    const VIEW: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Bare world: no platforms, no hazards, player at the origin.
    fn bare_state() -> GameState {
        let mut state = GameState::new("me", "Oligarchy");
        state.platforms.clear();
        state.guillotines.clear();
        state.player = crate::sim::Body::new(0.0, 0.0);
        state
    }

    fn run_frames(state: &mut GameState, input: &TickInput, frames: u32, start_ms: f64) -> f64 {
        let mut channel = LoopbackChannel::default();
        let mut now = start_ms;
        for _ in 0..frames {
            tick(state, input, VIEW, now, &mut channel);
            now += FRAME_MS;
        }
        now
    }

    #[test]
    fn test_lands_exactly_on_platform_top() {
        let mut state = bare_state();
        state.platforms.push(Platform::new(0.0, 50.0, 100.0, 20.0));

        run_frames(&mut state, &TickInput::default(), 30, 0.0);

        assert_eq!(state.player.pos.y, 50.0 - state.player.height);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(!state.player.is_jumping);
    }

    #[test]
    fn test_intents_move_and_jump() {
        let mut state = bare_state();
        state.platforms.push(Platform::new(-500.0, 60.0, 1000.0, 40.0));
        // Settle on the ground first.
        run_frames(&mut state, &TickInput::default(), 10, 0.0);
        let grounded_y = state.player.pos.y;

        let input = TickInput {
            right: true,
            jump: true,
            ..Default::default()
        };
        run_frames(&mut state, &input, 3, 1000.0);
        assert!(state.player.pos.x > 0.0);
        assert!(state.player.pos.y < grounded_y);
    }

    #[test]
    fn test_hazard_beheads_and_respawn_follows() {
        let mut state = bare_state();
        // Floor directly under a guillotine, player standing in range.
        state.platforms.push(Platform::new(-500.0, 120.0, 1000.0, 40.0));
        state
            .guillotines
            .push(crate::sim::Guillotine::new(-40.0, -20.0));
        state.player.pos.y = 120.0 - state.player.height;

        let after = run_frames(&mut state, &TickInput::default(), 20, 0.0);
        assert!(state.player.is_dead);
        assert!(state.player.death_time.is_some());
        let died_at = state.player.death_time.unwrap();

        // Head falls while dead, no physics.
        let head_before = state.player.head_offset;
        run_frames(&mut state, &TickInput::default(), 1, after);
        assert_eq!(state.player.head_offset, head_before + HEAD_FALL_STEP);

        // Respawn fires after the fixed delay.
        run_frames(
            &mut state,
            &TickInput::default(),
            1,
            died_at + RESPAWN_DELAY_MS,
        );
        assert!(!state.player.is_dead);
        assert_eq!(state.player.head_offset, 0.0);
    }

    #[test]
    fn test_remote_bodies_trigger_and_die() {
        let mut state = bare_state();
        let hazard_x = 600.0;
        state
            .guillotines
            .push(crate::sim::Guillotine::new(hazard_x, 0.0));

        // A remote peer parked under the blade; the local player is far away.
        let mut batch = HashMap::new();
        batch.insert(
            "p1".to_string(),
            PresenceSnapshot {
                x: hazard_x + 20.0,
                y: 30.0,
                velocity_x: 0.0,
                velocity_y: 0.0,
                is_dead: false,
                head_offset: 0.0,
                name: "peer".to_string(),
            },
        );
        state.apply_presence_batch(&batch);

        let mut channel = LoopbackChannel::default();
        tick(
            &mut state,
            &TickInput::default(),
            VIEW,
            0.0,
            &mut channel,
        );
        assert_eq!(state.guillotines[0].phase(), BladePhase::Dropping);
        assert!(!state.player.is_dead);

        // Blade reaches the head region within a few frames.
        let mut now = FRAME_MS;
        for _ in 0..10 {
            tick(
                &mut state,
                &TickInput::default(),
                VIEW,
                now,
                &mut channel,
            );
            now += FRAME_MS;
        }
        assert!(state.presence.remote_body("p1").unwrap().is_dead);
    }

    #[test]
    fn test_publishes_full_snapshot_every_frame() {
        let mut state = bare_state();
        let mut channel = LoopbackChannel::default();
        let mut now = 0.0;
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), VIEW, now, &mut channel);
            now += FRAME_MS;
        }
        assert_eq!(channel.sent.len(), 5);
        let last = channel.sent.last().unwrap();
        assert_eq!(last.x, state.player.pos.x);
        assert_eq!(last.y, state.player.pos.y);
        assert_eq!(last.name, "Oligarchy");
        assert_eq!(state.time_ticks, 5);
    }

    #[test]
    fn test_overview_levels_the_camera() {
        let mut state = bare_state();
        let input = TickInput {
            overview: true,
            ..Default::default()
        };
        run_frames(&mut state, &input, 5, 0.0);
        assert_eq!(state.camera.rotation, 0.0);
        assert!(state.camera.target_scale < 1.0);
    }
}
