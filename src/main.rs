//! Guillotine Run entry point
//!
//! Headless demo driver: runs a scripted session against the simulation with
//! a synthetic remote peer, logging the world state as it evolves. The real
//! render surface and presence transport plug in through the `render` and
//! `presence` trait seams.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::collections::HashMap;

    use guillotine_run::sim::{
        GameState, LoopbackChannel, PresenceSnapshot, TickInput, Viewport, tick,
    };

    env_logger::init();

    let mut state = GameState::new("local", "Oligarchy");
    let mut channel = LoopbackChannel::default();
    let viewport = Viewport::new(1280.0, 720.0);

    const FRAME_MS: f64 = 1000.0 / 60.0;
    let mut now = 0.0;

    for frame in 0u32..600 {
        // Scripted intents: run right, hop every second and a half.
        let input = TickInput {
            right: true,
            jump: frame % 90 == 0,
            overview: frame >= 480,
            ..Default::default()
        };

        // A ghost peer pacing below the first guillotine.
        let ghost_x = 300.0 + (frame as f32 * 0.7).sin() * 120.0;
        let mut batch = HashMap::new();
        batch.insert(
            "ghost".to_string(),
            PresenceSnapshot {
                x: ghost_x,
                y: 340.0,
                velocity_x: 0.0,
                velocity_y: 0.0,
                is_dead: false,
                head_offset: 0.0,
                name: "Ghost".to_string(),
            },
        );
        state.apply_presence_batch(&batch);

        tick(&mut state, &input, viewport, now, &mut channel);
        now += FRAME_MS;

        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: player ({:.1}, {:.1}) dead={} peers={} dropping={}",
                state.player.pos.x,
                state.player.pos.y,
                state.player.is_dead,
                state.presence.remote_count(),
                state
                    .guillotines
                    .iter()
                    .filter(|g| g.is_dropping)
                    .count(),
            );
        }
    }

    log::info!(
        "session done: {} frames simulated, {} snapshots published",
        state.time_ticks,
        channel.sent.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
