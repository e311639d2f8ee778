//! Fixed world layout
//!
//! One hand-placed level: the platform set, the guillotine placements, and
//! the player spawn. Created once at world setup and read-only afterwards.

use glam::Vec2;

use super::hazard::Guillotine;
use super::platform::Platform;

/// Where the local player first appears (and respawns).
pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 300.0);

pub fn default_platforms() -> Vec<Platform> {
    vec![
        // Base ground
        Platform::new(0.0, 500.0, 800.0, 100.0),
        Platform::new(-200.0, 500.0, 200.0, 100.0),
        Platform::new(800.0, 500.0, 400.0, 100.0),
        // Middle hops
        Platform::new(300.0, 400.0, 200.0, 20.0),
        Platform::new(600.0, 300.0, 200.0, 20.0),
        Platform::new(100.0, 200.0, 200.0, 20.0),
        // Higher ledges
        Platform::new(-100.0, 300.0, 150.0, 20.0),
        Platform::new(900.0, 200.0, 150.0, 20.0),
        Platform::new(400.0, 150.0, 150.0, 20.0),
        // Narrow challenge steps
        Platform::new(700.0, 100.0, 80.0, 20.0),
        Platform::new(900.0, 50.0, 80.0, 20.0),
        Platform::new(1100.0, 0.0, 80.0, 20.0),
        // Floating islands
        Platform::new(-300.0, 200.0, 120.0, 80.0),
        Platform::new(-500.0, 300.0, 120.0, 80.0),
        Platform::new(1200.0, 200.0, 120.0, 80.0),
        // Secret upper route
        Platform::new(200.0, 0.0, 100.0, 20.0),
        Platform::new(0.0, -100.0, 100.0, 20.0),
        Platform::new(400.0, -150.0, 100.0, 20.0),
        // Lower ledges
        Platform::new(-200.0, 700.0, 150.0, 20.0),
        Platform::new(400.0, 650.0, 150.0, 20.0),
        Platform::new(800.0, 750.0, 150.0, 20.0),
        // Far sides
        Platform::new(-800.0, 400.0, 200.0, 20.0),
        Platform::new(-600.0, 250.0, 200.0, 20.0),
        Platform::new(1400.0, 400.0, 200.0, 20.0),
    ]
}

pub fn default_guillotines() -> Vec<Guillotine> {
    vec![
        Guillotine::new(300.0, 250.0),
        Guillotine::new(700.0, 150.0),
        Guillotine::new(-200.0, 350.0),
        Guillotine::new(1000.0, 300.0),
        Guillotine::new(400.0, 0.0),
    ]
}
