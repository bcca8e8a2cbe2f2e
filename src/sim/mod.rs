//! Simulation core
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (bricks are row-major)
//! - No rendering or platform dependencies; collaborators are injected

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod particles;
pub mod session;
pub mod state;

pub use ball::{Ball, BallContext};
pub use bricks::{Brick, BrickGrid, GridLayout};
pub use collision::{CollisionResult, Rect, circle_rect_collision};
pub use paddle::Paddle;
pub use particles::{MAX_PARTICLES, Particle, ParticleSystem};
pub use session::{GameSession, Outputs, SessionSnapshot};
pub use state::{Field, GameEvent, GamePhase, ScreenShake};
