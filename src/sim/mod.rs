//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single mutator: every state change flows through `tick`
//! - No rendering or platform dependencies; presentation consumes
//!   `RenderFrame` snapshots and drained `GameEvent`s

pub mod boss;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;
pub mod view;

pub use boss::{AttackStyle, BossDamage, damage_for_hearts};
pub use level::{Heart, Platform, Question, GATES, HEART_SPAWNS, PLATFORMS, QUESTIONS};
pub use state::{
    AnswerResult, Boss, BossPhase, Facing, GameEvent, GamePhase, GameState, Player, Projectile,
};
pub use tick::{TickInput, tick};
pub use view::{BossView, GateView, RenderFrame};
