//! Heartbound - a single-level trivia-gated platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, platforms, gates, boss fight)
//!
//! Rendering and audio are an external collaborator, not part of this crate:
//! the sim consumes a `TickInput` snapshot once per tick and hands back a
//! `RenderFrame` plus a queue of one-shot `GameEvent`s to act on.

pub mod sim;

pub use sim::{GameEvent, GamePhase, GameState, RenderFrame, TickInput, tick};

/// Game configuration constants
///
/// Distances are in world units (one unit = one pixel at reference zoom);
/// velocities and accelerations are per-tick at the fixed 60 Hz timestep.
pub mod consts {
    /// Player kinematics
    pub const GRAVITY: f32 = 1.3;
    pub const JUMP_POWER: f32 = 30.0;
    pub const MOVE_SPEED: f32 = 8.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    /// Horizontal offset from `pos.x` to the sprite midline (gate trigger)
    pub const PLAYER_MID: f32 = 40.0;
    /// Offset from `pos.x`/`pos.y` to the sprite center (heart pickup)
    pub const PLAYER_CENTER: f32 = 75.0;
    pub const PLAYER_START_X: f32 = 150.0;

    /// Falling below this charges a life and respawns the player
    pub const FALL_LIMIT_Y: f32 = -350.0;
    pub const RESPAWN_BACKSTEP: f32 = 250.0;
    pub const RESPAWN_DROP_Y: f32 = 400.0;

    pub const START_LIVES: u8 = 3;
    pub const MAX_HEARTS: u8 = 8;
    pub const HEART_PICKUP_RANGE: f32 = 40.0;

    /// Gate geometry: the leading edge of the player stops this far ahead
    /// of `pos.x`, and the trigger band is one block wide
    pub const GATE_FRONT: f32 = 25.0;
    pub const GATE_BAND_WIDTH: f32 = 60.0;
    /// Questions trigger only mid-jump: above this height, still ascending
    pub const GATE_TRIGGER_MIN_Y: f32 = 100.0;
    /// Forward nudge after a correct answer, enough to clear the block
    pub const GATE_CLEAR_NUDGE: f32 = 80.0;
    /// Answer feedback dwell (ticks) before the sim resumes
    pub const FEEDBACK_CORRECT_TICKS: u32 = 36;
    pub const FEEDBACK_WRONG_TICKS: u32 = 48;

    /// World bounds for projectile pruning
    pub const WORLD_MAX_X: f32 = 5500.0;
    pub const WORLD_KILL_Y: f32 = -100.0;

    /// Camera leads the player by a third of the viewport, never scrolls left
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1200.0;

    /// Boss encounter
    pub const BOSS_TRIGGER_X: f32 = 4700.0;
    pub const BOSS_START_X: f32 = 4900.0;
    pub const BOSS_PATROL_MIN_X: f32 = 4700.0;
    pub const BOSS_PATROL_MAX_X: f32 = 5000.0;
    pub const BOSS_MAX_HEALTH: i32 = 5;
    pub const BOSS_BASE_SPEED: f32 = 2.0;
    /// Added per missing health point; the boss speeds up as it weakens
    pub const BOSS_SPEED_STEP: f32 = 0.3;
    /// Attack timer threshold at full health, shrinking per missing point
    pub const BOSS_ATTACK_PERIOD: u32 = 100;
    pub const BOSS_ATTACK_PERIOD_STEP: u32 = 10;
    pub const BOSS_INTRO_TICKS: u32 = 180;
    pub const BOSS_SHOT_SPEED: f32 = 5.0;
    pub const BOSS_SHOT_GRAVITY: f32 = 0.5;
    /// Invulnerability window after the boss damages the player by contact
    pub const BOSS_CONTACT_COOLDOWN: u32 = 120;
    /// Invulnerability window on the boss after a successful player hit
    pub const BOSS_HIT_COOLDOWN: u32 = 30;

    /// Player offense
    pub const ATTACK_COOLDOWN: u32 = 60;
    pub const MELEE_RANGE: f32 = 150.0;
    pub const PLAYER_SHOT_SPEED: f32 = 9.0;
    pub const PLAYER_SHOT_HIT_RANGE: f32 = 60.0;
    pub const KNOCKBACK_X: f32 = 100.0;
    pub const KNOCKBACK_VY: f32 = 20.0;

    /// Crossing this x with the boss down completes the level
    pub const FINISH_X: f32 = 5100.0;
}
