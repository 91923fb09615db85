//! Game state and core simulation types
//!
//! One explicit `GameState` owns the whole session; the frame driver in
//! `tick` is its sole mutator. Presentation reads `RenderFrame` snapshots
//! and drains the one-shot event queue.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss::AttackStyle;
use super::level::{self, Heart};
use crate::consts::*;

/// Current phase of gameplay
///
/// The phase fully gates the update path: only `Playing` advances
/// kinematics, while `Question` and `BossIntro` step their own countdowns.
/// `GameOver` and `Complete` are terminal until an external reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Free movement through the level
    Playing,
    /// Stopped at a gate with its trivia question on screen
    Question {
        gate: usize,
        /// `None` while waiting for an answer, then a short feedback dwell
        feedback: Option<AnswerResult>,
        feedback_ticks: u32,
    },
    /// Boss banner on screen, world frozen
    BossIntro { ticks_left: u32 },
    /// Out of lives; no further simulation occurs
    GameOver,
    /// Past the finish line with the boss down
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerResult {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Unit sign along x
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-left of the sprite; y measured up from the ground baseline
    pub pos: Vec2,
    pub vel_y: f32,
    /// Set by jumping, cleared by landing. Walking off a ledge does NOT set
    /// it, so one jump stays available after stepping off an edge.
    pub airborne: bool,
    pub facing: Facing,
    /// Render hint for the run cycle
    pub running: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, 0.0),
            vel_y: 0.0,
            airborne: false,
            facing: Facing::Right,
            running: false,
        }
    }
}

impl Player {
    /// Horizontal midline, used by the gate trigger band
    pub fn mid_x(&self) -> f32 {
        self.pos.x + PLAYER_MID
    }

    /// Sprite center, used by heart pickup
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_CENTER)
    }
}

/// Boss encounter state machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Not yet triggered
    Dormant,
    /// Intro banner running; the game phase holds the countdown
    Intro,
    /// Patrolling and attacking
    Active,
    /// Terminal; repeated damage has no further effect
    Defeated,
}

/// The end-of-level boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub phase: BossPhase,
    pub health: i32,
    pub pos: Vec2,
    /// Patrol direction, +1 or -1
    pub dir: f32,
    /// Derived from health each tick; faster as health drops
    pub speed: f32,
    pub attack_timer: u32,
    /// Shared invulnerability window: set to `BOSS_HIT_COOLDOWN` when the
    /// player lands a hit and `BOSS_CONTACT_COOLDOWN` when the boss lands
    /// one, gating contact and shot damage either way
    pub hit_cooldown: u32,
}

impl Default for Boss {
    fn default() -> Self {
        Self {
            phase: BossPhase::Dormant,
            health: BOSS_MAX_HEALTH,
            pos: Vec2::new(BOSS_START_X, 0.0),
            dir: 1.0,
            speed: BOSS_BASE_SPEED,
            attack_timer: 0,
            hit_cooldown: 0,
        }
    }
}

impl Boss {
    pub fn defeated(&self) -> bool {
        self.health <= 0
    }
}

/// A live projectile. Boss shots arc under gravity; player shots fly flat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// One-shot commands for the rendering/audio collaborator, drained once per
/// frame. These are outputs, not state: losing them only loses a flourish.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    JumpSound,
    WinSound,
    QuestionShown {
        gate: usize,
        prompt: &'static str,
        options: &'static [&'static str],
    },
    AnswerFeedback {
        correct: bool,
    },
    GateOpened {
        gate: usize,
    },
    HeartCollected {
        total: u8,
    },
    LivesChanged {
        lives: u8,
    },
    BossIntroBanner,
    BossVictory {
        message: &'static str,
    },
    AttackMessage {
        text: &'static str,
    },
    DamageFlash,
    /// Pre-scattered particle positions (deterministic per seed and tick)
    ParticleBurst {
        positions: Vec<Vec2>,
    },
    GameOver,
    LevelComplete {
        message: String,
    },
}

pub const BOSS_VICTORY_TEXT: &str = "You defeated Mr. Distance!";
pub const BOSS_VICTORY_FULL_HEARTS_TEXT: &str = "ONE PUNCH KO! Unstoppable!";

pub const FINALE_TEXT: &str = "\
You made it across the whole long road.
Every gate answered, every heart earned,
every fall picked back up again.
The castle doors swing open.
Welcome home, hero.";

pub const FINALE_BONUS_LINE: &str =
    "\n\nP.S. You found all 8 hearts along the way. Flawless run!";

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed; only burst scatter consumes randomness
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub lives: u8,
    /// Collected hearts, monotonic, capped at `MAX_HEARTS`
    pub hearts: u8,
    /// Index of the first unresolved gate; gates below it are passed
    pub current_gate: usize,
    /// Uncollected-heart tracking for the fixed spawns
    pub hearts_world: Vec<Heart>,
    pub boss: Boss,
    /// Boss-fired projectiles, pruned every tick
    pub boss_shots: Vec<Projectile>,
    /// Player-fired heart shots (ranged attack style only)
    pub player_shots: Vec<Projectile>,
    /// Ticks until the player may attack again
    pub attack_cooldown: u32,
    pub attack_style: AttackStyle,
    /// Used for the camera lead; presentation-supplied, default 1200
    pub viewport_width: f32,
    /// Bursts emitted so far; salts the scatter seed so that bursts landing
    /// on the same tick still differ
    burst_seq: u64,
    /// One-shot events queued this frame (transient, not persisted)
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::default(),
            lives: START_LIVES,
            hearts: 0,
            current_gate: 0,
            hearts_world: level::HEART_SPAWNS.to_vec(),
            boss: Boss::default(),
            boss_shots: Vec::new(),
            player_shots: Vec::new(),
            attack_cooldown: 0,
            attack_style: AttackStyle::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            burst_seq: 0,
            events: Vec::new(),
        }
    }

    pub fn with_attack_style(seed: u64, style: AttackStyle) -> Self {
        let mut state = Self::new(seed);
        state.attack_style = style;
        state
    }

    /// Camera horizontal offset: leads the player by a third of the
    /// viewport, clamped so the world never scrolls left of its start
    pub fn camera_x(&self) -> f32 {
        (self.player.pos.x - self.viewport_width / 3.0).max(0.0)
    }

    pub fn terminal(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Complete)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the queued one-shot events to the collaborator
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Charge one life and re-render the count; at zero the session enters
    /// the terminal game-over phase (collaborator stops the music)
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.push_event(GameEvent::LivesChanged { lives: self.lives });
        if self.lives == 0 {
            log::info!("out of lives at x={:.0}, game over", self.player.pos.x);
            self.phase = GamePhase::GameOver;
            self.push_event(GameEvent::GameOver);
        }
    }

    /// Emit a heart burst centered at `center`: +-30 horizontal scatter and
    /// up to 20 units of lift per particle.
    /// Scatter is seeded per (run seed, tick, burst index) so replays are
    /// identical and bursts on the same tick still differ.
    pub fn heart_burst(&mut self, center: Vec2, count: usize) {
        let salt = self.burst_seq.rotate_left(32);
        self.burst_seq = self.burst_seq.wrapping_add(1);
        let mut rng = Pcg32::seed_from_u64(self.seed ^ self.time_ticks ^ salt);
        let positions = (0..count)
            .map(|_| {
                center
                    + Vec2::new(
                        rng.random_range(-30.0..30.0),
                        rng.random_range(0.0..20.0),
                    )
            })
            .collect();
        self.push_event(GameEvent::ParticleBurst { positions });
    }
}
