//! Presentation snapshot
//!
//! `RenderFrame` is the narrow read-only contract handed to the rendering
//! collaborator each frame: final positions, camera offset, HUD values and
//! entity lists. One-shot effects travel separately through the drained
//! `GameEvent` queue.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::GATES;
use super::state::{BossPhase, Facing, GamePhase, GameState};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BossView {
    pub pos: Vec2,
    pub health: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GateView {
    pub x: f32,
    pub passed: bool,
}

/// Everything the collaborator needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub player_pos: Vec2,
    pub facing: Facing,
    pub running: bool,
    pub airborne: bool,
    /// Horizontal world offset; never scrolls left of the world start
    pub camera_x: f32,
    pub lives: u8,
    pub hearts: u8,
    pub gates: Vec<GateView>,
    /// Uncollected hearts only
    pub heart_spawns: Vec<Vec2>,
    pub boss: BossView,
    pub boss_shots: Vec<Vec2>,
    pub player_shots: Vec<Vec2>,
    pub paused: bool,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        let boss_visible = matches!(state.boss.phase, BossPhase::Intro | BossPhase::Active);
        Self {
            player_pos: state.player.pos,
            facing: state.player.facing,
            running: state.player.running,
            airborne: state.player.airborne,
            camera_x: state.camera_x(),
            lives: state.lives,
            hearts: state.hearts,
            gates: GATES
                .iter()
                .enumerate()
                .map(|(i, &x)| GateView {
                    x,
                    passed: i < state.current_gate,
                })
                .collect(),
            heart_spawns: state
                .hearts_world
                .iter()
                .filter(|h| !h.collected)
                .map(|h| h.pos)
                .collect(),
            boss: BossView {
                pos: state.boss.pos,
                health: state.boss.health.max(0),
                visible: boss_visible,
            },
            boss_shots: state.boss_shots.iter().map(|p| p.pos).collect(),
            player_shots: state.player_shots.iter().map(|p| p.pos).collect(),
            paused: !matches!(state.phase, GamePhase::Playing),
        }
    }
}
