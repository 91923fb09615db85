//! Platform resolution and proximity hit tests
//!
//! Hitboxes are deliberately generous: entity-vs-projectile checks are
//! axis-aligned proximity tests, not exact rectangle intersection, which
//! keeps the gameplay forgiving.

use glam::Vec2;

use super::level::Platform;
use super::state::{Boss, Player};
use crate::consts::*;

/// Resolve the player against every platform span, in list order.
///
/// Two cases per overlapping span:
/// - Landing: falling into the window `[y - 20, y + 5]` snaps to the top,
///   zeroes velocity and clears the airborne flag (the tolerance absorbs
///   sub-frame interpenetration from the unbounded fall speed).
/// - Step-up: standing less than 60 units below the top snaps up without
///   requiring downward velocity, so small steps can be walked onto.
///
/// Every matching span applies; the last match in list order wins. The
/// level's spans only abut at equal heights, so the order never matters in
/// practice, but the semantics are kept exact.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) {
    for p in platforms {
        if !p.overlaps_footprint(player.pos.x, PLAYER_WIDTH) {
            continue;
        }
        let landing = player.pos.y <= p.y + 5.0 && player.pos.y >= p.y - 20.0 && player.vel_y <= 0.0;
        let step_up = player.pos.y < p.y && player.pos.y > p.y - 60.0;
        if landing || step_up {
            player.pos.y = p.y;
            player.vel_y = 0.0;
            player.airborne = false;
        }
    }
}

/// Axis-aligned proximity test with independent per-axis tolerances
pub fn within(a: Vec2, b: Vec2, tol_x: f32, tol_y: f32) -> bool {
    (a.x - b.x).abs() < tol_x && (a.y - b.y).abs() < tol_y
}

/// Direct bounding-box overlap between player and boss (contact damage).
/// The boss body is 100 wide; vertically the test reaches 20 below and 60
/// above the boss baseline.
pub fn player_touches_boss(player: &Player, boss: &Boss) -> bool {
    player.pos.x + PLAYER_WIDTH > boss.pos.x
        && player.pos.x < boss.pos.x + 100.0
        && player.pos.y < boss.pos.y + 60.0
        && player.pos.y > boss.pos.y - 20.0
}

/// Boss-shot vs player: the shot must pass within 30 units of the player's
/// horizontal center and 60 of the torso
pub fn shot_hits_player(shot_pos: Vec2, player: &Player) -> bool {
    within(
        shot_pos,
        player.pos + Vec2::new(30.0, 60.0),
        30.0,
        60.0,
    )
}

/// Player-shot vs boss center (ranged attack style)
pub fn shot_hits_boss(shot_pos: Vec2, boss: &Boss) -> bool {
    within(
        shot_pos,
        boss.pos + Vec2::new(50.0, 50.0),
        PLAYER_SHOT_HIT_RANGE,
        PLAYER_SHOT_HIT_RANGE,
    )
}
