//! Boss encounter state machine
//!
//! `Dormant -> Intro -> Active -> Defeated`. While active the boss patrols
//! between two x-bounds and fires arcing shots on a timer; both the patrol
//! speed and the attack rate scale up as its health drops. Player offense
//! funnels through one damage table keyed by collected-heart tiers,
//! delivered either as a close-range melee strike or as a ranged heart shot
//! depending on the configured attack style.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{
    BOSS_VICTORY_FULL_HEARTS_TEXT, BOSS_VICTORY_TEXT, BossPhase, GameEvent, GamePhase, GameState,
    Projectile,
};
use crate::consts::*;

/// How the player's special attack is delivered. Both styles share the
/// same heart-tier damage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Strike, usable only within `MELEE_RANGE` of the boss
    #[default]
    Melee,
    /// Heart shot fired toward the facing direction; no ammo, but blocked
    /// below the minimum heart tier
    Ranged,
}

/// Outcome of the heart-tier damage table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossDamage {
    /// Below the minimum tier; the attempt whiffs
    Blocked,
    Hit(i32),
    /// Full collection: defeat regardless of remaining health
    Instant,
}

/// The damage table: `<2 blocked, 2-3 -> 1, 4-5 -> 2, 6-7 -> 3, >=8 instant`
pub fn damage_for_hearts(hearts: u8) -> BossDamage {
    match hearts {
        0..=1 => BossDamage::Blocked,
        2..=3 => BossDamage::Hit(1),
        4..=5 => BossDamage::Hit(2),
        6..=7 => BossDamage::Hit(3),
        _ => BossDamage::Instant,
    }
}

/// Attack flourish per tier: banner text and heart-burst size
fn tier_flourish(damage: BossDamage) -> (&'static str, usize) {
    match damage {
        BossDamage::Instant => ("ONE PUNCH!", 30),
        BossDamage::Hit(3) => ("STRONG ATTACK!", 15),
        BossDamage::Hit(2) => ("ATTACK!", 8),
        BossDamage::Hit(_) => ("Weak hit...", 3),
        BossDamage::Blocked => ("Not strong enough! Collect hearts!", 0),
    }
}

/// Fire the `Dormant -> Intro` transition once the player crosses the
/// activation threshold. The intro freezes the world for three seconds.
pub fn maybe_activate(state: &mut GameState) {
    if state.boss.phase != BossPhase::Dormant || state.boss.defeated() {
        return;
    }
    if state.player.pos.x > BOSS_TRIGGER_X {
        log::info!("boss encounter triggered at x={:.0}", state.player.pos.x);
        state.boss.phase = BossPhase::Intro;
        state.phase = GamePhase::BossIntro {
            ticks_left: BOSS_INTRO_TICKS,
        };
        state.push_event(GameEvent::BossIntroBanner);
    }
}

/// One tick of the active encounter: patrol, attack timer, projectiles,
/// cooldowns, the player's special attack, and contact damage, in that
/// order.
pub fn update(state: &mut GameState, attack_pressed: bool) {
    if state.boss.phase != BossPhase::Active || state.boss.defeated() {
        return;
    }

    // Patrol between the arena bounds; speed rises as health falls
    let boss = &mut state.boss;
    boss.pos.x += boss.speed * boss.dir;
    if boss.pos.x > BOSS_PATROL_MAX_X || boss.pos.x < BOSS_PATROL_MIN_X {
        boss.dir = -boss.dir;
    }
    boss.speed = BOSS_BASE_SPEED + (BOSS_MAX_HEALTH - boss.health) as f32 * BOSS_SPEED_STEP;

    // Attack timer; the firing threshold shrinks as health drops
    boss.attack_timer += 1;
    let threshold =
        BOSS_ATTACK_PERIOD - (BOSS_MAX_HEALTH - boss.health) as u32 * BOSS_ATTACK_PERIOD_STEP;
    if boss.attack_timer > threshold {
        let origin = boss.pos + Vec2::new(50.0, 50.0);
        let toward_player = if state.player.pos.x < boss.pos.x {
            -BOSS_SHOT_SPEED
        } else {
            BOSS_SHOT_SPEED
        };
        state.boss_shots.push(Projectile {
            pos: origin,
            vel: Vec2::new(toward_player, 0.0),
        });
        state.boss.attack_timer = 0;
    }

    update_boss_shots(state);
    update_player_shots(state);

    // Cooldowns
    state.boss.hit_cooldown = state.boss.hit_cooldown.saturating_sub(1);
    state.attack_cooldown = state.attack_cooldown.saturating_sub(1);

    if attack_pressed && state.attack_cooldown == 0 {
        match state.attack_style {
            AttackStyle::Melee => try_melee_attack(state),
            AttackStyle::Ranged => try_ranged_attack(state),
        }
    }

    if collision::player_touches_boss(&state.player, &state.boss) && state.boss.hit_cooldown == 0 {
        damage_player(state);
    }
}

/// Simulate boss shots: constant horizontal velocity plus gravity. A shot
/// is removed on player contact or once it leaves the world bounds.
fn update_boss_shots(state: &mut GameState) {
    let player = state.player.clone();
    let mut hit_player = false;
    state.boss_shots.retain_mut(|shot| {
        shot.pos.x += shot.vel.x;
        shot.vel.y -= BOSS_SHOT_GRAVITY;
        shot.pos.y += shot.vel.y;
        if collision::shot_hits_player(shot.pos, &player) {
            hit_player = true;
            return false;
        }
        shot.pos.y >= WORLD_KILL_Y && shot.pos.x >= 0.0 && shot.pos.x <= WORLD_MAX_X
    });
    // At most one damage event per tick, and none inside the invulnerability
    // window; the shot itself is spent either way
    if hit_player && state.boss.hit_cooldown == 0 {
        damage_player(state);
    }
}

/// Simulate player heart shots (ranged style): flat flight, pruned on boss
/// contact or out of bounds
fn update_player_shots(state: &mut GameState) {
    let boss = state.boss.clone();
    let mut hits = 0_u32;
    state.player_shots.retain_mut(|shot| {
        shot.pos += shot.vel;
        if collision::shot_hits_boss(shot.pos, &boss) {
            hits += 1;
            return false;
        }
        shot.pos.x >= 0.0 && shot.pos.x <= WORLD_MAX_X
    });
    let boss_pos = boss.pos;
    for _ in 0..hits {
        if state.boss.defeated() || state.boss.hit_cooldown != 0 {
            break;
        }
        let damage = damage_for_hearts(state.hearts);
        announce_attack(state, damage, boss_pos);
        apply_player_hit(state, damage);
    }
}

/// Melee strike. Out of range costs nothing; a blocked (under-tier) attempt
/// still consumes the attack cooldown.
fn try_melee_attack(state: &mut GameState) {
    if (state.player.pos.x - state.boss.pos.x).abs() > MELEE_RANGE {
        return;
    }
    state.attack_cooldown = ATTACK_COOLDOWN;

    let damage = damage_for_hearts(state.hearts);
    announce_attack(state, damage, state.boss.pos);
    if damage == BossDamage::Blocked {
        return;
    }
    apply_player_hit(state, damage);
}

/// Ranged heart shot. Blocked below the minimum tier; otherwise spawns a
/// flat-flying shot from the player's torso toward the facing direction.
fn try_ranged_attack(state: &mut GameState) {
    state.attack_cooldown = ATTACK_COOLDOWN;
    if damage_for_hearts(state.hearts) == BossDamage::Blocked {
        let (text, _) = tier_flourish(BossDamage::Blocked);
        state.push_event(GameEvent::AttackMessage { text });
        return;
    }
    let origin = state.player.pos + Vec2::new(30.0, 60.0);
    state.player_shots.push(Projectile {
        pos: origin,
        vel: Vec2::new(PLAYER_SHOT_SPEED * state.player.facing.sign(), 0.0),
    });
}

/// Emit the tier banner and heart burst over the boss
fn announce_attack(state: &mut GameState, damage: BossDamage, boss_pos: Vec2) {
    let (text, burst) = tier_flourish(damage);
    state.push_event(GameEvent::AttackMessage { text });
    if burst > 0 {
        state.heart_burst(boss_pos + Vec2::new(50.0, 80.0), burst);
    }
}

/// Apply one successful hit from the damage table. Defeat is checked here
/// and is idempotent: a defeated boss ignores further damage entirely.
fn apply_player_hit(state: &mut GameState, damage: BossDamage) {
    if state.boss.defeated() {
        return;
    }
    match damage {
        BossDamage::Hit(points) => state.boss.health -= points,
        BossDamage::Instant => state.boss.health = 0,
        BossDamage::Blocked => return,
    }
    state.boss.hit_cooldown = BOSS_HIT_COOLDOWN;
    state.push_event(GameEvent::DamageFlash);
    log::debug!("boss hit, health now {}", state.boss.health);
    if state.boss.health <= 0 {
        defeat(state);
    }
}

/// `Active -> Defeated`: clear every live projectile, disable further
/// attacks, and raise the victory banner (a distinct one for a full heart
/// collection).
fn defeat(state: &mut GameState) {
    log::info!("boss defeated with {} hearts collected", state.hearts);
    state.boss.phase = BossPhase::Defeated;
    state.boss_shots.clear();
    state.player_shots.clear();
    let message = if state.hearts == MAX_HEARTS {
        BOSS_VICTORY_FULL_HEARTS_TEXT
    } else {
        BOSS_VICTORY_TEXT
    };
    state.push_event(GameEvent::BossVictory { message });
    let center = state.boss.pos + Vec2::new(50.0, 80.0);
    state.heart_burst(center, 30);
}

/// Boss-inflicted damage: one life, knockback, and a two-second shared
/// invulnerability window so contact cannot stack
fn damage_player(state: &mut GameState) {
    state.lose_life();
    state.push_event(GameEvent::DamageFlash);
    state.boss.hit_cooldown = BOSS_CONTACT_COOLDOWN;
    state.player.pos.x -= KNOCKBACK_X;
    state.player.vel_y = KNOCKBACK_VY;
}
