//! Per-frame update driver
//!
//! One `tick` call advances the whole session by one fixed 60 Hz step, in a
//! fixed order: kinematics, platform resolution, fall reset, horizontal
//! movement with gate clamping, collectibles, then the boss machine and the
//! finish check. Non-`Playing` phases freeze the world and only step their
//! own tick-counted countdowns, so the whole session replays from a seed
//! and an input script.

use glam::Vec2;

use super::boss;
use super::collision;
use super::level::{self, GATES, QUESTIONS};
use super::state::{AnswerResult, BossPhase, Facing, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single tick: discrete flags sampled once per frame,
/// plus the answer choice while a question is on screen
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Special attack (melee strike or heart shot, per attack style)
    pub attack: bool,
    /// Selected option index for the current question, if any
    pub answer: Option<usize>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        // Terminal states: no further simulation until an external reset
        GamePhase::GameOver | GamePhase::Complete => return,
        GamePhase::BossIntro { ticks_left } => {
            if ticks_left > 1 {
                state.phase = GamePhase::BossIntro {
                    ticks_left: ticks_left - 1,
                };
            } else {
                state.boss.phase = BossPhase::Active;
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Question { .. } => {
            step_question(state, input);
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Jump fires on the held flag but only while not airborne; the flag is
    // set by jumping, not by falling, so stepping off a ledge keeps one jump
    if input.jump && !state.player.airborne {
        state.player.airborne = true;
        state.player.vel_y = JUMP_POWER;
        state.push_event(GameEvent::JumpSound);
    }

    // Vertical integration under constant gravity; no terminal velocity
    state.player.vel_y -= GRAVITY;
    state.player.pos.y += state.player.vel_y;

    collision::resolve_platforms(&mut state.player, &level::PLATFORMS);

    // Fell off the world: punitive respawn, not a checkpoint
    if state.player.pos.y < FALL_LIMIT_Y {
        state.lose_life();
        state.player.pos.x = (state.player.pos.x - RESPAWN_BACKSTEP).max(0.0);
        state.player.pos.y = RESPAWN_DROP_Y;
        state.player.vel_y = 0.0;
        if state.terminal() {
            return;
        }
    }

    // Horizontal intent
    let mut next_x = state.player.pos.x;
    if input.right {
        next_x += MOVE_SPEED;
        state.player.facing = Facing::Right;
        state.player.running = true;
    } else if input.left {
        next_x = (state.player.pos.x - MOVE_SPEED).max(0.0);
        state.player.facing = Facing::Left;
        state.player.running = true;
    } else {
        state.player.running = false;
    }

    // The next unresolved gate blocks forward motion, and its trigger band
    // poses the question mid-jump (above 100, still ascending)
    let mut can_move = true;
    if state.current_gate < GATES.len() {
        let gate_x = GATES[state.current_gate];
        if next_x + GATE_FRONT > gate_x && state.player.pos.x < gate_x {
            can_move = false;
        }
        let mid = state.player.mid_x();
        if mid > gate_x
            && mid < gate_x + GATE_BAND_WIDTH
            && state.player.pos.y > GATE_TRIGGER_MIN_Y
            && state.player.vel_y > 0.0
        {
            trigger_question(state);
        }
    }
    if can_move {
        state.player.pos.x = next_x;
    }

    collect_hearts(state);

    boss::maybe_activate(state);
    boss::update(state, input.attack);
    if state.terminal() {
        return;
    }

    if state.player.pos.x > FINISH_X && state.boss.defeated() {
        finish(state);
    }
}

/// Pause the driver on the current gate's question
fn trigger_question(state: &mut GameState) {
    let gate = state.current_gate;
    let q = &QUESTIONS[gate];
    log::debug!("gate {gate} question triggered at x={:.0}", state.player.pos.x);
    state.phase = GamePhase::Question {
        gate,
        feedback: None,
        feedback_ticks: 0,
    };
    state.push_event(GameEvent::QuestionShown {
        gate,
        prompt: q.prompt,
        options: q.options,
    });
}

/// Question sub-states: await an answer, then dwell on the feedback before
/// resuming. Exactly one question per gate; a wrong answer keeps the gate
/// locked for a retry (or ends the run on the last life).
fn step_question(state: &mut GameState, input: &TickInput) {
    let GamePhase::Question {
        gate,
        feedback,
        feedback_ticks,
    } = state.phase
    else {
        return;
    };

    match feedback {
        None => {
            let Some(choice) = input.answer else { return };
            let correct = choice == QUESTIONS[gate].answer;
            state.push_event(GameEvent::AnswerFeedback { correct });
            if correct {
                let center = state.player.pos + Vec2::new(75.0, 150.0);
                state.heart_burst(center, 8);
            }
            state.phase = GamePhase::Question {
                gate,
                feedback: Some(if correct {
                    AnswerResult::Correct
                } else {
                    AnswerResult::Wrong
                }),
                feedback_ticks: if correct {
                    FEEDBACK_CORRECT_TICKS
                } else {
                    FEEDBACK_WRONG_TICKS
                },
            };
        }
        Some(result) => {
            if feedback_ticks > 1 {
                state.phase = GamePhase::Question {
                    gate,
                    feedback,
                    feedback_ticks: feedback_ticks - 1,
                };
                return;
            }
            match result {
                AnswerResult::Correct => {
                    log::info!("gate {gate} passed");
                    state.push_event(GameEvent::GateOpened { gate });
                    state.current_gate += 1;
                    state.player.pos.x += GATE_CLEAR_NUDGE;
                    state.phase = GamePhase::Playing;
                }
                AnswerResult::Wrong => {
                    state.lose_life();
                    // The same gate stays locked; resume unless that was
                    // the last life (lose_life already went terminal)
                    if !state.terminal() {
                        state.phase = GamePhase::Playing;
                    }
                }
            }
        }
    }
}

/// Sweep the fixed heart spawns against the player center; collection is
/// permanent and monotonic
fn collect_hearts(state: &mut GameState) {
    let center = state.player.center();
    for i in 0..state.hearts_world.len() {
        let heart = state.hearts_world[i];
        if heart.collected
            || !collision::within(center, heart.pos, HEART_PICKUP_RANGE, HEART_PICKUP_RANGE)
        {
            continue;
        }
        state.hearts_world[i].collected = true;
        state.hearts = (state.hearts + 1).min(MAX_HEARTS);
        state.push_event(GameEvent::HeartCollected {
            total: state.hearts,
        });
        state.heart_burst(heart.pos, 1);
    }
}

/// Past the finish line with the boss down: terminal victory
fn finish(state: &mut GameState) {
    use super::state::{FINALE_BONUS_LINE, FINALE_TEXT};

    log::info!(
        "level complete, {} lives and {} hearts remaining",
        state.lives,
        state.hearts
    );
    state.phase = GamePhase::Complete;
    state.push_event(GameEvent::WinSound);
    let center = state.player.pos + Vec2::new(75.0, 150.0);
    state.heart_burst(center, 20);

    let mut message = String::from(FINALE_TEXT);
    if state.hearts == MAX_HEARTS {
        message.push_str(FINALE_BONUS_LINE);
    }
    state.push_event(GameEvent::LevelComplete { message });
}
