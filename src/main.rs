//! Heartbound entry point
//!
//! Headless demo driver: a scripted bot plays the level start to finish at
//! the fixed timestep, logging every one-shot event the presentation
//! collaborator would receive. Useful for eyeballing the whole flow without
//! a renderer.
//!
//! Usage: `heartbound [seed] [--ranged] [--dump-state]`

use std::env;

use heartbound::consts::*;
use heartbound::sim::{
    AttackStyle, BossPhase, GamePhase, GameState, QUESTIONS, RenderFrame, TickInput, tick,
};

/// Hard stop so a broken script cannot spin forever
const MAX_DEMO_TICKS: u64 = 60 * 60 * 10; // ten minutes of sim time

/// Scripted policy: run right, jump at gate blocks, answer correctly, then
/// fight the boss from just outside its patrol bounds and finish.
fn bot_input(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Question { gate, .. } => TickInput {
            answer: Some(QUESTIONS[gate].answer),
            ..TickInput::default()
        },
        GamePhase::Playing => {
            let x = state.player.pos.x;
            if state.boss.phase == BossPhase::Active && !state.boss.defeated() {
                // Shuffle in place just outside the patrol bounds: boss
                // shots fall short of here and contact can never land, while
                // melee reaches the boss at its near turnaround. Ranged only
                // attacks on rightward steps so every shot flies at the boss.
                let hold_left = x > 4572.0;
                TickInput {
                    left: hold_left,
                    right: !hold_left,
                    attack: state.attack_style == AttackStyle::Melee || !hold_left,
                    ..TickInput::default()
                }
            } else {
                // Keep running; hop whenever the next gate block is close
                // so its mid-jump trigger band fires
                let gates = &heartbound::sim::GATES;
                let near_gate =
                    state.current_gate < gates.len() && x > gates[state.current_gate] - 40.0;
                TickInput {
                    right: true,
                    jump: near_gate,
                    ..TickInput::default()
                }
            }
        }
        _ => TickInput::default(),
    }
}

fn main() {
    env_logger::init();

    let mut seed = 0xC0FFEE_u64;
    let mut style = AttackStyle::Melee;
    let mut dump_state = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--ranged" => style = AttackStyle::Ranged,
            "--dump-state" => dump_state = true,
            other => match other.parse() {
                Ok(value) => seed = value,
                Err(_) => {
                    eprintln!("usage: heartbound [seed] [--ranged] [--dump-state]");
                    return;
                }
            },
        }
    }

    let mut state = GameState::with_attack_style(seed, style);
    log::info!("starting demo run, seed={seed}, attack style {style:?}");

    for _ in 0..MAX_DEMO_TICKS {
        let input = bot_input(&state);
        tick(&mut state, &input);
        for event in state.drain_events() {
            log::info!("event: {event:?}");
        }
        if state.terminal() {
            break;
        }
    }

    let frame = RenderFrame::capture(&state);
    println!(
        "finished in {} ticks: {:?} at x={:.0}, {} lives, {}/{} hearts",
        state.time_ticks,
        state.phase,
        frame.player_pos.x,
        frame.lives,
        frame.hearts,
        MAX_HEARTS
    );

    if dump_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("state dump failed: {err}"),
        }
    }
}
