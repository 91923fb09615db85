//! Fixed level data
//!
//! The level is a single hardcoded sequence: eight platform spans, five
//! question gates, eight collectible hearts, then the boss arena. Everything
//! here is immutable at runtime; the sim only reads it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An immutable platform span. `y` is the walking surface height measured
/// from the ground baseline (0 = ground level).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub width: f32,
    pub y: f32,
}

impl Platform {
    pub const fn new(x: f32, width: f32, y: f32) -> Self {
        Self { x, width, y }
    }

    /// Whether the player's horizontal footprint overlaps this span
    pub fn overlaps_footprint(&self, player_x: f32, player_width: f32) -> bool {
        player_x + player_width > self.x && player_x < self.x + self.width
    }
}

/// Continuous walkway with two small step-ups for variety; the final span
/// is the boss arena and victory stretch.
pub const PLATFORMS: [Platform; 8] = [
    Platform::new(0.0, 800.0, 0.0),
    Platform::new(800.0, 900.0, 0.0),
    Platform::new(1700.0, 150.0, 50.0),
    Platform::new(1850.0, 850.0, 0.0),
    Platform::new(2700.0, 900.0, 0.0),
    Platform::new(3600.0, 150.0, 40.0),
    Platform::new(3750.0, 900.0, 0.0),
    Platform::new(4650.0, 700.0, 0.0),
];

/// Gate x-thresholds, in play order. Each pairs 1:1 with `QUESTIONS`.
pub const GATES: [f32; 5] = [600.0, 1600.0, 2600.0, 3500.0, 4200.0];

/// A static trivia question consumed read-only by gate progression
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        prompt: "Which planet is known as the Red Planet?",
        options: &["Venus", "Mars", "Jupiter", "Mercury"],
        answer: 1,
    },
    Question {
        prompt: "What do you call a group of crows?",
        options: &["A parliament", "A murder", "A gaggle"],
        answer: 1,
    },
    Question {
        prompt: "Which of these is NOT a primary color of light?",
        options: &["Red", "Green", "Yellow", "Blue"],
        answer: 2,
    },
    Question {
        prompt: "How many hearts does an octopus have?",
        options: &["One", "Two", "Three"],
        answer: 2,
    },
    Question {
        prompt: "Which classic platformer hero collects rings?",
        options: &["Mario", "Sonic", "Kirby", "Link"],
        answer: 1,
    },
];

/// A collectible heart at a fixed world position
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Heart {
    pub pos: Vec2,
    pub collected: bool,
}

impl Heart {
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            collected: false,
        }
    }
}

/// Eight hearts scattered along the route; collecting all of them unlocks
/// the instant-defeat attack tier and the bonus ending line.
pub const HEART_SPAWNS: [Heart; 8] = [
    Heart::at(400.0, 120.0),
    Heart::at(950.0, 60.0),
    Heart::at(1760.0, 150.0),
    Heart::at(2250.0, 60.0),
    Heart::at(3050.0, 130.0),
    Heart::at(3660.0, 140.0),
    Heart::at(4000.0, 60.0),
    Heart::at(4480.0, 110.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gates_pair_with_questions() {
        assert_eq!(GATES.len(), QUESTIONS.len());
        for q in &QUESTIONS {
            assert!(q.answer < q.options.len());
        }
    }

    #[test]
    fn test_gates_sit_on_walkable_ground() {
        // Every gate threshold must lie inside some platform span so the
        // player can stand in front of it and jump for the trigger band.
        for &gate_x in &GATES {
            assert!(
                PLATFORMS.iter().any(|p| gate_x >= p.x && gate_x < p.x + p.width),
                "gate at {gate_x} is over a hole"
            );
        }
    }

    #[test]
    fn test_walkway_is_continuous() {
        let mut covered = 0.0_f32;
        for p in &PLATFORMS {
            assert!(p.x <= covered, "gap before platform at {}", p.x);
            covered = covered.max(p.x + p.width);
        }
        assert!(covered >= 5350.0);
    }

    #[test]
    fn test_heart_count_matches_cap() {
        assert_eq!(HEART_SPAWNS.len(), crate::consts::MAX_HEARTS as usize);
    }
}
