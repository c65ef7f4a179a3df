//! Built-in forfeit catalog.
//!
//! One table per (difficulty, gender) partition. Each row is
//! `(task, description, duration in seconds)`; task keys are unique within
//! a table.

use duel_core::{Difficulty, Gender};

/// A catalog row: task key, description, duration in seconds.
pub type CatalogRow = (&'static str, &'static str, u32);

/// Easy forfeits for male players.
pub const EASY_MALE: &[CatalogRow] = &[
    (
        "Serenade",
        "Sing the chorus of a love song to your partner, eyes locked the whole time.",
        60,
    ),
    (
        "Compliment Shower",
        "Pay your partner five sincere compliments without repeating yourself.",
        45,
    ),
    (
        "Slow Dance",
        "Hum a tune and slow dance with your partner around the room.",
        90,
    ),
    (
        "Hand Massage",
        "Give your partner a relaxing hand massage.",
        120,
    ),
    (
        "Poem",
        "Improvise a four-line poem about your partner's smile.",
        60,
    ),
    (
        "Staring Contest",
        "Hold a staring contest with your partner. No laughing allowed.",
        30,
    ),
];

/// Easy forfeits for female players.
pub const EASY_FEMALE: &[CatalogRow] = &[
    (
        "Serenade",
        "Sing the chorus of your favourite song to your partner.",
        60,
    ),
    (
        "Compliment Shower",
        "Pay your partner five sincere compliments without repeating yourself.",
        45,
    ),
    (
        "First Date Story",
        "Retell the story of your first date as a dramatic movie trailer.",
        90,
    ),
    (
        "Shoulder Rub",
        "Give your partner a gentle shoulder rub.",
        120,
    ),
    (
        "Impression",
        "Do your best impression of your partner ordering coffee.",
        45,
    ),
    (
        "Staring Contest",
        "Hold a staring contest with your partner. No laughing allowed.",
        30,
    ),
];

/// Medium forfeits for male players.
pub const MEDIUM_MALE: &[CatalogRow] = &[
    (
        "Foot Massage",
        "Give your partner a foot massage with your full attention.",
        180,
    ),
    (
        "Love Letter",
        "Write and read aloud a short love letter to your partner.",
        180,
    ),
    (
        "Blindfold Taste Test",
        "Blindfolded, guess three snacks your partner feeds you.",
        120,
    ),
    (
        "Dance Routine",
        "Perform a thirty-second dance routine of your partner's choosing.",
        60,
    ),
    (
        "Secret Confession",
        "Confess something you have never told your partner.",
        90,
    ),
    (
        "Back Massage",
        "Give your partner a slow back massage.",
        240,
    ),
];

/// Medium forfeits for female players.
pub const MEDIUM_FEMALE: &[CatalogRow] = &[
    (
        "Foot Massage",
        "Give your partner a foot massage with your full attention.",
        180,
    ),
    (
        "Love Letter",
        "Write and read aloud a short love letter to your partner.",
        180,
    ),
    (
        "Blindfold Guess",
        "Blindfolded, identify three objects your partner places in your hands.",
        120,
    ),
    (
        "Runway Walk",
        "Strut across the room like it is the finale of a fashion show.",
        60,
    ),
    (
        "Secret Confession",
        "Confess something you have never told your partner.",
        90,
    ),
    (
        "Scalp Massage",
        "Give your partner a relaxing scalp massage.",
        240,
    ),
];

/// Hard forfeits for male players.
pub const HARD_MALE: &[CatalogRow] = &[
    (
        "Full Massage",
        "Give your partner a full massage with lotion, no shortcuts.",
        600,
    ),
    (
        "Date Planner",
        "Plan your partner's perfect date out loud, every detail, and commit to it.",
        300,
    ),
    (
        "Truth Round",
        "Answer any three questions your partner asks, completely honestly.",
        300,
    ),
    (
        "Breakfast Promise",
        "Promise breakfast in bed tomorrow and describe the menu.",
        120,
    ),
    (
        "Song Dedication",
        "Sing a full song to your partner, start to finish.",
        240,
    ),
    (
        "Role Swap",
        "Act as your partner for the next five minutes.",
        300,
    ),
];

/// Hard forfeits for female players.
pub const HARD_FEMALE: &[CatalogRow] = &[
    (
        "Full Massage",
        "Give your partner a full massage with lotion, no shortcuts.",
        600,
    ),
    (
        "Date Planner",
        "Plan your partner's perfect date out loud, every detail, and commit to it.",
        300,
    ),
    (
        "Truth Round",
        "Answer any three questions your partner asks, completely honestly.",
        300,
    ),
    (
        "Chef's Choice",
        "Cook or assemble a snack for your partner, blindfolded.",
        300,
    ),
    (
        "Song Dedication",
        "Sing a full song to your partner, start to finish.",
        240,
    ),
    (
        "Role Swap",
        "Act as your partner for the next five minutes.",
        300,
    ),
];

/// The built-in table for a partition.
pub fn table(difficulty: Difficulty, gender: Gender) -> &'static [CatalogRow] {
    match (difficulty, gender) {
        (Difficulty::Easy, Gender::Male) => EASY_MALE,
        (Difficulty::Easy, Gender::Female) => EASY_FEMALE,
        (Difficulty::Medium, Gender::Male) => MEDIUM_MALE,
        (Difficulty::Medium, Gender::Female) => MEDIUM_FEMALE,
        (Difficulty::Hard, Gender::Male) => HARD_MALE,
        (Difficulty::Hard, Gender::Female) => HARD_FEMALE,
    }
}
