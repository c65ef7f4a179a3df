//! The spinning-die animation that precedes a duel roll.
//!
//! The host calls [`RollAnimation::tick`] on a fixed interval. The first
//! `ticks` calls each show a random face; the next call settles on the final
//! face, which is the value to hand to the duel engine.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::duel::roll_die;

/// Default number of spinning frames before the die settles.
pub const DEFAULT_ROLL_TICKS: u32 = 20;

/// One frame of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollFrame {
    /// An intermediate face shown while the die spins.
    Spinning(u8),
    /// The final face.
    Settled(u8),
}

impl RollFrame {
    /// The face shown in this frame.
    pub fn face(self) -> u8 {
        match self {
            Self::Spinning(f) | Self::Settled(f) => f,
        }
    }
}

/// A bounded run of spinning frames followed by a settled face.
#[derive(Debug, Clone)]
pub struct RollAnimation {
    ticks: u32,
    elapsed: u32,
    settled: Option<u8>,
}

impl Default for RollAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_ROLL_TICKS)
    }
}

impl RollAnimation {
    /// An animation with `ticks` spinning frames.
    pub fn new(ticks: u32) -> Self {
        Self {
            ticks,
            elapsed: 0,
            settled: None,
        }
    }

    /// Advance one frame. Once settled, keeps returning the settled face.
    pub fn tick(&mut self, rng: &mut StdRng) -> RollFrame {
        if let Some(face) = self.settled {
            return RollFrame::Settled(face);
        }
        let face = roll_die(rng);
        if self.elapsed < self.ticks {
            self.elapsed += 1;
            RollFrame::Spinning(face)
        } else {
            self.settled = Some(face);
            RollFrame::Settled(face)
        }
    }

    /// Tick until settled and return the final face.
    pub fn run(&mut self, rng: &mut StdRng) -> u8 {
        loop {
            if let RollFrame::Settled(face) = self.tick(rng) {
                return face;
            }
        }
    }

    /// Spinning frames shown so far.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// The final face, once settled.
    pub fn settled(&self) -> Option<u8> {
        self.settled
    }
}
