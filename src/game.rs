//! Simon rules: deal a sequence, grow it round by round, check the player.

use crate::{
    config::MAX_GAME_LENGTH,
    quadrant::Quadrant,
};

/// xorshift32 generator for dealing sequences.
#[derive(Clone, Debug)]
pub struct Rng(u32);

impl Rng {
    /// xorshift never leaves zero, so a zero seed is swapped for this one.
    const FALLBACK_SEED: u32 = 0x2545_F491;

    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { Self::FALLBACK_SEED } else { seed })
    }

    pub fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    pub fn range(&mut self, max: u32) -> u32 {
        self.next() % max
    }
}

/// Result of one player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Right quadrant, more to enter this round.
    Correct,
    /// Round finished; `round` is the round now starting.
    RoundComplete { round: usize },
    /// Last round finished. A fresh game has been dealt.
    Won,
    /// Wrong quadrant. A fresh game has been dealt.
    Lost { expected: Quadrant, chosen: Quadrant },
}

/// A game in progress.
///
/// Round `n` asks for the first `n` quadrants of the dealt sequence. The
/// game is always playable: winning or losing deals a new sequence and
/// starts again at round 1.
#[derive(Clone, Debug)]
pub struct Game {
    sequence: [Quadrant; MAX_GAME_LENGTH],
    round: usize,
    cursor: usize,
    rng: Rng,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            sequence: [Quadrant::First; MAX_GAME_LENGTH],
            round: 1,
            cursor: 0,
            rng: Rng::new(seed),
        };
        game.restart();
        game
    }

    /// Deal a new sequence and go back to round 1.
    pub fn restart(&mut self) {
        for slot in &mut self.sequence {
            *slot = Quadrant::ALL[self.rng.range(Quadrant::ALL.len() as u32) as usize];
        }
        self.round = 1;
        self.cursor = 0;
    }

    /// Current round, starting at 1.
    pub const fn round(&self) -> usize {
        self.round
    }

    /// The part of the sequence the player has to repeat this round.
    pub fn shown(&self) -> &[Quadrant] {
        &self.sequence[..self.round]
    }

    /// How many quadrants of this round the player has already entered.
    pub const fn progress(&self) -> usize {
        self.cursor
    }

    pub fn submit(&mut self, chosen: Quadrant) -> Outcome {
        let expected = self.sequence[self.cursor];
        if chosen != expected {
            self.restart();
            return Outcome::Lost { expected, chosen };
        }

        self.cursor += 1;
        if self.cursor < self.round {
            return Outcome::Correct;
        }

        if self.round == MAX_GAME_LENGTH {
            self.restart();
            return Outcome::Won;
        }

        self.round += 1;
        self.cursor = 0;
        Outcome::RoundComplete { round: self.round }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrong(q: Quadrant) -> Quadrant {
        Quadrant::from_number(q.number() % 4 + 1).unwrap()
    }

    #[test]
    fn zero_seed_still_produces_values() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next(), 0);
    }

    #[test]
    fn same_seed_deals_same_sequence() {
        let a = Game::new(42);
        let b = Game::new(42);
        assert_eq!(a.sequence, b.sequence);
    }

    #[test]
    fn starts_at_round_one() {
        let game = Game::new(7);
        assert_eq!(game.round(), 1);
        assert_eq!(game.shown().len(), 1);
        assert_eq!(game.progress(), 0);
    }

    #[test]
    fn perfect_play_wins_after_max_rounds() {
        let mut game = Game::new(1234);
        for round in 1..=MAX_GAME_LENGTH {
            assert_eq!(game.round(), round);
            let shown: [Quadrant; MAX_GAME_LENGTH] = game.sequence;
            for (i, &quadrant) in shown[..round].iter().enumerate() {
                let outcome = game.submit(quadrant);
                if i + 1 < round {
                    assert_eq!(outcome, Outcome::Correct);
                    assert_eq!(game.progress(), i + 1);
                } else if round < MAX_GAME_LENGTH {
                    assert_eq!(outcome, Outcome::RoundComplete { round: round + 1 });
                } else {
                    assert_eq!(outcome, Outcome::Won);
                }
            }
        }
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn sequence_grows_without_changing_prefix() {
        let mut game = Game::new(99);
        let first = game.shown()[0];
        game.submit(first);
        assert_eq!(game.shown().len(), 2);
        assert_eq!(game.shown()[0], first);
    }

    #[test]
    fn mistake_loses_and_restarts() {
        let mut game = Game::new(5);
        let first = game.shown()[0];
        game.submit(first);
        assert_eq!(game.round(), 2);

        let expected = game.shown()[0];
        let chosen = wrong(expected);
        assert_eq!(game.submit(chosen), Outcome::Lost { expected, chosen });
        assert_eq!(game.round(), 1);
        assert_eq!(game.progress(), 0);
    }

    #[test]
    fn mistake_mid_round_reports_the_right_step() {
        let mut game = Game::new(77);
        let seq = game.sequence;
        game.submit(seq[0]);
        game.submit(seq[0]);
        assert_eq!(game.round(), 2);
        assert_eq!(game.progress(), 1);

        let chosen = wrong(seq[1]);
        assert_eq!(
            game.submit(chosen),
            Outcome::Lost {
                expected: seq[1],
                chosen
            }
        );
    }
}
