//! One round of the item guessing game

use super::rules::{
    format_release_date, normalize_for_compare, price_band, score_guess, LetterScore,
};
use crate::models::{GameItem, NO_SLOT};
use rand::seq::SliceRandom;
use rand::Rng;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Why a guess was not accepted; rejected guesses do not use up a turn
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("No items loaded.")]
    NoItems,
    #[error("Enter an item name.")]
    EmptyGuess,
    #[error("Not a valid OSRS item: {0}")]
    UnknownItem(String),
    #[error("The game is over.")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { remaining: usize },
    Won,
    Lost,
}

/// Scored guess as shown on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Compare-normalized guess, one char per score
    pub letters: String,
    pub scores: Vec<LetterScore>,
    pub status: GameStatus,
}

/// Clues shown before the first guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hints {
    pub slot: String,
    pub price_band: &'static str,
    pub release_date: String,
    pub letter_count: usize,
}

pub struct Game<'a> {
    items: &'a [GameItem],
    answer: &'a GameItem,
    answer_clean: String,
    guesses: usize,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a round with a random answer from `items`
    pub fn new<R: Rng + ?Sized>(items: &'a [GameItem], rng: &mut R) -> Result<Self, GuessError> {
        let answer = items.choose(rng).ok_or(GuessError::NoItems)?;
        Ok(Self::with_answer(items, answer))
    }

    /// Start a round with a fixed answer
    pub fn with_answer(items: &'a [GameItem], answer: &'a GameItem) -> Self {
        Self {
            items,
            answer,
            answer_clean: normalize_for_compare(&answer.name),
            guesses: 0,
            status: GameStatus::InProgress {
                remaining: MAX_GUESSES,
            },
        }
    }

    pub fn answer(&self) -> &'a GameItem {
        self.answer
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn hints(&self) -> Hints {
        let slot = if self.answer.slot.is_empty() {
            NO_SLOT.to_string()
        } else {
            self.answer.slot.clone()
        };

        Hints {
            slot,
            price_band: price_band(self.answer.ge_price),
            release_date: format_release_date(self.answer.release_date.as_deref()).to_string(),
            letter_count: self.answer_clean.chars().count(),
        }
    }

    /// Score a guess. The guess must name a known item.
    pub fn guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if !matches!(self.status, GameStatus::InProgress { .. }) {
            return Err(GuessError::GameOver);
        }

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(GuessError::EmptyGuess);
        }

        let guess_clean = normalize_for_compare(raw);
        let known = self
            .items
            .iter()
            .any(|item| normalize_for_compare(&item.name) == guess_clean);
        if !known {
            return Err(GuessError::UnknownItem(raw.to_string()));
        }

        self.guesses += 1;
        let scores = score_guess(&guess_clean, &self.answer_clean);

        self.status = if guess_clean == self.answer_clean {
            GameStatus::Won
        } else if self.guesses >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress {
                remaining: MAX_GUESSES - self.guesses,
            }
        };

        Ok(GuessOutcome {
            letters: guess_clean,
            scores,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(id: i64, name: &str, ge_price: Option<i64>) -> GameItem {
        GameItem {
            id,
            name: name.to_string(),
            icon: String::new(),
            slot: "weapon".to_string(),
            tradeable: true,
            release_date: Some("2005-01-26".to_string()),
            ge_price,
        }
    }

    fn catalog() -> Vec<GameItem> {
        vec![
            item(4151, "Abyssal whip", Some(1_500_000)),
            item(385, "Shark", Some(700)),
            item(526, "Bones", None),
            item(1333, "Rune scimitar", Some(15_000)),
            item(1319, "Rune 2h sword", Some(38_000)),
            item(1289, "Rune longsword", Some(18_000)),
            item(1303, "Dragon longsword", Some(60_000)),
        ]
    }

    #[test]
    fn empty_catalog_cannot_start() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(Game::new(&[], &mut rng), Err(GuessError::NoItems)));
    }

    #[test]
    fn same_seed_picks_same_answer() {
        let items = catalog();
        let a = Game::new(&items, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Game::new(&items, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.answer().id, b.answer().id);
    }

    #[test]
    fn hints_describe_the_answer() {
        let items = catalog();
        let game = Game::with_answer(&items, &items[0]);
        let hints = game.hints();

        assert_eq!(hints.slot, "weapon");
        assert_eq!(hints.price_band, "1m–10m");
        assert_eq!(hints.release_date, "2005-01-26");
        assert_eq!(hints.letter_count, "abyssalwhip".len());
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let items = catalog();
        let mut game = Game::with_answer(&items, &items[1]);

        let outcome = game.guess("  SHARK ").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.letters, "shark");
        assert!(outcome.scores.iter().all(|s| *s == LetterScore::Correct));
        assert_eq!(game.guess("Bones"), Err(GuessError::GameOver));
    }

    #[test]
    fn rejected_guesses_do_not_count() {
        let items = catalog();
        let mut game = Game::with_answer(&items, &items[1]);

        assert_eq!(game.guess("   "), Err(GuessError::EmptyGuess));
        assert_eq!(
            game.guess("Party hat"),
            Err(GuessError::UnknownItem("Party hat".to_string()))
        );
        assert_eq!(
            game.status(),
            GameStatus::InProgress {
                remaining: MAX_GUESSES
            }
        );
    }

    #[test]
    fn six_misses_lose() {
        let items = catalog();
        let mut game = Game::with_answer(&items, &items[1]);
        let misses = [
            "Abyssal whip",
            "Bones",
            "Rune scimitar",
            "Rune 2h sword",
            "Rune longsword",
        ];

        for (i, name) in misses.iter().enumerate() {
            let outcome = game.guess(name).unwrap();
            assert_eq!(
                outcome.status,
                GameStatus::InProgress {
                    remaining: MAX_GUESSES - i - 1
                }
            );
        }

        let last = game.guess("Dragon longsword").unwrap();
        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(game.guess("Shark"), Err(GuessError::GameOver));
    }
}
