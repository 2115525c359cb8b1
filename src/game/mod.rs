//! Item guessing game played over the generated artifact
//!
//! A random item is picked as the answer; the player gets slot, price band
//! and release date as hints and six guesses, scored letter by letter.

mod rules;
mod session;
mod suggest;
mod terminal;

pub use rules::{
    format_price, format_release_date, normalize_for_compare, price_band, score_guess,
    LetterScore,
};
pub use session::{Game, GameStatus, GuessError, GuessOutcome, Hints, MAX_GUESSES};
pub use suggest::{suggest, MAX_SUGGESTIONS};
pub use terminal::play_round;
