//! Plain-text front end for the guessing game

use super::rules::{format_price, format_release_date, price_band};
use super::session::{Game, GameStatus, GuessError, GuessOutcome, MAX_GUESSES};
use super::suggest::suggest;
use crate::models::GameItem;
use std::io::{self, BufRead, Write};

/// Suggestions listed after an unknown guess
const TERMINAL_SUGGESTIONS: usize = 5;

/// Play one round reading guesses line by line from `input`.
///
/// Returns whether the player won. Ends early with `Ok(false)` on end of
/// input.
pub fn play_round<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    items: &[GameItem],
    mut input: R,
    out: &mut W,
) -> io::Result<bool> {
    let hints = game.hints();
    writeln!(out, "Guess the OSRS item! You have {} guesses.", MAX_GUESSES)?;
    writeln!(out, "  Slot:     {}", hints.slot)?;
    writeln!(out, "  GE price: {}", hints.price_band)?;
    writeln!(out, "  Released: {}", hints.release_date)?;
    writeln!(
        out,
        "  Answer length: {} letters (excluding spaces/punctuation).",
        hints.letter_count
    )?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            reveal(game, out, false)?;
            return Ok(false);
        }

        match game.guess(&line) {
            Ok(outcome) => {
                print_row(out, &outcome)?;
                match outcome.status {
                    GameStatus::Won => {
                        reveal(game, out, true)?;
                        return Ok(true);
                    }
                    GameStatus::Lost => {
                        reveal(game, out, false)?;
                        return Ok(false);
                    }
                    GameStatus::InProgress { remaining } => {
                        writeln!(out, "Not quite. You have {} guesses left.", remaining)?;
                    }
                }
            }
            Err(GuessError::UnknownItem(name)) => {
                writeln!(out, "Not a valid OSRS item. Try again.")?;
                let close: Vec<&str> = suggest(items, &name, TERMINAL_SUGGESTIONS)
                    .into_iter()
                    .map(|item| item.name.as_str())
                    .collect();
                if !close.is_empty() {
                    writeln!(out, "  Did you mean: {}", close.join(", "))?;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn print_row<W: Write>(out: &mut W, outcome: &GuessOutcome) -> io::Result<()> {
    let letters: String = outcome
        .letters
        .chars()
        .flat_map(|c| [c.to_ascii_uppercase(), ' '])
        .collect();
    let marks: String = outcome
        .scores
        .iter()
        .flat_map(|s| [s.symbol(), ' '])
        .collect();
    writeln!(out, "  {}", letters.trim_end())?;
    writeln!(out, "  {}", marks.trim_end())
}

fn reveal<W: Write>(game: &Game<'_>, out: &mut W, win: bool) -> io::Result<()> {
    let answer = game.answer();
    writeln!(out, "{}", if win { "You got it!" } else { "Out of guesses!" })?;
    writeln!(out, "  Item:     {} ({})", answer.name, answer.icon)?;
    writeln!(
        out,
        "  Slot:     {}",
        if answer.slot.is_empty() { "none" } else { answer.slot.as_str() }
    )?;
    writeln!(
        out,
        "  GE price: {} gp ({})",
        format_price(answer.ge_price),
        price_band(answer.ge_price)
    )?;
    writeln!(
        out,
        "  Released: {}",
        format_release_date(answer.release_date.as_deref())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<GameItem> {
        ["Shark", "Sharks tooth", "Bones"]
            .iter()
            .enumerate()
            .map(|(i, name)| GameItem {
                id: i as i64,
                name: name.to_string(),
                icon: format!("https://example.com/{i}.png"),
                slot: "none".to_string(),
                tradeable: true,
                release_date: None,
                ge_price: Some(1_234),
            })
            .collect()
    }

    #[test]
    fn winning_round_transcript() {
        let items = catalog();
        let mut game = Game::with_answer(&items, &items[0]);
        let mut out = Vec::new();

        let won = play_round(&mut game, &items, "Shar\nBones\nshark\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(won);
        assert!(text.contains("Answer length: 5 letters"));
        assert!(text.contains("Not a valid OSRS item. Try again."));
        assert!(text.contains("Did you mean: Shark, Sharks tooth"));
        assert!(text.contains("Not quite. You have 5 guesses left."));
        assert!(text.contains("S H A R K\n  # # # # #"));
        assert!(text.contains("GE price: 1,234 gp (1k–10k)"));
        assert!(text.contains("You got it!"));
    }

    #[test]
    fn end_of_input_reveals_answer() {
        let items = catalog();
        let mut game = Game::with_answer(&items, &items[2]);
        let mut out = Vec::new();

        let won = play_round(&mut game, &items, "".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!won);
        assert!(text.contains("Out of guesses!"));
        assert!(text.contains("Item:     Bones"));
    }
}
