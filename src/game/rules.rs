//! Guess scoring and hint formatting

/// Lowercase and keep only `a-z`, so "Rune platebody (g)" and
/// "runeplatebodyg" compare equal
pub fn normalize_for_compare(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Coarse GE price bracket shown as a hint
pub fn price_band(price: Option<i64>) -> &'static str {
    match price {
        None => "Unknown",
        Some(p) if p < 1_000 => "< 1k",
        Some(p) if p < 10_000 => "1k–10k",
        Some(p) if p < 100_000 => "10k–100k",
        Some(p) if p < 1_000_000 => "100k–1m",
        Some(p) if p < 10_000_000 => "1m–10m",
        Some(_) => "10m+",
    }
}

/// Price with thousands separators ("1,234,567"), or "Unknown"
pub fn format_price(price: Option<i64>) -> String {
    let Some(price) = price else {
        return "Unknown".to_string();
    };

    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if price < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_release_date(date: Option<&str>) -> &str {
    match date {
        Some(d) if !d.is_empty() => d,
        _ => "Unknown",
    }
}

/// Per-letter feedback for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the answer
    Present,
    Absent,
}

impl LetterScore {
    pub fn symbol(self) -> char {
        match self {
            LetterScore::Correct => '#',
            LetterScore::Present => '?',
            LetterScore::Absent => '.',
        }
    }
}

/// Wordle-style scoring of `guess` against `answer`.
///
/// Exact matches are taken first; each answer letter can then satisfy at
/// most one `Present` guess letter, leftmost first. The result has one entry
/// per guess letter.
pub fn score_guess(guess: &str, answer: &str) -> Vec<LetterScore> {
    let guess: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = answer.chars().map(Some).collect();
    let mut result = vec![LetterScore::Absent; guess.len()];

    for (i, &c) in guess.iter().enumerate() {
        if remaining.get(i).copied().flatten() == Some(c) {
            result[i] = LetterScore::Correct;
            remaining[i] = None;
        }
    }

    for (i, &c) in guess.iter().enumerate() {
        if result[i] == LetterScore::Correct {
            continue;
        }
        if let Some(pos) = remaining.iter().position(|r| *r == Some(c)) {
            result[i] = LetterScore::Present;
            remaining[pos] = None;
        }
    }

    result
}
