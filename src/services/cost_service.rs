//! Credit cost engine for messages that are not tied to a priced report
//!
//! Credits are the sum of a base cost, per-character and per-word costs, a
//! vowel surcharge on every third character, a long-message penalty and a
//! uniqueness bonus, doubled for palindromes and floored at one credit.

use std::collections::HashSet;

const BASE_COST: f64 = 1.0;
const CHARACTER_COST: f64 = 0.05;
const THIRD_VOWEL_COST: f64 = 0.3;
const LENGTH_PENALTY: f64 = 5.0;
const LENGTH_PENALTY_THRESHOLD: usize = 100;
const UNIQUE_WORDS_BONUS: f64 = -2.0;
const PALINDROME_MULTIPLIER: f64 = 2.0;
const MINIMUM_CREDITS: f64 = 1.0;

/// Credits consumed by a message based purely on its text content
pub fn text_based_credits(text: &str) -> f64 {
    let words = extract_words(text);

    let mut total = BASE_COST
        + character_cost(text)
        + total_word_cost(&words)
        + unique_words_bonus(&words)
        + third_vowel_cost(text)
        + length_penalty(text);

    // The multiplier applies after all additive rules
    total *= palindrome_multiplier(text);

    round2(total.max(MINIMUM_CREDITS))
}

/// Words of the text: alphanumerics plus apostrophes and hyphens, with every
/// other character treated as a separator, lowercased
pub fn extract_words(text: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || matches!(c, '\'' | '-' | ' ') {
            cleaned.push(c);
        } else if !cleaned.ends_with(' ') {
            cleaned.push(' ');
        }
    }

    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn character_cost(text: &str) -> f64 {
    text.chars().count() as f64 * CHARACTER_COST
}

fn word_cost(word: &str) -> f64 {
    match word.chars().count() {
        0..=3 => 0.1,
        4..=7 => 0.2,
        _ => 0.3,
    }
}

fn total_word_cost(words: &[String]) -> f64 {
    words.iter().map(|w| word_cost(w)).sum()
}

fn unique_words_bonus(words: &[String]) -> f64 {
    let distinct: HashSet<&str> = words.iter().map(String::as_str).collect();
    if distinct.len() == words.len() {
        UNIQUE_WORDS_BONUS
    } else {
        0.0
    }
}

/// Vowels at 1-based character positions 3, 6, 9, ...
fn third_position_vowels(text: &str) -> usize {
    text.chars()
        .enumerate()
        .filter(|(idx, c)| (idx + 1) % 3 == 0 && "aeiou".contains(c.to_ascii_lowercase()))
        .count()
}

fn third_vowel_cost(text: &str) -> f64 {
    third_position_vowels(text) as f64 * THIRD_VOWEL_COST
}

fn length_penalty(text: &str) -> f64 {
    if text.chars().count() > LENGTH_PENALTY_THRESHOLD {
        LENGTH_PENALTY
    } else {
        0.0
    }
}

/// Palindrome check over ASCII alphanumerics only, case-insensitive
fn is_palindrome(text: &str) -> bool {
    let sanitized: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    sanitized.iter().eq(sanitized.iter().rev())
}

fn palindrome_multiplier(text: &str) -> f64 {
    if is_palindrome(text) {
        PALINDROME_MULTIPLIER
    } else {
        1.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
