//! Text statistics
//!
//! Every function re-scans the input; nothing is memoized between counters.

/// Vowels counted after lowercasing. The accented subset is the French one
/// the report has always used (no circumflexes).
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'é', 'è', 'à', 'ù'];

/// Consonants counted after lowercasing. `y` and `ç` are not part of it.
const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'z',
];

/// Number of Unicode scalar values in `text`
pub fn length(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn vowel_count(text: &str) -> usize {
    count_lowercase_in(text, VOWELS)
}

pub fn consonant_count(text: &str) -> usize {
    count_lowercase_in(text, CONSONANTS)
}

fn count_lowercase_in(text: &str, set: &[char]) -> usize {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| set.contains(c))
        .count()
}

/// Longest token; ties keep the earliest. Empty when there are no tokens.
pub fn longest_word(text: &str) -> &str {
    pick_word(text, |candidate, best| candidate > best)
}

/// Shortest token; ties keep the earliest. Empty when there are no tokens.
///
/// Leading whitespace does not produce an empty first token, so `" mot deux"`
/// gives `"mot"` rather than `""` as a regex split on `\s+` would.
pub fn shortest_word(text: &str) -> &str {
    pick_word(text, |candidate, best| candidate < best)
}

/// Keeps the first token for which no later token `beats` it by length.
fn pick_word(text: &str, beats: impl Fn(usize, usize) -> bool) -> &str {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return "";
    };
    let mut best = (first, length(first));
    for word in words {
        let len = length(word);
        if beats(len, best.1) {
            best = (word, len);
        }
    }
    best.0
}
