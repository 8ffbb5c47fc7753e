//! Shape assemblers.
//!
//! Each assembler turns a slice of sample sentences into text of an exact
//! size. Short pools are cycled, never padded with filler, so the output size
//! does not depend on how many samples a pool has.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Direction, FillError};

/// Fragments shorter than this many characters are dropped.
pub const DEFAULT_MIN_FRAGMENT_CHARS: usize = 10;

/// Probability that a list item gets an imperative verb in front of it.
const VERB_PREFIX_PROBABILITY: f64 = 0.5;

const LTR_VERBS: [&str; 10] = [
    "Consider",
    "Explore",
    "Review",
    "Analyze",
    "Implement",
    "Develop",
    "Create",
    "Assess",
    "Monitor",
    "Evaluate",
];

const RTL_VERBS: [&str; 10] = [
    "فكر في",
    "استكشف",
    "راجع",
    "حلل",
    "طبق",
    "طور",
    "ابتكر",
    "قيّم",
    "راقب",
    "تابع",
];

/// Used only when a pool yields no usable words at all.
const FALLBACK_HEADING: &str = "Sample heading text";
const FALLBACK_SENTENCE: &str = "Sample placeholder sentence";

/// Structural type of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A single line sized in words.
    Heading,
    /// Running text sized in sentences.
    #[default]
    Paragraph,
    /// A numbered list sized in items.
    List,
}

impl Shape {
    /// Every shape.
    pub const ALL: [Shape; 3] = [Shape::Heading, Shape::Paragraph, Shape::List];

    /// Smallest accepted target size.
    #[must_use]
    pub const fn min_target(self) -> usize {
        match self {
            Shape::List => 3,
            Shape::Heading | Shape::Paragraph => 1,
        }
    }

    /// What the target size counts.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Shape::Heading => "words",
            Shape::Paragraph => "sentences",
            Shape::List => "items",
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Heading => "heading",
            Shape::Paragraph => "paragraph",
            Shape::List => "list",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == wanted)
            .ok_or_else(|| FillError::UnknownShape(s.to_string()))
    }
}

/// Text before the first period.
fn first_clause(sentence: &str) -> &str {
    sentence.split('.').next().unwrap_or_default()
}

fn has_terminal_punctuation(text: &str) -> bool {
    text.ends_with(['.', '!', '?'])
}

/// Drop commas and semicolons left at the end of a sliced heading.
///
/// A word made only of separators is kept so the word count holds.
fn trim_trailing_separator(text: &mut String) {
    let kept = text.trim_end_matches([',', '،', ';', '؛', ':']).len();
    if kept < text.len() && !text[..kept].ends_with(char::is_whitespace) && kept > 0 {
        text.truncate(kept);
    }
}

/// Split every sample into trimmed fragments of at least `min_chars`.
///
/// Falls back to all non-empty fragments, then to a fixed sentence, so the
/// result is never empty.
fn fragments<'a>(samples: &[&'a str], terminators: &[char], min_chars: usize) -> Vec<&'a str> {
    let all: Vec<&str> = samples
        .iter()
        .flat_map(|sample| sample.split(terminators))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect();
    let long: Vec<&str> = all
        .iter()
        .copied()
        .filter(|fragment| fragment.chars().count() >= min_chars)
        .collect();
    if !long.is_empty() {
        long
    } else if !all.is_empty() {
        all
    } else {
        vec![FALLBACK_SENTENCE]
    }
}

fn shuffled<'a, R: Rng + ?Sized>(sentences: &'a [String], rng: &mut R) -> Vec<&'a str> {
    let mut samples: Vec<&str> = sentences.iter().map(String::as_str).collect();
    samples.shuffle(rng);
    samples
}

/// Build a heading of exactly `target` words.
///
/// Words come from the first clause of every sample, in shuffled order, and
/// repeat as often as needed.
pub fn assemble_heading<R: Rng + ?Sized>(
    sentences: &[String],
    target: usize,
    rng: &mut R,
) -> String {
    let clauses: Vec<&str> = shuffled(sentences, rng)
        .into_iter()
        .map(first_clause)
        .collect();
    let mut words: Vec<&str> = clauses
        .iter()
        .flat_map(|clause| clause.split_whitespace())
        .collect();
    if words.is_empty() {
        words = FALLBACK_HEADING.split_whitespace().collect();
    }

    let mut text = words
        .iter()
        .cycle()
        .take(target)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    trim_trailing_separator(&mut text);
    if !has_terminal_punctuation(&text) {
        text.push('.');
    }
    text
}

/// Build a paragraph of exactly `target` sentences.
///
/// Samples are split on the same terminators the sentence counter uses, so a
/// sample containing `!` or `?` cannot inflate the count.
pub fn assemble_paragraph<R: Rng + ?Sized>(
    sentences: &[String],
    target: usize,
    min_chars: usize,
    rng: &mut R,
) -> String {
    let samples = shuffled(sentences, rng);
    fragments(&samples, &['.', '!', '?'], min_chars)
        .into_iter()
        .cycle()
        .take(target)
        .map(|sentence| format!("{sentence}."))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a numbered list of `target` items.
///
/// Right-to-left text is also split on the Arabic question mark and `!`.
/// About half of the items get an imperative verb in front.
pub fn assemble_list<R: Rng + ?Sized>(
    sentences: &[String],
    target: usize,
    direction: Direction,
    min_chars: usize,
    rng: &mut R,
) -> String {
    let terminators: &[char] = match direction {
        Direction::Rtl => &['.', '؟', '!'],
        Direction::Ltr => &['.'],
    };
    let samples = shuffled(sentences, rng);
    let items: Vec<&str> = fragments(&samples, terminators, min_chars)
        .into_iter()
        .cycle()
        .take(target)
        .collect();

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, with_verb(item, direction, rng)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn with_verb<R: Rng + ?Sized>(item: &str, direction: Direction, rng: &mut R) -> String {
    if !rng.random_bool(VERB_PREFIX_PROBABILITY) {
        return item.to_string();
    }
    let verbs: &[&str] = match direction {
        Direction::Rtl => &RTL_VERBS,
        Direction::Ltr => &LTR_VERBS,
    };
    let verb = verbs[rng.random_range(0..verbs.len())];
    if item.starts_with(verb) {
        return item.to_string();
    }
    match direction {
        Direction::Rtl => format!("{verb} {item}"),
        Direction::Ltr => {
            let mut chars = item.chars();
            match chars.next() {
                Some(first) => format!("{verb} {}{}", first.to_lowercase(), chars.as_str()),
                None => verb.to_string(),
            }
        }
    }
}
