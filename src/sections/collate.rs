//! Vietnamese-aware string ordering.
//!
//! Three levels, compared in turn:
//! - primary: base letters in Vietnamese alphabet order
//!   (a ă â b c d đ e ê ... o ô ơ ... u ư ...), digits before letters,
//!   spaces and punctuation before digits
//! - secondary: tone marks, unmarked < huyền < hỏi < ngã < sắc < nặng
//! - tertiary: case, lowercase first
//!
//! Input is decomposed (NFD) first, so precomposed and combining spellings
//! of the same text get the same weights.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const GRAVE: char = '\u{0300}';
const ACUTE: char = '\u{0301}';
const CIRCUMFLEX: char = '\u{0302}';
const TILDE: char = '\u{0303}';
const BREVE: char = '\u{0306}';
const HOOK_ABOVE: char = '\u{0309}';
const HORN: char = '\u{031B}';
const DOT_BELOW: char = '\u{0323}';

const CLASS_SYMBOL: u64 = 1;
const CLASS_DIGIT: u64 = 2;
const CLASS_LETTER: u64 = 3;

/// Sort key for one string. Ordering of keys is the collation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u64>,
    secondary: Vec<(u8, u32)>,
    tertiary: Vec<u8>,
    // Last resort so distinct strings never compare equal
    raw: String,
}

#[derive(Debug)]
struct Element {
    base: char,
    letter_mark: u8,
    tone: u8,
    other_mark: u32,
    upper: bool,
}

impl Element {
    fn new(c: char) -> Self {
        let upper = c.is_uppercase();
        let lower = c.to_lowercase().next().unwrap_or(c);
        // đ has no decomposition
        let (base, letter_mark) = match lower {
            'đ' => ('d', 1),
            other => (other, 0),
        };
        Self {
            base,
            letter_mark,
            tone: 0,
            other_mark: 0,
            upper,
        }
    }

    fn apply_mark(&mut self, mark: char) {
        let letter_mark = match (self.base, mark) {
            ('a', BREVE) => Some(1),
            ('a', CIRCUMFLEX) => Some(2),
            ('e', CIRCUMFLEX) | ('o', CIRCUMFLEX) => Some(1),
            ('o', HORN) => Some(2),
            ('u', HORN) => Some(1),
            _ => None,
        };
        if let Some(rank) = letter_mark {
            self.letter_mark = rank;
            return;
        }

        let tone = match mark {
            GRAVE => 1,
            HOOK_ABOVE => 2,
            TILDE => 3,
            ACUTE => 4,
            DOT_BELOW => 5,
            _ => 0,
        };
        if tone != 0 && self.tone == 0 {
            self.tone = tone;
        } else if self.other_mark == 0 {
            self.other_mark = mark as u32;
        }
    }

    fn primary(&self) -> u64 {
        let class = if self.base.is_alphabetic() {
            CLASS_LETTER
        } else if self.base.is_numeric() {
            CLASS_DIGIT
        } else {
            CLASS_SYMBOL
        };
        (class << 32) | ((self.base as u64) << 2) | self.letter_mark as u64
    }
}

pub fn collation_key(s: &str) -> CollationKey {
    let mut elements: Vec<Element> = Vec::with_capacity(s.len());

    for c in s.nfd() {
        if is_combining_mark(c) {
            // A leading mark has nothing to attach to
            if let Some(last) = elements.last_mut() {
                last.apply_mark(c);
            }
        } else {
            elements.push(Element::new(c));
        }
    }

    CollationKey {
        primary: elements.iter().map(Element::primary).collect(),
        secondary: elements.iter().map(|e| (e.tone, e.other_mark)).collect(),
        tertiary: elements.iter().map(|e| e.upper as u8).collect(),
        raw: s.to_string(),
    }
}

/// Compare two strings in Vietnamese collation order.
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}
