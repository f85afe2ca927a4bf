//! Syllabization and weight classification
//!
//! The `Syllabizer` trait is the seam the verifier uses to turn a line of
//! text into syllables and per-syllable weights. `DevanagariSyllabizer` is
//! the default implementation for Sanskrit in Devanagari script.

use crate::models::{Pattern, Weight};
use thiserror::Error;

/// Segmentation failures for a single line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyllabizeError {
    #[error("no syllables found in '{line}'")]
    NoSyllables { line: String },

    /// Vowel sign, virama or anusvara with nothing to attach to
    #[error("orphan sign {sign:?} at char offset {offset}")]
    OrphanSign { sign: char, offset: usize },

    #[error("syllabizer returned {syllables} syllables but {weights} weights")]
    LengthMismatch { syllables: usize, weights: usize },
}

/// Turns a line into syllables and weights
///
/// `syllables` and `weights` must agree in length for the same line.
pub trait Syllabizer: Send + Sync {
    fn syllables(&self, line: &str) -> Result<Vec<String>, SyllabizeError>;

    fn weights(&self, line: &str) -> Result<Vec<Weight>, SyllabizeError>;

    /// Weight pattern of a line
    fn pattern(&self, line: &str) -> Result<Pattern, SyllabizeError> {
        self.weights(line).map(Pattern::new)
    }
}

// ============================================================================
// Devanagari character classes
// ============================================================================

const VIRAMA: char = '\u{094D}';
const NUKTA: char = '\u{093C}';
const AVAGRAHA: char = '\u{093D}';
const OM: char = '\u{0950}';
const CHANDRABINDU: char = '\u{0901}';
const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Consonant,
    /// Independent vowel; `true` when long
    Vowel(bool),
    /// Dependent vowel sign; `true` when long
    VowelSign(bool),
    Virama,
    Nukta,
    /// Anusvara, visarga, jihvamuliya, upadhmaniya
    HeavyCoda,
    Chandrabindu,
    Om,
    Joiner,
    /// Spaces, dandas, digits, avagraha, anything outside the script
    Ignored,
}

fn classify(c: char) -> CharClass {
    match c {
        '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095F}' | '\u{0979}'..='\u{097F}' => {
            CharClass::Consonant
        }
        // आ ई ऊ ऍ ए ऐ ऑ ओ औ ॠ ॡ
        '\u{0906}' | '\u{0908}' | '\u{090A}' | '\u{090D}' | '\u{090F}' | '\u{0910}' | '\u{0911}'
        | '\u{0913}' | '\u{0914}' | '\u{0960}' | '\u{0961}' => CharClass::Vowel(true),
        // अ इ उ ऋ ऌ ऎ ऒ
        '\u{0905}' | '\u{0907}' | '\u{0909}' | '\u{090B}' | '\u{090C}' | '\u{090E}' | '\u{0912}' => {
            CharClass::Vowel(false)
        }
        // ा ी ू ॄ ॅ े ै ॉ ो ौ ॣ
        '\u{093E}' | '\u{0940}' | '\u{0942}' | '\u{0944}' | '\u{0945}' | '\u{0947}' | '\u{0948}'
        | '\u{0949}' | '\u{094B}' | '\u{094C}' | '\u{0963}' => CharClass::VowelSign(true),
        // ि ु ृ ॆ ॊ ॢ
        '\u{093F}' | '\u{0941}' | '\u{0943}' | '\u{0946}' | '\u{094A}' | '\u{0962}' => {
            CharClass::VowelSign(false)
        }
        VIRAMA => CharClass::Virama,
        NUKTA => CharClass::Nukta,
        '\u{0902}' | '\u{0903}' | '\u{1CF5}' | '\u{1CF6}' => CharClass::HeavyCoda,
        CHANDRABINDU => CharClass::Chandrabindu,
        OM => CharClass::Om,
        ZWNJ | ZWJ => CharClass::Joiner,
        AVAGRAHA => CharClass::Ignored,
        _ => CharClass::Ignored,
    }
}

// ============================================================================
// Segmentation
// ============================================================================

/// One akshara-level syllable with what its weight depends on
#[derive(Debug, Clone, PartialEq, Eq)]
struct Syllable {
    text: String,
    /// Consonants before the vowel
    onset: usize,
    long_vowel: bool,
    heavy_coda: bool,
    /// Closed by line-final consonants
    closed: bool,
}

/// Consonant cluster waiting for its vowel
#[derive(Default)]
struct Onset {
    text: String,
    consonants: usize,
    /// Last consonant has no virama yet, so it still carries the inherent vowel
    open: bool,
}

impl Onset {
    fn take_syllable(&mut self, vowel: Option<char>, long_vowel: bool) -> Syllable {
        let mut text = std::mem::take(&mut self.text);
        if let Some(v) = vowel {
            text.push(v);
        }
        let syllable = Syllable {
            text,
            onset: self.consonants,
            long_vowel,
            heavy_coda: false,
            closed: false,
        };
        self.consonants = 0;
        self.open = false;
        syllable
    }
}

/// Default syllabizer for Sanskrit in Devanagari
///
/// The line is read as one continuous stream, so consonant clusters across
/// word boundaries make the preceding syllable heavy.
#[derive(Debug, Clone, Default)]
pub struct DevanagariSyllabizer;

impl DevanagariSyllabizer {
    pub fn new() -> Self {
        Self
    }

    fn segment(&self, line: &str) -> Result<Vec<Syllable>, SyllabizeError> {
        let mut syllables: Vec<Syllable> = Vec::new();
        let mut onset = Onset::default();

        for (offset, c) in line.chars().enumerate() {
            match classify(c) {
                CharClass::Consonant => {
                    if onset.open {
                        syllables.push(onset.take_syllable(None, false));
                    }
                    onset.text.push(c);
                    onset.consonants += 1;
                    onset.open = true;
                }
                CharClass::Nukta | CharClass::Joiner => {
                    if !onset.text.is_empty() {
                        onset.text.push(c);
                    }
                }
                CharClass::Virama => {
                    if !onset.open {
                        return Err(SyllabizeError::OrphanSign { sign: c, offset });
                    }
                    onset.text.push(c);
                    onset.open = false;
                }
                CharClass::VowelSign(long) => {
                    if !onset.open {
                        return Err(SyllabizeError::OrphanSign { sign: c, offset });
                    }
                    syllables.push(onset.take_syllable(Some(c), long));
                }
                CharClass::Vowel(long) => {
                    if onset.open {
                        syllables.push(onset.take_syllable(None, false));
                    }
                    // Dead consonants before an independent vowel become its onset
                    syllables.push(onset.take_syllable(Some(c), long));
                }
                CharClass::HeavyCoda | CharClass::Chandrabindu => {
                    if onset.open {
                        syllables.push(onset.take_syllable(None, false));
                    }
                    match syllables.last_mut() {
                        Some(last) if onset.text.is_empty() => {
                            last.text.push(c);
                            if matches!(classify(c), CharClass::HeavyCoda) {
                                last.heavy_coda = true;
                            }
                        }
                        _ => return Err(SyllabizeError::OrphanSign { sign: c, offset }),
                    }
                }
                CharClass::Om => {
                    if onset.open {
                        syllables.push(onset.take_syllable(None, false));
                    }
                    syllables.push(onset.take_syllable(Some(c), true));
                }
                CharClass::Ignored => {}
            }
        }

        if onset.open {
            syllables.push(onset.take_syllable(None, false));
        }

        // Line-final dead consonants close the last syllable
        if !onset.text.is_empty() {
            match syllables.last_mut() {
                Some(last) => {
                    last.text.push_str(&onset.text);
                    last.closed = true;
                }
                None => {
                    return Err(SyllabizeError::NoSyllables { line: line.to_string() });
                }
            }
        }

        if syllables.is_empty() {
            return Err(SyllabizeError::NoSyllables { line: line.to_string() });
        }
        Ok(syllables)
    }

    fn classify_weights(syllables: &[Syllable]) -> Vec<Weight> {
        syllables
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let before_cluster = syllables.get(i + 1).map_or(false, |next| next.onset >= 2);
                if s.long_vowel || s.heavy_coda || s.closed || before_cluster {
                    Weight::Heavy
                } else {
                    Weight::Light
                }
            })
            .collect()
    }
}

impl Syllabizer for DevanagariSyllabizer {
    fn syllables(&self, line: &str) -> Result<Vec<String>, SyllabizeError> {
        Ok(self.segment(line)?.into_iter().map(|s| s.text).collect())
    }

    fn weights(&self, line: &str) -> Result<Vec<Weight>, SyllabizeError> {
        let syllables = self.segment(line)?;
        Ok(Self::classify_weights(&syllables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(line: &str) -> String {
        DevanagariSyllabizer::new().pattern(line).unwrap().to_string()
    }

    #[test]
    fn test_long_vowels_and_visarga() {
        assert_eq!(scan("रामः"), "GG");
        assert_eq!(scan("कमल"), "LLL");
        assert_eq!(scan("सीता"), "GG");
    }

    #[test]
    fn test_conjunct_makes_previous_heavy() {
        // वा-ग-र्था-वि-व
        let syl = DevanagariSyllabizer::new();
        assert_eq!(
            syl.syllables("वागर्थाविव").unwrap(),
            vec!["वा", "ग", "र्था", "वि", "व"]
        );
        assert_eq!(scan("वागर्थाविव"), "GGGLL");
    }

    #[test]
    fn test_anusvara_and_cluster_across_words() {
        assert_eq!(scan("संपृक्तौ"), "GGG");
        // Cluster at the start of the next word still weighs on "न"
        assert_eq!(scan("नमामीशमीशान निर्वाणरूपं"), "LGGLGGLGGLGG");
    }

    #[test]
    fn test_final_consonant_closes_syllable() {
        let syl = DevanagariSyllabizer::new();
        assert_eq!(syl.syllables("भजेऽहम्").unwrap(), vec!["भ", "जे", "हम्"]);
        assert_eq!(scan("भजेऽहम्"), "LGG");
    }

    #[test]
    fn test_independent_vowels() {
        assert_eq!(scan("अमृत"), "LLL");
        assert_eq!(scan("ईश"), "GL");
        assert_eq!(scan("ॐ"), "G");
    }

    #[test]
    fn test_punctuation_and_digits_ignored() {
        assert_eq!(scan("राम ॥१॥"), "GL");
    }

    #[test]
    fn test_errors() {
        let syl = DevanagariSyllabizer::new();
        assert_eq!(
            syl.weights("hello"),
            Err(SyllabizeError::NoSyllables { line: "hello".to_string() })
        );
        assert!(matches!(
            syl.weights("ा"),
            Err(SyllabizeError::OrphanSign { sign: 'ा', offset: 0 })
        ));
        assert!(matches!(syl.weights("ं"), Err(SyllabizeError::OrphanSign { .. })));
        assert!(matches!(syl.weights("क्"), Err(SyllabizeError::NoSyllables { .. })));
    }

    #[test]
    fn test_syllables_and_weights_align() {
        let syl = DevanagariSyllabizer::new();
        let line = "जगतः पितरौ वन्दे पार्वतीपरमेश्वरौ";
        assert_eq!(
            syl.syllables(line).unwrap().len(),
            syl.weights(line).unwrap().len()
        );
    }
}
