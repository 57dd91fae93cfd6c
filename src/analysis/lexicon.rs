//! Built-in word-list classifier.
//!
//! Scores text by summing per-word weights from a small general-purpose
//! lexicon, flipping the sign of a word that follows a negation. Emoji name
//! tokens produced by the normalizer are scored like words. Output follows
//! the binary `POSITIVE`/`NEGATIVE` convention of SST-2 style models, with the
//! score expressing confidence in the chosen label.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::backend::{Classifier, ClassifierError};
use crate::models::SentimentResult;

pub const POSITIVE: &str = "POSITIVE";
pub const NEGATIVE: &str = "NEGATIVE";

/// How many following words a negation applies to.
const NEGATION_WINDOW: usize = 3;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("love", 0.9),
    ("loved", 0.9),
    ("loving", 0.8),
    ("like", 0.4),
    ("enjoy", 0.7),
    ("enjoyed", 0.7),
    ("good", 0.6),
    ("great", 0.8),
    ("excellent", 0.9),
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("wonderful", 0.9),
    ("fantastic", 0.9),
    ("best", 0.8),
    ("better", 0.5),
    ("happy", 0.7),
    ("glad", 0.6),
    ("nice", 0.5),
    ("beautiful", 0.7),
    ("perfect", 0.9),
    ("fun", 0.6),
    ("easy", 0.4),
    ("helpful", 0.6),
    ("recommend", 0.6),
    ("impressive", 0.7),
    ("brilliant", 0.8),
    ("thanks", 0.5),
    ("thank", 0.5),
    ("win", 0.6),
    ("success", 0.7),
    ("works", 0.3),
    // French
    ("aime", 0.9),
    ("adore", 0.9),
    ("bon", 0.6),
    ("bien", 0.5),
    ("super", 0.7),
    // emoji name tokens
    ("red_heart", 0.9),
    ("thumbs_up", 0.7),
    ("smiling_face_with_heart-eyes", 0.9),
    ("grinning_face", 0.6),
    ("face_with_tears_of_joy", 0.5),
    ("party_popper", 0.6),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("hate", -0.9),
    ("hated", -0.9),
    ("dislike", -0.6),
    ("bad", -0.6),
    ("terrible", -0.9),
    ("awful", -0.9),
    ("horrible", -0.9),
    ("worst", -0.9),
    ("worse", -0.6),
    ("poor", -0.6),
    ("sad", -0.7),
    ("angry", -0.7),
    ("annoying", -0.6),
    ("annoyed", -0.6),
    ("frustrating", -0.7),
    ("frustrated", -0.7),
    ("disappointing", -0.8),
    ("disappointed", -0.8),
    ("broken", -0.6),
    ("bug", -0.4),
    ("bugs", -0.4),
    ("crash", -0.6),
    ("crashes", -0.6),
    ("fail", -0.6),
    ("failed", -0.6),
    ("error", -0.4),
    ("slow", -0.4),
    ("useless", -0.8),
    ("boring", -0.6),
    ("difficult", -0.4),
    ("confusing", -0.5),
    ("problem", -0.4),
    ("déteste", -0.9),
    ("mauvais", -0.6),
    ("thumbs_down", -0.7),
    ("angry_face", -0.7),
    ("crying_face", -0.6),
    ("broken_heart", -0.8),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "none", "cannot", "cant", "can't", "don't", "dont",
    "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't", "wasnt", "won't",
    "wont", "aren't", "arent", "hardly", "pas",
];

/// Deterministic lexicon scorer.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    words: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconClassifier {
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(word, weight)| (word.to_string(), *weight))
            .collect();
        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();
        Self { words, negations }
    }

    /// Add or override a word weight. Weights are clamped to `[-1, 1]`.
    pub fn with_word(mut self, word: &str, weight: f64) -> Self {
        self.words.insert(word.to_lowercase(), weight.clamp(-1.0, 1.0));
        self
    }

    /// Raw polarity in `[-1, 1]`; `0.0` when nothing matched.
    pub fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut negated_for = 0usize;

        for token in tokenize(text) {
            if self.negations.contains(&token) {
                negated_for = NEGATION_WINDOW;
                continue;
            }

            if let Some(&weight) = self.words.get(&token) {
                total += if negated_for > 0 { -weight } else { weight };
                matched += 1;
            }
            negated_for = negated_for.saturating_sub(1);
        }

        if matched == 0 {
            0.0
        } else {
            (total / matched as f64).clamp(-1.0, 1.0)
        }
    }

    /// Map polarity to a binary label with a confidence in `[0.5, 1]`.
    pub fn score(&self, text: &str) -> SentimentResult {
        let polarity = self.polarity(text);
        let confidence = 0.5 + polarity.abs() / 2.0;
        let label = if polarity < 0.0 { NEGATIVE } else { POSITIVE };
        SentimentResult::new(label, confidence)
    }
}

#[async_trait]
impl Classifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        Ok(self.score(text))
    }
}

/// Lowercased words; `:emoji_name:` tokens keep their inner name.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || c == ':')
        .map(|word| {
            word.trim_matches(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-' || c == '\''))
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .flat_map(|word| {
            // "J'aime" -> "j'aime", "aime"; "don't" stays whole
            let elided = word
                .split_once('\'')
                .filter(|(prefix, _)| prefix.chars().count() <= 2)
                .map(|(_, rest)| rest.to_string());
            std::iter::once(word).chain(elided.filter(|w| !w.is_empty()))
        })
}
