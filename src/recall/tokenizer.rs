//! Keyword extraction for fact storage and queries.
//!
//! Free text becomes a space-separated string of lowercase tokens: words are
//! split on anything that is not alphanumeric or underscore, then filtered by
//! a fixed stop list and a minimum length of three characters.

/// Words skipped during keyword extraction: articles, auxiliary verbs,
/// pronouns, conjunctions, and common prepositions.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "shall", "can", "need", "dare", "ought",
    "used", "to", "of", "in", "for", "on", "with", "at", "by", "from",
    "as", "into", "through", "during", "before", "after", "above", "below",
    "between", "out", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "just",
    "and", "but", "or", "if", "while", "that", "this", "it", "its",
    "i", "me", "my", "we", "our", "you", "your", "he", "him", "his",
    "she", "her", "they", "them", "their", "what", "which", "who", "whom",
];

/// Minimum token length; shorter words carry too little signal.
const MIN_TOKEN_LEN: usize = 3;

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Extract keywords from text: lowercase, split on non-word boundaries, skip
/// stop words and short words. Returns space-separated keywords.
pub fn extract_keywords(text: &str) -> String {
    let mut out = String::new();
    let mut word = String::new();

    for ch in text.chars().chain(std::iter::once(' ')) {
        if ch.is_alphanumeric() || ch == '_' {
            word.extend(ch.to_lowercase());
        } else {
            if word.chars().count() >= MIN_TOKEN_LEN && !is_stop_word(&word) {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&word);
            }
            word.clear();
        }
    }

    out
}
