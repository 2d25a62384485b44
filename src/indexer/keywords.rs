//! Frequency-based keyword extraction
//!
//! Runs of Han ideographs are taken whole as tokens; Latin-script runs
//! (accented letters included) are lower-cased. There is no stemming and no
//! relevance weighting.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}+|\p{Latin}+").expect("token regex"));

/// Common Chinese and English function words
pub const STOP_WORDS: &[&str] = &[
    // Chinese
    "的", "了", "和", "是", "在", "我", "有", "他", "这", "中", "为", "也", "就", "都", "而",
    "与", "及", "或", "等", "被", "把", "从", "对", "到", "以", "之", "上", "下", "不", "很",
    "我们", "你们", "他们", "她们", "它们", "这个", "那个", "这些", "那些", "一个", "没有",
    "什么", "因为", "所以", "但是", "如果", "可以", "就是", "还是", "以及", "或者", "并且",
    "而且", "其中", "通过", "进行", "使用", "需要", "这样", "那么", "然后", "已经",
    // English
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "of", "to", "in", "on", "at",
    "by", "for", "with", "from", "as", "is", "are", "was", "were", "be", "been", "being",
    "it", "its", "this", "that", "these", "those", "he", "she", "we", "they", "you", "i",
    "me", "my", "our", "your", "his", "her", "their", "them", "not", "no", "do", "does",
    "did", "have", "has", "had", "can", "could", "will", "would", "should", "may", "might",
    "so", "than", "too", "very", "just", "also", "into", "about", "there", "here", "which",
    "what", "who", "when", "where", "how", "all", "any", "each", "more", "most", "other",
    "some", "such", "only", "own", "same",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Return up to `max_keywords` distinct terms, most frequent first
///
/// Equal counts keep the order in which the terms first appeared.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in TOKEN.find_iter(text) {
        let token = token.as_str().to_lowercase();
        if token.chars().count() <= 1 || STOP_SET.contains(token.as_str()) {
            continue;
        }

        match positions.get(&token) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(max_keywords)
        .map(|(token, _)| token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_order() {
        let keywords = extract_keywords("apple apple banana banana banana cherry", 2);
        assert_eq!(keywords, vec!["banana", "apple"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let keywords = extract_keywords("zeta alpha zeta alpha beta", 10);
        assert_eq!(keywords, vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_lowercases_latin() {
        let keywords = extract_keywords("Rust RUST rust Cargo", 10);
        assert_eq!(keywords, vec!["rust", "cargo"]);
    }

    #[test]
    fn test_drops_stop_words_and_short_tokens() {
        let keywords = extract_keywords("The cat and a dog x y z is here", 10);
        assert_eq!(keywords, vec!["cat", "dog"]);
    }

    #[test]
    fn test_han_runs_are_whole_tokens() {
        let keywords = extract_keywords("文档 文档 搜索索引，文档", 10);
        assert_eq!(keywords, vec!["文档", "搜索索引"]);
    }

    #[test]
    fn test_mixed_scripts_split_at_boundaries() {
        let keywords = extract_keywords("安装rust工具 rust", 10);
        assert_eq!(keywords, vec!["rust", "安装", "工具"]);
    }

    #[test]
    fn test_chinese_stop_words_and_single_chars() {
        let keywords = extract_keywords("我们 的 配置 是 配置", 10);
        assert_eq!(keywords, vec!["配置"]);
    }

    #[test]
    fn test_digits_and_punctuation_ignored() {
        let keywords = extract_keywords("v2.0 -- 100% (beta)", 10);
        assert_eq!(keywords, vec!["beta"]);
    }

    #[test]
    fn test_accented_latin_words_stay_whole() {
        let keywords = extract_keywords("Café naïve CAFÉ résumé", 10);
        assert_eq!(keywords, vec!["café", "naïve", "résumé"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_keywords("", 10).is_empty());
        assert!(extract_keywords("apple", 0).is_empty());
    }
}
