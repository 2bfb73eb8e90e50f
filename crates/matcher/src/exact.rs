use catalog::EmojiCatalog;

use crate::types::WordResult;

/// Words of `text` split on single ASCII spaces; repeated spaces yield empty words.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
}

/// True when splitting on ASCII space produces more than one word.
pub fn is_multi_word(text: &str) -> bool {
    split_words(text).nth(1).is_some()
}

/// Direct key lookup of `text`. Hit scores 1.0, miss scores 0.0.
pub fn exact_match(text: &str, catalog: &EmojiCatalog) -> WordResult {
    match catalog.get(text) {
        Some(entry) => WordResult::exact(text, entry.clone()),
        None => WordResult::miss(text),
    }
}

/// First word of `text`, left to right, that is a catalog key.
///
/// The remaining words are ignored once a hit is found.
pub fn sentence_exact_match(text: &str, catalog: &EmojiCatalog) -> WordResult {
    split_words(text)
        .find_map(|word| catalog.get(word).map(|entry| WordResult::exact(word, entry.clone())))
        .unwrap_or_else(|| WordResult::miss(text))
}
