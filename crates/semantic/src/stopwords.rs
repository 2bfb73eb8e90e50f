use std::collections::HashSet;

use once_cell::sync::Lazy;

/// English stop words shared by the built-in embedders.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing",
    "done", "down", "due", "during", "each", "either", "else", "elsewhere", "enough", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "for", "former",
    "formerly", "from", "further", "had", "has", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hers", "herself", "him", "himself", "his", "how",
    "however", "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "last",
    "latter", "least", "less", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "neither", "never",
    "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "only", "onto", "or", "other", "others",
    "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please",
    "quite", "rather", "really", "same", "seem", "seemed", "seeming", "seems", "several", "she",
    "should", "since", "so", "some", "somehow", "someone", "something", "sometime", "sometimes",
    "somewhere", "still", "such", "than", "that", "the", "their", "them", "themselves", "then",
    "thence", "there", "thereafter", "thereby", "therefore", "therein", "these", "they", "this",
    "those", "though", "through", "throughout", "thru", "thus", "to", "together", "too",
    "toward", "towards", "under", "unless", "until", "up", "upon", "us", "used", "using",
    "various", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

static ENGLISH_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Membership test against [`ENGLISH_STOP_WORDS`]. Case-sensitive; callers lowercase first.
pub fn is_english_stop_word(word: &str) -> bool {
    ENGLISH_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_function_words_are_stop_words() {
        for word in ["the", "is", "i", "am", "a", "and"] {
            assert!(is_english_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn content_words_are_not_stop_words() {
        for word in ["happy", "sad", "pizza", "today", ""] {
            assert!(!is_english_stop_word(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(!is_english_stop_word("The"));
    }
}
