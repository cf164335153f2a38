/// Whole-word containment test over text already canonicalized by
/// `normalize_text`. Words there are delimited by single spaces, so padding
/// both sides with a space turns word-boundary matching into plain substring
/// containment.
pub fn contains_whole_word(normalized_text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let haystack = format!(" {} ", normalized_text);
    let needle = format!(" {} ", word);
    haystack.contains(&needle)
}
