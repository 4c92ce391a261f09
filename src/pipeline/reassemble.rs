//! Sentence reassembly: splice the top candidate back into the original

/// Replace the word at `mask_index` in the original sentence with the first
/// candidate and rejoin with single spaces.
///
/// Quirk preserved from the original tool: a mask index of 0 is treated as
/// "no replacement" and yields an empty string instead of splicing at
/// position 0. An empty candidate list leaves the sentence unchanged.
pub fn reassemble(original: &str, candidates: &[String], mask_index: usize) -> String {
    if mask_index == 0 {
        return String::new();
    }

    let mut words: Vec<&str> = original.split(' ').collect();
    if let (Some(slot), Some(candidate)) = (words.get_mut(mask_index), candidates.first()) {
        *slot = candidate;
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splices_first_candidate() {
        let candidates = vec!["dat".to_string(), "die".to_string()];
        assert_eq!(
            reassemble("Ik weet die ik het kan.", &candidates, 2),
            "Ik weet dat ik het kan."
        );
    }

    #[test]
    fn test_index_zero_yields_empty_string() {
        let candidates = vec!["die".to_string()];
        assert_eq!(reassemble("Dat is mooi.", &candidates, 0), "");
    }

    #[test]
    fn test_empty_candidates_leave_sentence_unchanged() {
        assert_eq!(
            reassemble("Ik weet die ik het kan.", &[], 2),
            "Ik weet die ik het kan."
        );
    }

    #[test]
    fn test_out_of_range_index_leaves_sentence_unchanged() {
        let candidates = vec!["dat".to_string()];
        assert_eq!(reassemble("kort zinnetje", &candidates, 9), "kort zinnetje");
    }
}
