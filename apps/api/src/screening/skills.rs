//! Skill matching — whole-word presence of each required skill in resume text.
//!
//! A skill matches only where it is bounded on both sides by a non-alphanumeric
//! character or the edge of the text, so "java" never matches inside "javascript".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Found skills, in required-skill order.
    pub matched: Vec<String>,
    /// Remaining skills, in required-skill order.
    pub missing: Vec<String>,
}

/// Partitions `required_skills` into matched and missing against `normalized_text`.
pub fn match_skills(normalized_text: &str, required_skills: &[String]) -> SkillMatch {
    let (matched, missing): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| contains_phrase(normalized_text, skill));
    SkillMatch { matched, missing }
}

/// True if `phrase` occurs in `text` with token boundaries on both ends.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(pos) = text[from..].find(phrase) {
        let start = from + pos;
        let end = start + phrase.len();

        let left_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let right_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if left_ok && right_ok {
            return true;
        }

        // advance one char so overlapping candidates are still considered
        from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_inside_word_does_not_match() {
        assert!(!contains_phrase("javascript developer", "java"));
        assert!(!contains_phrase("mysql admin", "sql"));
    }

    #[test]
    fn test_punctuation_counts_as_boundary() {
        assert!(contains_phrase("skills: java, sql.", "java"));
        assert!(contains_phrase("skills: java, sql.", "sql"));
        assert!(contains_phrase("(python)", "python"));
    }

    #[test]
    fn test_match_at_text_edges() {
        assert!(contains_phrase("java", "java"));
        assert!(contains_phrase("java developer", "java"));
        assert!(contains_phrase("senior java", "java"));
    }

    #[test]
    fn test_multi_word_skill_requires_contiguous_phrase() {
        assert!(contains_phrase("built services with spring boot and kafka", "spring boot"));
        assert!(!contains_phrase("boot spring", "spring boot"));
        assert!(!contains_phrase("spring and boot", "spring boot"));
        assert!(!contains_phrase("spring bootstrap", "spring boot"));
    }

    #[test]
    fn test_later_occurrence_matches_after_rejected_candidate() {
        assert!(contains_phrase("javascript and java", "java"));
    }

    #[test]
    fn test_overlapping_candidates() {
        assert!(contains_phrase("aaa aa", "aa"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!contains_phrase("", "java"));
        assert!(!contains_phrase("java", ""));
    }

    #[test]
    fn test_non_ascii_neighbours() {
        assert!(!contains_phrase("éjava", "java"));
        assert!(contains_phrase("java—sql", "java"));
    }

    #[test]
    fn test_partition_preserves_required_order() {
        let required = skills(&[
            "python",
            "django",
            "flask",
            "pandas",
            "numpy",
            "machine learning",
            "sql",
        ]);
        let result = match_skills(
            "experienced python and pandas developer with sql skills",
            &required,
        );
        assert_eq!(result.matched, skills(&["python", "pandas", "sql"]));
        assert_eq!(
            result.missing,
            skills(&["django", "flask", "numpy", "machine learning"])
        );
    }

    #[test]
    fn test_matched_and_missing_cover_required_disjointly() {
        let required = skills(&["java", "spring", "spring boot", "rest api", "oops"]);
        let texts = [
            "",
            "java",
            "javascript spring",
            "spring boot rest api oops java",
            "rest-api, oops!",
        ];
        for text in texts {
            let result = match_skills(text, &required);
            assert_eq!(result.matched.len() + result.missing.len(), required.len());
            for skill in &required {
                let in_matched = result.matched.contains(skill);
                let in_missing = result.missing.contains(skill);
                assert!(in_matched ^ in_missing, "{skill} in {text:?}");
            }
        }
    }

    #[test]
    fn test_no_skills_found_is_valid() {
        let result = match_skills("nothing relevant here", &skills(&["rust"]));
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, skills(&["rust"]));
    }
}
