//! Pulling the word list out of free-form model output.

use lexis_types::{Difficulty, SuggestedWord};
use serde::Deserialize;

use crate::SuggestError;

#[derive(Deserialize)]
struct RawWord {
    word: String,
    translation: String,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// The span from the first `[` to the last `]`, inclusive
pub fn extract_array(completion: &str) -> Option<&str> {
    let start = completion.find('[')?;
    let end = completion.rfind(']')?;
    (end > start).then(|| &completion[start..=end])
}

/// Parse the word array embedded in `completion`.
///
/// Words without a category are filed under `topic`; a missing or unknown
/// difficulty becomes medium. Ids count up from `id_base`.
pub fn parse_completion(
    completion: &str,
    topic: &str,
    id_base: u32,
) -> Result<Vec<SuggestedWord>, SuggestError> {
    let array = extract_array(completion).ok_or(SuggestError::NoArray)?;
    let raw: Vec<RawWord> = serde_json::from_str(array)?;

    let words = raw
        .into_iter()
        .enumerate()
        .map(|(index, item)| SuggestedWord {
            id: id_base + index as u32,
            word: item.word,
            translation: item.translation,
            category: item
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| topic.to_string()),
            difficulty: item
                .difficulty
                .and_then(|d| d.parse().ok())
                .unwrap_or(Difficulty::Medium),
        })
        .collect();

    Ok(words)
}

/// Placeholder words shown when generation fails
pub fn fallback_words(topic: &str) -> Vec<SuggestedWord> {
    [
        (1001, "Example", "Ví dụ", Difficulty::Easy),
        (1002, "Generated", "Được tạo ra", Difficulty::Medium),
        (1003, "Custom", "Tùy chỉnh", Difficulty::Medium),
        (1004, "Vocabulary", "Từ vựng", Difficulty::Easy),
        (1005, "Learning", "Học tập", Difficulty::Easy),
    ]
    .into_iter()
    .map(|(id, word, translation, difficulty)| SuggestedWord {
        id,
        word: word.to_string(),
        translation: translation.to_string(),
        category: topic.to_string(),
        difficulty,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_array_from_prose() {
        let text = "Here you go:\n```json\n[{\"a\": [1]}]\n```\nEnjoy!";
        assert_eq!(extract_array(text), Some("[{\"a\": [1]}]"));
        assert_eq!(extract_array("no brackets"), None);
        assert_eq!(extract_array("] backwards ["), None);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let completion = r#"[
            {"word": "Itinerary", "translation": "Lịch trình"},
            {"word": "Souvenir", "translation": "Quà lưu niệm", "difficulty": "HARD", "category": ""},
            {"word": "Luggage", "translation": "Hành lý", "difficulty": "tricky", "category": "Airport"}
        ]"#;

        let words = parse_completion(completion, "travel", 1200).unwrap();
        assert_eq!(words.len(), 3);

        assert_eq!(words[0].id, 1200);
        assert_eq!(words[0].difficulty, Difficulty::Medium);
        assert_eq!(words[0].category, "travel");

        assert_eq!(words[1].difficulty, Difficulty::Hard);
        assert_eq!(words[1].category, "travel");

        assert_eq!(words[2].id, 1202);
        assert_eq!(words[2].difficulty, Difficulty::Medium);
        assert_eq!(words[2].category, "Airport");
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            parse_completion("nothing here", "x", 1000),
            Err(SuggestError::NoArray)
        ));
        assert!(matches!(
            parse_completion("[not json]", "x", 1000),
            Err(SuggestError::InvalidArray(_))
        ));
        assert!(matches!(
            parse_completion(r#"[{"translation": "no word"}]"#, "x", 1000),
            Err(SuggestError::InvalidArray(_))
        ));
    }

    #[test]
    fn test_fallback_is_tagged_with_topic() {
        let words = fallback_words("food");
        let ids: Vec<_> = words.iter().map(|w| w.id).collect();
        assert_eq!(ids, [1001, 1002, 1003, 1004, 1005]);
        assert!(words.iter().all(|w| w.category == "food"));
    }
}
