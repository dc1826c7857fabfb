//! Built-in sample data every screen starts from.

use std::time::{Duration, SystemTime};

use lexis_types::{
    Category, Difficulty, Flashcard, LearningStage, PracticeWord, Prompt, QuestionKind,
    QuizQuestion, RelatedWord, ReviewItem, SrsLevel, SuggestedWord, WordEntry, WordGroup,
    WordItem,
};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn review_item(id: u32, word: &str, translation: &str, days_ago: u32, level: u8, now: SystemTime) -> ReviewItem {
    ReviewItem {
        id,
        word: word.to_string(),
        translation: translation.to_string(),
        last_reviewed_at: now.checked_sub(DAY * days_ago).unwrap_or(SystemTime::UNIX_EPOCH),
        due_at: now,
        level: SrsLevel::clamped(level),
    }
}

/// Items due for review. Every seeded item is due `now`.
pub fn review_items(now: SystemTime) -> Vec<ReviewItem> {
    vec![
        review_item(1, "Diligent", "Chăm chỉ", 7, 3, now),
        review_item(2, "Profound", "Sâu sắc", 4, 2, now),
        review_item(3, "Enhance", "Nâng cao", 10, 4, now),
        review_item(4, "Ambiguous", "Mơ hồ", 2, 1, now),
        review_item(5, "Eloquent", "Hùng biện", 14, 3, now),
    ]
}

pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: 1,
            kind: QuestionKind::MultipleChoice {
                prompt: Prompt::Word("Diligent".to_string()),
                options: strings(&["Lười biếng", "Chăm chỉ", "Mệt mỏi", "Vui vẻ"]),
                correct_answer: "Chăm chỉ".to_string(),
            },
        },
        QuizQuestion {
            id: 2,
            kind: QuestionKind::FillInBlank {
                sentence: "She is very _______ in her studies and always gets good grades."
                    .to_string(),
                correct_answer: "diligent".to_string(),
            },
        },
        QuizQuestion {
            id: 3,
            kind: QuestionKind::MultipleChoice {
                prompt: Prompt::Translation("Sâu sắc".to_string()),
                options: strings(&["Shallow", "Profound", "Serious", "Deep"]),
                correct_answer: "Profound".to_string(),
            },
        },
        QuizQuestion {
            id: 4,
            kind: QuestionKind::Matching {
                word: "Enhance".to_string(),
                options: strings(&["Giảm xuống", "Nâng cao", "Phá hủy", "Thay thế"]),
                correct_answer: "Nâng cao".to_string(),
            },
        },
        QuizQuestion {
            id: 5,
            kind: QuestionKind::FillInBlank {
                sentence:
                    "The speaker was very _______, moving the audience with his powerful speech."
                        .to_string(),
                correct_answer: "eloquent".to_string(),
            },
        },
    ]
}

fn flashcard(
    id: u32,
    word: &str,
    translation: &str,
    example: &str,
    pronunciation: &str,
    difficulty: Difficulty,
    image_query: &str,
) -> Flashcard {
    Flashcard {
        id,
        word: word.to_string(),
        translation: translation.to_string(),
        example: example.to_string(),
        pronunciation: pronunciation.to_string(),
        difficulty,
        image: Some(format!(
            "https://api.a0.dev/assets/image?text={image_query}&aspect=16:9"
        )),
    }
}

pub fn flashcards() -> Vec<Flashcard> {
    vec![
        flashcard(
            1,
            "Abundance",
            "Sự dồi dào, phong phú",
            "The region has an abundance of natural resources.",
            "/əˈbʌnd(ə)ns/",
            Difficulty::Medium,
            "abundance%20plenty%20resources",
        ),
        flashcard(
            2,
            "Diligent",
            "Chăm chỉ, cần cù",
            "She is a diligent student who always completes her homework.",
            "/ˈdɪlɪdʒ(ə)nt/",
            Difficulty::Easy,
            "diligent%20student%20studying",
        ),
        flashcard(
            3,
            "Eloquent",
            "Hùng biện, lưu loát",
            "His eloquent speech moved the entire audience.",
            "/ˈɛləkwənt/",
            Difficulty::Hard,
            "eloquent%20speaker%20giving%20speech",
        ),
        flashcard(
            4,
            "Perseverance",
            "Sự kiên trì, bền bỉ",
            "Through perseverance, she finally reached her goal.",
            "/ˌpəːsɪˈvɪər(ə)ns/",
            Difficulty::Hard,
            "perseverance%20climbing%20mountain",
        ),
        flashcard(
            5,
            "Amiable",
            "Thân thiện, dễ mến",
            "He has an amiable personality that people are drawn to.",
            "/ˈeɪmɪəb(ə)l/",
            Difficulty::Medium,
            "amiable%20friendly%20person",
        ),
    ]
}

fn suggested(id: u32, word: &str, translation: &str, category: &str, difficulty: Difficulty) -> SuggestedWord {
    SuggestedWord {
        id,
        word: word.to_string(),
        translation: translation.to_string(),
        category: category.to_string(),
        difficulty,
    }
}

pub fn word_groups() -> Vec<WordGroup> {
    vec![
        WordGroup {
            id: 1,
            title: "Job interview vocabulary".to_string(),
            description: "Words that come up in job interviews and CVs".to_string(),
            words: vec![
                suggested(101, "Accomplishment", "Thành tựu", "Công việc", Difficulty::Medium),
                suggested(102, "Initiative", "Sáng kiến", "Công việc", Difficulty::Medium),
                suggested(103, "Proficient", "Thành thạo", "Công việc", Difficulty::Medium),
                suggested(104, "Leadership", "Lãnh đạo", "Công việc", Difficulty::Easy),
                suggested(105, "Qualification", "Bằng cấp", "Công việc", Difficulty::Easy),
            ],
        },
        WordGroup {
            id: 2,
            title: "Technology vocabulary".to_string(),
            description: "Words about technology and computers".to_string(),
            words: vec![
                suggested(201, "Algorithm", "Thuật toán", "Công nghệ", Difficulty::Hard),
                suggested(202, "Interface", "Giao diện", "Công nghệ", Difficulty::Medium),
                suggested(203, "Database", "Cơ sở dữ liệu", "Công nghệ", Difficulty::Medium),
                suggested(205, "Compatibility", "Tính tương thích", "Công nghệ", Difficulty::Hard),
            ],
        },
    ]
}

/// Words suggested on the home screen
pub fn home_suggestions() -> Vec<SuggestedWord> {
    vec![
        suggested(1, "Diligent", "Chăm chỉ", "Tính cách", Difficulty::Easy),
        suggested(2, "Enhance", "Nâng cao", "Hành động", Difficulty::Medium),
        suggested(3, "Profound", "Sâu sắc", "Mô tả", Difficulty::Medium),
    ]
}

fn category(id: u32, name: &str, icon: &str, description: &str, total_words: u32, progress: u8) -> Category {
    Category {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        total_words,
        progress,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(1, "Cơ bản", "seedling", "Core vocabulary for beginners.", 500, 30),
        category(2, "Kinh doanh", "briefcase", "Business and workplace vocabulary.", 650, 15),
        category(3, "Du lịch", "plane", "Words you need when travelling abroad.", 450, 45),
        category(4, "Công nghệ", "laptop-code", "Technology, computing and science.", 700, 10),
    ]
}

fn word_item(id: u32, word: &str, translation: &str, mastered: bool, difficulty: Difficulty) -> WordItem {
    WordItem {
        id,
        word: word.to_string(),
        translation: translation.to_string(),
        mastered,
        difficulty,
    }
}

pub fn category_words() -> Vec<WordItem> {
    vec![
        word_item(1, "Accomplish", "Hoàn thành", true, Difficulty::Medium),
        word_item(2, "Beneficial", "Có lợi", false, Difficulty::Easy),
        word_item(3, "Collaborate", "Hợp tác", true, Difficulty::Medium),
        word_item(4, "Demonstrate", "Chứng minh", false, Difficulty::Hard),
        word_item(5, "Efficient", "Hiệu quả", true, Difficulty::Easy),
        word_item(6, "Fundamental", "Cơ bản", false, Difficulty::Medium),
        word_item(7, "Generate", "Tạo ra", false, Difficulty::Easy),
        word_item(8, "Hierarchy", "Thứ bậc", false, Difficulty::Hard),
        word_item(9, "Implement", "Thực hiện", true, Difficulty::Medium),
    ]
}

/// Detail entry for a word. Only one entry ships, so every id resolves to it
/// with the requested id stamped on.
pub fn word_entry(word_id: u32) -> WordEntry {
    WordEntry {
        id: word_id,
        word: "Perseverance".to_string(),
        translation: "Sự kiên trì".to_string(),
        pronunciation: "/ˌpəːsɪˈvɪər(ə)ns/".to_string(),
        part_of_speech: "noun".to_string(),
        definition:
            "Persistence in doing something despite difficulty or delay in achieving success."
                .to_string(),
        examples: strings(&[
            "His perseverance was finally rewarded when he passed the exam.",
            "Through perseverance, she overcame all obstacles.",
            "It takes perseverance to master a new language.",
        ]),
        synonyms: strings(&["persistence", "determination", "endurance", "tenacity"]),
        antonyms: strings(&["laziness", "idleness", "sloth", "apathy"]),
        is_favorite: false,
        difficulty: Difficulty::Medium,
        stage: LearningStage::Learning,
        related: vec![
            RelatedWord {
                id: 2,
                word: "Persistent".to_string(),
                translation: "Kiên trì".to_string(),
            },
            RelatedWord {
                id: 3,
                word: "Diligent".to_string(),
                translation: "Chăm chỉ".to_string(),
            },
            RelatedWord {
                id: 4,
                word: "Tenacious".to_string(),
                translation: "Bền bỉ".to_string(),
            },
        ],
    }
}

pub fn practice_word(word_id: u32) -> PracticeWord {
    PracticeWord {
        id: word_id,
        word: "Perseverance".to_string(),
        pronunciation: "/ˌpəːsɪˈvɪər(ə)ns/".to_string(),
        tips: strings(&[
            "Focus on the stress in the third syllable: per-se-VER-ance",
            "The \"ver\" syllable sounds like \"veer\"",
            "The final syllable \"ance\" rhymes with \"dance\"",
            "Try to connect all syllables smoothly",
        ]),
    }
}
