//! Text frames for the mounted screen.

use lexis_core::Screen;
use lexis_core::cards::{CardPhase, CardStack};
use lexis_core::catalog::CategoryBrowser;
use lexis_core::home::HomeView;
use lexis_core::profile::ProfileView;
use lexis_core::pronunciation::{PronunciationPhase, PronunciationSession};
use lexis_core::review::{QuizMode, ReviewSession};
use lexis_core::suggestions::SuggestionBoard;
use lexis_core::word::WordDetailView;
use lexis_types::{Prompt, QuestionKind};

struct Frame {
    width: usize,
    lines: Vec<String>,
}

impl Frame {
    fn new(title: &str, width: usize) -> Self {
        let mut frame = Self {
            width,
            lines: Vec::new(),
        };
        frame.rule();
        frame.line(title);
        frame.rule();
        frame
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn rule(&mut self) {
        self.lines.push("=".repeat(self.width));
    }

    fn bar(&mut self, label: &str, fraction: f32) {
        let slots = self.width.saturating_sub(label.chars().count() + 8).max(4);
        let filled = ((fraction.clamp(0.0, 1.0) * slots as f32).round() as usize).min(slots);
        self.lines.push(format!(
            "{label} [{}{}] {:>3}%",
            "#".repeat(filled),
            "-".repeat(slots - filled),
            (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
        ));
    }
}

pub fn render(screen: &Screen, depth: usize, width: usize) -> Vec<String> {
    let mut frame = match screen {
        Screen::Home(view) => home(view, width),
        Screen::Flashcards(stack) => flashcards(stack, width),
        Screen::Review(session) => review(session, width),
        Screen::Category(browser) => category(browser, width),
        Screen::Word(view) => word(view, width),
        Screen::Pronunciation(session) => pronunciation(session, width),
        Screen::Profile(view) => profile(view, width),
        Screen::Suggestions(board) => suggestions(board, width),
    };

    if depth > 1 {
        frame.blank();
        frame.line("(back) to return");
    }
    frame.lines
}

fn home(view: &HomeView, width: usize) -> Frame {
    let mut frame = Frame::new(&format!("Hello, {}!", view.username), width);
    frame.line(format!("Streak: {} days", view.streak));
    frame.bar(
        &format!("Today {}/{}", view.learned_today, view.daily_goal),
        view.goal_percent() as f32 / 100.0,
    );
    frame.blank();
    frame.line("Categories:");
    for category in &view.categories {
        frame.line(format!(
            "  [{}] {} - {} words, {}%",
            category.id, category.name, category.total_words, category.progress
        ));
    }
    frame.blank();
    frame.line("Suggested words:");
    for word in &view.suggested {
        frame.line(format!(
            "  {} - {} ({}, {})",
            word.word, word.translation, word.category, word.difficulty
        ));
    }
    frame.blank();
    frame.line("go cards | go review | go category <id> | go ai | go profile");
    frame
}

fn flashcards(stack: &CardStack, width: usize) -> Frame {
    let (position, len) = stack.position();
    let mut frame = Frame::new(&format!("Flashcards {position} / {len}"), width);
    let card = stack.current_card();

    frame.line(format!("{} {}", card.word, card.pronunciation));
    frame.line(format!("difficulty: {}", card.difficulty));
    if stack.revealed() {
        frame.line(format!("-> {}", card.translation));
        frame.line(format!("   \"{}\"", card.example));
    } else {
        frame.line("(flip) to see the translation");
    }
    frame.blank();

    let offset = stack.drag_offset();
    match stack.phase() {
        CardPhase::Idle => {}
        CardPhase::Dragging => frame.line(format!(
            "dragging ({:.0}, {:.0}) tilt {:.1} deg",
            offset.x,
            offset.y,
            stack.rotation_deg()
        )),
        CardPhase::SwipingOut(direction) => frame.line(format!("swiping {direction:?}...")),
    }

    let (known, unknown) = stack.tallies();
    frame.line(format!("known {known}  unknown {unknown}"));
    frame.line("swipe left|right | drag <dx> <dy> + release | flip | play");
    frame
}

fn review(session: &ReviewSession, width: usize) -> Frame {
    match session.mode() {
        QuizMode::Preview => {
            let mut frame = Frame::new("Review", width);
            frame.line(format!("{} words due today", session.due_items().len()));
            for item in session.due_items() {
                frame.line(format!(
                    "  {} - {} (level {}, {})",
                    item.word,
                    item.translation,
                    item.level.value(),
                    item.level.stage().label()
                ));
            }
            frame.blank();
            frame.line("(start) the quiz");
            frame
        }
        QuizMode::InProgress(attempt) => {
            let mut frame = Frame::new(
                &format!("Question {}/{}", attempt.index + 1, session.total()),
                width,
            );
            frame.bar("Progress", session.progress());
            frame.line(format!("Score: {}", attempt.score));
            frame.blank();

            if let Some(question) = session.current_question() {
                match &question.kind {
                    QuestionKind::MultipleChoice { prompt, .. } => match prompt {
                        Prompt::Word(word) => frame.line(format!("What does \"{word}\" mean?")),
                        Prompt::Translation(text) => {
                            frame.line(format!("Which word means \"{text}\"?"))
                        }
                    },
                    QuestionKind::FillInBlank { sentence, .. } => {
                        frame.line("Fill in the blank:");
                        frame.line(format!("  {sentence}"));
                    }
                    QuestionKind::Matching { word, .. } => {
                        frame.line(format!("Match \"{word}\" with its meaning"))
                    }
                }

                if let Some(options) = question.options() {
                    for (i, option) in options.iter().enumerate() {
                        let marker = if attempt.selected_answer.as_deref() == Some(option.as_str())
                        {
                            '*'
                        } else {
                            ' '
                        };
                        frame.line(format!(" {marker}{}. {option}", i + 1));
                    }
                } else {
                    frame.line(format!(
                        "  answer: {}",
                        attempt.text_input.as_deref().unwrap_or("")
                    ));
                }
            }

            frame.blank();
            if session.can_submit() {
                frame.line("(submit) your answer");
            } else {
                frame.line("[submit disabled] pick <n> or type <text> first");
            }
            frame
        }
        QuizMode::Complete { score } => {
            let mut frame = Frame::new("Review complete", width);
            frame.line(format!("Score: {score}/{}", session.total()));
            if let Some(tier) = session.tier() {
                frame.line(tier.message());
            }
            frame.blank();
            frame.line("(restart) | (back)");
            frame
        }
    }
}

fn category(browser: &CategoryBrowser, width: usize) -> Frame {
    let category = browser.category();
    let mut frame = Frame::new(&category.name, width);
    frame.line(category.description.clone());
    frame.line(format!(
        "{}/{} mastered",
        browser.mastered_count(),
        browser.word_count()
    ));
    if !browser.query().is_empty() {
        frame.line(format!("search: {}", browser.query()));
    }
    frame.blank();

    let words = browser.filtered();
    if words.is_empty() {
        frame.line("  no matching words");
    }
    for word in words {
        frame.line(format!(
            "  [{}] {} {} - {} ({})",
            word.id,
            if word.mastered { "+" } else { " " },
            word.word,
            word.translation,
            word.difficulty
        ));
    }
    frame.blank();
    frame.line("search <q> | master <id> | go word <id>");
    frame
}

fn word(view: &WordDetailView, width: usize) -> Frame {
    let entry = view.entry();
    let star = if entry.is_favorite { " *" } else { "" };
    let mut frame = Frame::new(&format!("{}{star}", entry.word), width);
    frame.line(format!("{} ({})", entry.pronunciation, entry.part_of_speech));
    frame.line(format!(
        "{} | {} | {}",
        entry.translation,
        entry.difficulty,
        entry.stage.label()
    ));
    frame.blank();
    frame.line(entry.definition.clone());
    frame.blank();
    frame.line("Examples:");
    for example in view.visible_examples() {
        frame.line(format!("  - {example}"));
    }
    if !view.expanded() && entry.examples.len() > view.visible_examples().len() {
        frame.line("  (more)");
    }
    frame.line(format!("Synonyms: {}", entry.synonyms.join(", ")));
    frame.line(format!("Antonyms: {}", entry.antonyms.join(", ")));
    frame.line("Related:");
    for related in &entry.related {
        frame.line(format!(
            "  [{}] {} - {}",
            related.id, related.word, related.translation
        ));
    }
    frame.blank();
    frame.line("fav | more | play | go speak <id>");
    frame
}

fn pronunciation(session: &PronunciationSession, width: usize) -> Frame {
    let word = session.word();
    let mut frame = Frame::new(&format!("Say: {}", word.word), width);
    frame.line(word.pronunciation.clone());
    frame.blank();

    match session.phase() {
        PronunciationPhase::Idle => frame.line("(record) to start"),
        PronunciationPhase::Recording => frame.line("Recording... (stop) when done"),
        PronunciationPhase::Analyzing => frame.line("Analyzing..."),
        PronunciationPhase::Scored { score, feedback } => {
            frame.bar("Score", *score as f32 / 100.0);
            for line in feedback {
                frame.line(format!("  - {line}"));
            }
            frame.line("(record) to try again");
        }
    }
    if session.has_recording() {
        frame.line("(replay) to hear your take");
    }

    frame.blank();
    frame.line("Tips:");
    for tip in &word.tips {
        frame.line(format!("  - {tip}"));
    }
    frame
}

fn profile(view: &ProfileView, width: usize) -> Frame {
    let mut frame = Frame::new(&view.username, width);
    frame.line(format!(
        "Streak {} days | {} words | goal {}/day",
        view.streak, view.total_words, view.daily_goal
    ));
    frame.blank();
    frame.line("Achievements:");
    for achievement in view.achievements() {
        frame.line(format!(
            "  {} {} - {} ({}%)",
            if achievement.completed { "+" } else { " " },
            achievement.title,
            achievement.description,
            achievement.progress
        ));
    }
    frame.blank();
    let on = |flag: bool| if flag { "on" } else { "off" };
    frame.line(format!(
        "notifications: {} | dark mode: {} | sound: {}",
        on(view.settings.notifications),
        on(view.settings.dark_mode),
        on(view.settings.sound)
    ));
    frame.line("toggle <notifications|dark|sound>");
    if view.reset_pending() {
        frame.line("Reset all progress? (reset) again to confirm");
    } else {
        frame.line("(reset) progress");
    }
    frame
}

fn suggestions(board: &SuggestionBoard, width: usize) -> Frame {
    let mut frame = Frame::new("AI suggestions", width);
    if board.is_generating() {
        frame.line(format!("Generating words for \"{}\"...", board.prompt()));
    } else {
        frame.line("suggest <topic> to generate a new group");
    }

    for group in board.groups() {
        frame.blank();
        frame.line(format!("{} ({} words)", group.title, group.words.len()));
        frame.line(format!("  {}", group.description));
        for word in &group.words {
            frame.line(format!(
                "  {} - {} ({})",
                word.word, word.translation, word.difficulty
            ));
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use lexis_config::Config;
    use lexis_types::Route;

    use super::*;

    fn frame(route: Route) -> Vec<String> {
        let screen = Screen::mount(route, &Config::default()).unwrap();
        render(&screen, 1, 48)
    }

    #[test]
    fn test_review_frames_follow_mode() {
        let config = Config::default();
        let Screen::Review(mut session) = Screen::mount(Route::ReviewSession, &config).unwrap()
        else {
            panic!("expected review screen");
        };

        let preview = render(&Screen::Review(session.clone()), 1, 48);
        assert!(preview.iter().any(|l| l.contains("5 words due")));

        session.start_quiz().unwrap();
        let question = render(&Screen::Review(session.clone()), 1, 48);
        assert!(question.iter().any(|l| l.contains("Question 1/5")));
        assert!(question.iter().any(|l| l.contains("[submit disabled]")));

        session.select_option(1).unwrap();
        let selected = render(&Screen::Review(session), 1, 48);
        assert!(selected.iter().any(|l| l.contains("*2. Chăm chỉ")));
    }

    #[test]
    fn test_back_hint_only_when_stacked() {
        let screen = Screen::mount(Route::Profile, &Config::default()).unwrap();
        assert!(!render(&screen, 1, 48).iter().any(|l| l.contains("(back)")));
        assert!(render(&screen, 2, 48).iter().any(|l| l.contains("(back)")));
    }

    #[test]
    fn test_home_shows_goal() {
        let lines = frame(Route::Home);
        assert!(lines.iter().any(|l| l.contains("Today 45/80") && l.contains("56%")));
    }

    #[test]
    fn test_replay_hint_after_a_take() {
        let Screen::Pronunciation(mut session) = Screen::mount(
            Route::PronunciationPractice(lexis_types::WordParams::default()),
            &Config::default(),
        )
        .unwrap() else {
            panic!("expected pronunciation screen");
        };
        let hint = |session: &PronunciationSession| {
            render(&Screen::Pronunciation(session.clone()), 1, 48)
                .iter()
                .any(|l| l.contains("(replay)"))
        };

        assert!(!hint(&session));
        session.start_recording().unwrap();
        session.stop_recording("memory://recording").unwrap();
        assert!(hint(&session));
    }
}
