//! Shell commands, one per line, turned into [`AppEvent`]s.

use lexis_types::{AppEvent, Route, Setting, Vec2};

pub const HELP: &str = "\
go <screen> [id]    open a screen (home, cards, review, category, word, speak, profile, ai)
back                return to the previous screen
start | pick <n> | type <text> | submit | restart
                    review quiz
drag <dx> <dy> | release | swipe left|right | flip | play
                    flashcards
suggest <topic>     generate a word group
record | stop | replay
                    pronunciation practice
search <q> | master <id>
                    category words
fav | more          word detail
toggle <notifications|dark|sound> | reset
                    profile
help | quit";

/// Horizontal travel used by `swipe`, far past any sensible threshold
const SWIPE_DISTANCE: f32 = 1000.0;

pub fn parse_command(line: &str) -> Result<Vec<AppEvent>, String> {
    let line = line.trim();
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let event = match cmd.to_lowercase().as_str() {
        "" => return Ok(Vec::new()),
        "go" | "open" => AppEvent::Navigate(rest.parse::<Route>().map_err(|e| e.to_string())?),
        "back" => AppEvent::Back,
        "help" | "?" => AppEvent::Help,
        "quit" | "exit" => AppEvent::Quit,

        "start" => AppEvent::StartQuiz,
        "pick" => {
            let n: usize = number(rest, "pick <n>")?;
            if n == 0 {
                return Err("options are numbered from 1".to_string());
            }
            AppEvent::SelectAnswer(n - 1)
        }
        "type" => AppEvent::TypeAnswer(rest.to_string()),
        "submit" => AppEvent::SubmitAnswer,
        "restart" => AppEvent::RestartReview,

        "drag" => {
            let mut parts = rest.split_whitespace();
            let dx: f32 = number(parts.next().unwrap_or(""), "drag <dx> <dy>")?;
            let dy: f32 = match parts.next() {
                Some(raw) => number(raw, "drag <dx> <dy>")?,
                None => 0.0,
            };
            AppEvent::DragCard(Vec2::new(dx, dy))
        }
        "release" => AppEvent::ReleaseCard,
        "swipe" => {
            let dx = match rest.to_lowercase().as_str() {
                "left" | "l" => -SWIPE_DISTANCE,
                "right" | "r" => SWIPE_DISTANCE,
                _ => return Err("usage: swipe left|right".to_string()),
            };
            return Ok(vec![
                AppEvent::DragCard(Vec2::new(dx, 0.0)),
                AppEvent::ReleaseCard,
            ]);
        }
        "flip" => AppEvent::FlipCard,
        "play" => AppEvent::PlayPronunciation,

        "suggest" => AppEvent::GenerateSuggestions(rest.to_string()),

        "record" => AppEvent::StartRecording,
        "stop" => AppEvent::StopRecording,
        "replay" => AppEvent::PlayRecording,

        "search" => AppEvent::SearchWords(rest.to_string()),
        "master" => AppEvent::ToggleMastered(number(rest, "master <id>")?),
        "fav" | "favorite" => AppEvent::ToggleFavorite,
        "more" | "less" => AppEvent::ToggleExpanded,
        "toggle" => AppEvent::ToggleSetting(rest.parse::<Setting>().map_err(|e| e.to_string())?),
        "reset" => AppEvent::ResetProgress,

        other => return Err(format!("unknown command: {other} (try help)")),
    };

    Ok(vec![event])
}

fn number<T: std::str::FromStr>(raw: &str, usage: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("usage: {usage}"))
}
