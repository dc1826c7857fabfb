use lexis_core::Screen;
use lexis_core::profile::ResetStep;
use lexis_types::AppEvent;

use crate::events::flashcards::pronunciation_uri;
use crate::events::{EventContext, Flow};

/// Category, word detail and profile screens, plus anything not handled by a
/// more specific screen
pub async fn handle_browse_event(
    ctx: &EventContext,
    screen: &mut Screen,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match (screen, event) {
        (Screen::Category(browser), AppEvent::SearchWords(query)) => {
            browser.set_query(query);
            Ok(Flow::Redraw)
        }
        (Screen::Category(browser), AppEvent::ToggleMastered(word_id)) => {
            match browser.toggle_mastered(word_id) {
                Some(mastered) => {
                    tracing::debug!(word_id, mastered, "mastered toggled");
                    Ok(Flow::Redraw)
                }
                None => {
                    ctx.notice(format!("no word with id {word_id}")).await?;
                    Ok(Flow::Idle)
                }
            }
        }
        (Screen::Word(view), AppEvent::ToggleFavorite) => {
            view.toggle_favorite();
            Ok(Flow::Redraw)
        }
        (Screen::Word(view), AppEvent::ToggleExpanded) => {
            view.toggle_expanded();
            Ok(Flow::Redraw)
        }
        (Screen::Word(view), AppEvent::PlayPronunciation) => {
            if let Err(e) = ctx.state.audio.play(&pronunciation_uri(&view.entry().word)) {
                tracing::error!("failed to play pronunciation: {e}");
            }
            Ok(Flow::Idle)
        }
        (Screen::Profile(profile), AppEvent::ToggleSetting(setting)) => {
            let message = profile.toggle(setting);
            ctx.notice(message).await?;
            Ok(Flow::Redraw)
        }
        (Screen::Profile(profile), AppEvent::ResetProgress) => {
            match profile.request_reset() {
                ResetStep::Confirm => {
                    ctx.notice("Reset all progress? This cannot be undone. Send reset again to confirm.")
                        .await?;
                }
                ResetStep::Done => {
                    tracing::info!(user = %profile.username, "progress reset");
                    ctx.notice("All progress has been reset").await?;
                }
            }
            Ok(Flow::Redraw)
        }
        (screen, event) => {
            tracing::debug!(screen = screen.name(), ?event, "event not available on this screen");
            let completion = matches!(
                event,
                AppEvent::SwipeAnimationDone(_)
                    | AppEvent::SuggestionsReady { .. }
                    | AppEvent::AnalysisComplete { .. }
            );
            if !completion {
                ctx.notice(format!("not available on {}", screen.name())).await?;
            }
            Ok(Flow::Idle)
        }
    }
}
