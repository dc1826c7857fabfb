use lexis_core::SuggestionError;
use lexis_core::suggestions::SuggestionBoard;
use lexis_suggest::{SuggestionSource, suggest_words};
use lexis_types::AppEvent;

use crate::events::{EventContext, Flow};
use crate::scope::ScreenScope;

pub async fn handle_suggestion_event(
    ctx: &EventContext,
    board: &mut SuggestionBoard,
    scope: &ScreenScope,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match event {
        AppEvent::GenerateSuggestions(prompt) => match board.begin(&prompt) {
            Ok(topic) => {
                request_words(ctx, scope, topic, board.next_id_base());
                Ok(Flow::Redraw)
            }
            Err(SuggestionError::EmptyPrompt) => {
                ctx.notice("enter a topic to generate words").await?;
                Ok(Flow::Idle)
            }
            Err(e) => {
                tracing::debug!("suggestion request ignored: {e}");
                Ok(Flow::Idle)
            }
        },
        AppEvent::SuggestionsReady { prompt, words, .. } => match board.finish(words) {
            Ok(group) => {
                let message = format!("Added {} words about {prompt}", group.words.len());
                ctx.notice(message).await?;
                Ok(Flow::Redraw)
            }
            Err(e) => {
                tracing::debug!("suggestions dropped: {e}");
                Ok(Flow::Idle)
            }
        },
        other => {
            tracing::warn!(?other, "not a suggestion event");
            Ok(Flow::Idle)
        }
    }
}

fn request_words(ctx: &EventContext, scope: &ScreenScope, topic: String, id_base: u32) {
    let suggester = ctx.state.suggester.clone();
    let tx = ctx.loopback.clone();
    let id = scope.id();

    scope.spawn("suggestions", async move {
        let suggestions = suggest_words(suggester.as_ref(), &topic, id_base).await;
        if let SuggestionSource::Fallback(reason) = &suggestions.source {
            tracing::debug!(%topic, %reason, "using placeholder words");
        }

        let event = AppEvent::SuggestionsReady {
            scope: id,
            prompt: topic,
            words: suggestions.words,
        };
        if let Err(e) = tx.send(event).await {
            tracing::error!("failed to send suggestions: {e}");
        }
    });
}
