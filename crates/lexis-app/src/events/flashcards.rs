use std::time::Duration;

use lexis_core::CardError;
use lexis_core::cards::CardStack;
use lexis_types::AppEvent;

use crate::events::{EventContext, Flow};
use crate::scope::ScreenScope;

pub fn handle_card_event(
    ctx: &EventContext,
    stack: &mut CardStack,
    scope: &ScreenScope,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    let result = match event {
        AppEvent::DragCard(offset) => stack.drag_to(offset),
        AppEvent::ReleaseCard => stack.release().map(|outcome| {
            if let Some(direction) = outcome.direction() {
                tracing::debug!(?direction, "swipe out started");
                start_swipe_animation(ctx, stack, scope);
            }
        }),
        AppEvent::SwipeAnimationDone(_) => stack.animation_complete().map(|index| {
            tracing::debug!(index, "next card");
        }),
        AppEvent::FlipCard => {
            stack.toggle_reveal();
            Ok(())
        }
        AppEvent::PlayPronunciation => {
            let uri = pronunciation_uri(&stack.current_card().word);
            if let Err(e) = ctx.state.audio.play(&uri) {
                tracing::error!("failed to play pronunciation: {e}");
            }
            return Ok(Flow::Idle);
        }
        other => {
            tracing::warn!(?other, "not a flashcard event");
            return Ok(Flow::Idle);
        }
    };

    Ok(rejected(result))
}

pub fn pronunciation_uri(word: &str) -> String {
    format!("https://api.a0.dev/assets/audio?text={}", word.to_lowercase())
}

/// Stand-in for the swipe-out animation: completes after the configured duration
fn start_swipe_animation(ctx: &EventContext, stack: &CardStack, scope: &ScreenScope) {
    let duration = Duration::from_millis(stack.gesture().swipe_duration_ms);
    let tx = ctx.loopback.clone();
    let id = scope.id();

    scope.spawn("swipe-animation", async move {
        tokio::time::sleep(duration).await;
        if let Err(e) = tx.send(AppEvent::SwipeAnimationDone(id)).await {
            tracing::error!("failed to send swipe completion: {e}");
        }
    });
}

fn rejected(result: Result<(), CardError>) -> Flow {
    match result {
        Ok(()) => Flow::Redraw,
        Err(e) => {
            tracing::debug!("card input ignored: {e}");
            Flow::Idle
        }
    }
}
