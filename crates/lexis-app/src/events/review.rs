use lexis_core::QuizError;
use lexis_core::review::{ReviewSession, SubmitOutcome};
use lexis_types::AppEvent;

use crate::events::{EventContext, Flow};

pub async fn handle_review_event(
    ctx: &EventContext,
    session: &mut ReviewSession,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    let result = match event {
        AppEvent::StartQuiz => session.start_quiz(),
        AppEvent::SelectAnswer(index) => session.select_option(index).map(|_| ()),
        AppEvent::TypeAnswer(text) => session.set_text_answer(text),
        AppEvent::SubmitAnswer => match session.submit_answer() {
            Ok(outcome) => {
                report(ctx, outcome).await?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        AppEvent::RestartReview => session.restart_review(),
        other => {
            tracing::warn!(?other, "not a review event");
            return Ok(Flow::Idle);
        }
    };

    Ok(rejected(result))
}

async fn report(ctx: &EventContext, outcome: SubmitOutcome) -> anyhow::Result<()> {
    match outcome {
        SubmitOutcome::Next { correct } => {
            tracing::debug!(correct, "answer submitted");
        }
        SubmitOutcome::Finished { score, total, .. } => {
            ctx.notice(format!("Review complete: {score}/{total}")).await?;
        }
    }
    Ok(())
}

/// Refused transitions behave like a disabled control
fn rejected(result: Result<(), QuizError>) -> Flow {
    match result {
        Ok(()) => Flow::Redraw,
        Err(e) => {
            tracing::debug!("quiz input ignored: {e}");
            Flow::Idle
        }
    }
}
