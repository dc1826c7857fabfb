use std::time::Duration;

use lexis_config::Config;
use lexis_core::pronunciation::PronunciationSession;
use lexis_types::AppEvent;
use rand::Rng;

use crate::events::flashcards::pronunciation_uri;
use crate::events::{EventContext, Flow};
use crate::scope::ScreenScope;

pub fn handle_pronunciation_event(
    ctx: &EventContext,
    session: &mut PronunciationSession,
    scope: &ScreenScope,
    config: &Config,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    let audio = &ctx.state.audio;

    match event {
        AppEvent::StartRecording => {
            if let Err(e) = session.start_recording() {
                tracing::debug!("record ignored: {e}");
                return Ok(Flow::Idle);
            }
            if let Err(e) = audio.start_recording() {
                tracing::error!("failed to start recording: {e}");
                session.abort_recording();
            }
        }
        AppEvent::StopRecording => {
            if !session.is_recording() {
                tracing::debug!("stop ignored: not recording");
                return Ok(Flow::Idle);
            }
            match audio.stop_recording() {
                Ok(uri) => {
                    tracing::debug!(%uri, "recording stored");
                    if let Err(e) = session.stop_recording(uri) {
                        tracing::warn!("recording dropped: {e}");
                        return Ok(Flow::Redraw);
                    }
                    start_analysis(ctx, scope, config);
                }
                Err(e) => {
                    tracing::error!("failed to stop recording: {e}");
                    session.abort_recording();
                }
            }
        }
        AppEvent::AnalysisComplete { score, .. } => {
            if let Err(e) = session.finish_analysis(score) {
                tracing::debug!("analysis result dropped: {e}");
                return Ok(Flow::Idle);
            }
            tracing::info!(score, word = %session.word().word, "pronunciation scored");
        }
        AppEvent::PlayRecording => {
            match session.replay() {
                Ok(uri) => {
                    if let Err(e) = audio.play(uri) {
                        tracing::error!("failed to play recording: {e}");
                    }
                }
                Err(e) => tracing::debug!("replay ignored: {e}"),
            }
            return Ok(Flow::Idle);
        }
        AppEvent::PlayPronunciation => {
            if let Err(e) = audio.play(&pronunciation_uri(&session.word().word)) {
                tracing::error!("failed to play pronunciation: {e}");
            }
            return Ok(Flow::Idle);
        }
        other => {
            tracing::warn!(?other, "not a pronunciation event");
            return Ok(Flow::Idle);
        }
    }

    Ok(Flow::Redraw)
}

/// Simulated analysis: a random score after the configured delay
fn start_analysis(ctx: &EventContext, scope: &ScreenScope, config: &Config) {
    let delay = Duration::from_millis(config.pronunciation.analysis_delay_ms);
    let (min, max) = (config.pronunciation.min_score, config.pronunciation.max_score);
    let (low, high) = (min.min(max), max.max(min));
    let tx = ctx.loopback.clone();
    let id = scope.id();

    scope.spawn("pronunciation-analysis", async move {
        tokio::time::sleep(delay).await;
        let score = draw_score(low, high);
        if let Err(e) = tx.send(AppEvent::AnalysisComplete { scope: id, score }).await {
            tracing::error!("failed to send analysis result: {e}");
        }
    });
}

fn draw_score(low: u8, high: u8) -> u8 {
    rand::rng().random_range(low..=high)
}
