use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_config::Config;
use lexis_core::{Navigator, Screen};
use lexis_types::{AppEvent, Route, ScopeId};
use tokio_util::sync::CancellationToken;

use crate::audio::AudioDevice;
use crate::command::HELP;
use crate::render::render;
use crate::scope::ScreenScope;
use crate::state::AppState;

pub mod browse;
pub mod flashcards;
pub mod navigation;
pub mod pronunciation;
pub mod review;
pub mod suggestions;

/// What the loop does after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Idle,
    Quit,
}

/// Handles shared by every event handler
pub struct EventContext {
    pub state: Arc<AppState>,
    /// Back into the loop, for completions of scoped tasks
    pub loopback: AsyncSender<AppEvent>,
    pub to_ui: AsyncSender<AppEvent>,
}

impl EventContext {
    pub async fn config(&self) -> Config {
        self.state.config.read().await.clone()
    }

    pub async fn notice(&self, message: impl Into<String>) -> anyhow::Result<()> {
        self.to_ui.send(AppEvent::Notice(message.into())).await?;
        Ok(())
    }
}

/// The mounted screen, its scope and the back stack
pub struct Shell {
    pub navigator: Navigator,
    pub screen: Screen,
    pub scope: ScreenScope,
    root: CancellationToken,
}

impl Shell {
    pub fn open(start: Route, config: &Config, root: CancellationToken) -> anyhow::Result<Self> {
        let mut navigator = Navigator::new();
        navigator.navigate(start);
        let screen = Screen::mount(start, config)?;
        let scope = ScreenScope::new(&root);
        tracing::info!(screen = screen.name(), %start, "screen mounted");

        Ok(Self {
            navigator,
            screen,
            scope,
            root,
        })
    }

    /// Replace the mounted screen. The old scope is cancelled with it.
    pub fn mount(
        &mut self,
        route: Route,
        config: &Config,
        audio: &dyn AudioDevice,
    ) -> anyhow::Result<()> {
        let screen = Screen::mount(route, config)?;
        self.release(audio);
        self.scope = ScreenScope::new(&self.root);
        self.screen = screen;
        tracing::info!(screen = self.screen.name(), %route, scope = %self.scope.id(), "screen mounted");
        Ok(())
    }

    /// Give back devices the mounted screen holds outside its own state
    pub fn release(&mut self, audio: &dyn AudioDevice) {
        match &mut self.screen {
            Screen::Pronunciation(session) if session.is_recording() => {
                match audio.stop_recording() {
                    Ok(uri) => tracing::debug!(%uri, "open recording discarded"),
                    Err(e) => tracing::warn!("failed to stop recording on unmount: {e}"),
                }
                session.abort_recording();
            }
            _ => {}
        }
    }

    pub fn frame(&self, width: usize) -> Vec<String> {
        render(&self.screen, self.navigator.depth(), width)
    }
}

/// App's main loop. Owns all screen state; input and scoped task completions
/// arrive on `inbound_rx`, frames leave on `to_ui`.
pub async fn event_loop(
    state: Arc<AppState>,
    start: Route,
    inbound_rx: AsyncReceiver<AppEvent>,
    loopback: AsyncSender<AppEvent>,
    to_ui: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ctx = EventContext {
        state,
        loopback,
        to_ui,
    };

    let mut shell = {
        let config = ctx.state.config.read().await;
        Shell::open(start, &config, cancel.child_token())?
    };
    send_frame(&ctx, &shell).await?;

    tracing::info!("event loop waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = inbound_rx.recv() => event?,
        };

        match handle_events(&ctx, &mut shell, event).await? {
            Flow::Redraw => send_frame(&ctx, &shell).await?,
            Flow::Idle => {}
            Flow::Quit => {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    shell.release(ctx.state.audio.as_ref());
    shell.scope.cancel();
    Ok(())
}

pub async fn send_frame(ctx: &EventContext, shell: &Shell) -> anyhow::Result<()> {
    let width = ctx.state.config.read().await.ui.frame_width;
    ctx.to_ui.send(AppEvent::Frame(shell.frame(width))).await?;
    Ok(())
}

/// Scope a completion event is addressed to
fn completion_scope(event: &AppEvent) -> Option<ScopeId> {
    match event {
        AppEvent::SwipeAnimationDone(scope)
        | AppEvent::SuggestionsReady { scope, .. }
        | AppEvent::AnalysisComplete { scope, .. } => Some(*scope),
        _ => None,
    }
}

/// Apply one event to the mounted screen
pub async fn handle_events(
    ctx: &EventContext,
    shell: &mut Shell,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    tracing::debug!(screen = shell.screen.name(), ?event, "handling event");

    match completion_scope(&event) {
        Some(scope) if scope != shell.scope.id() => {
            tracing::debug!(%scope, current = %shell.scope.id(), "dropping completion for unmounted screen");
            return Ok(Flow::Idle);
        }
        _ => {}
    }

    let event = match event {
        AppEvent::Navigate(route) => {
            let config = ctx.config().await;
            return navigation::handle_navigate(ctx, shell, route, &config);
        }
        AppEvent::Back => {
            let config = ctx.config().await;
            return navigation::handle_back(ctx, shell, &config).await;
        }
        AppEvent::Help => {
            ctx.notice(HELP).await?;
            return Ok(Flow::Idle);
        }
        AppEvent::Notice(message) => {
            ctx.notice(message).await?;
            return Ok(Flow::Idle);
        }
        AppEvent::Quit => return Ok(Flow::Quit),
        other => other,
    };

    let Shell { screen, scope, .. } = shell;
    match (screen, event) {
        (
            Screen::Review(session),
            event @ (AppEvent::StartQuiz
            | AppEvent::SelectAnswer(_)
            | AppEvent::TypeAnswer(_)
            | AppEvent::SubmitAnswer
            | AppEvent::RestartReview),
        ) => review::handle_review_event(ctx, session, event).await,

        (
            Screen::Flashcards(stack),
            event @ (AppEvent::DragCard(_)
            | AppEvent::ReleaseCard
            | AppEvent::FlipCard
            | AppEvent::PlayPronunciation
            | AppEvent::SwipeAnimationDone(_)),
        ) => flashcards::handle_card_event(ctx, stack, scope, event),

        (
            Screen::Suggestions(board),
            event @ (AppEvent::GenerateSuggestions(_) | AppEvent::SuggestionsReady { .. }),
        ) => suggestions::handle_suggestion_event(ctx, board, scope, event).await,

        (
            Screen::Pronunciation(session),
            event @ (AppEvent::StartRecording
            | AppEvent::StopRecording
            | AppEvent::PlayRecording
            | AppEvent::PlayPronunciation
            | AppEvent::AnalysisComplete { .. }),
        ) => {
            let config = ctx.config().await;
            pronunciation::handle_pronunciation_event(ctx, session, scope, &config, event)
        }

        (screen, event) => browse::handle_browse_event(ctx, screen, event).await,
    }
}
