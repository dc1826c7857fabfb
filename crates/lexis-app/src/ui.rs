use std::io::Write;

use kanal::AsyncReceiver;
use lexis_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Print frames and notices from the event loop to stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        let mut out = std::io::stdout().lock();
        match event {
            AppEvent::Frame(lines) => {
                writeln!(out)?;
                for line in lines {
                    writeln!(out, "{line}")?;
                }
                write!(out, "> ")?;
            }
            AppEvent::Notice(message) => {
                writeln!(out, "* {message}")?;
                write!(out, "> ")?;
            }
            other => tracing::warn!("ui received non-display event: {:?}", other),
        }
        out.flush()?;
    }

    tracing::debug!("ui loop stopped");
    Ok(())
}
