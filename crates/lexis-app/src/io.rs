use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::AsyncSender;
use lexis_types::AppEvent;

use crate::command::parse_command;

/// Read shell commands from stdin on a dedicated thread.
///
/// Parse errors go back through the loop as notices. End of input quits.
/// Must be called from inside the runtime.
pub fn spawn_stdin_reader(event_tx: AsyncSender<AppEvent>) -> std::io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Handle::current();

    std::thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::error!("failed to read stdin: {e}");
                        break;
                    }
                };

                let events = match parse_command(&line) {
                    Ok(events) => events,
                    Err(message) => vec![AppEvent::Notice(message)],
                };

                for event in events {
                    if runtime.block_on(event_tx.send(event)).is_err() {
                        tracing::debug!("event loop gone, stdin reader stopping");
                        return;
                    }
                }
            }

            let _ = runtime.block_on(event_tx.send(AppEvent::Quit));
        })
}
