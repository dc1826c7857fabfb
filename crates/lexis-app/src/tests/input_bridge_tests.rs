use std::time::Duration;

use lexis_types::AppEvent;
use tokio::time::timeout;

use crate::command::parse_command;

/// Blocking sends from a plain thread, the way the stdin reader feeds the loop
#[tokio::test]
async fn test_commands_cross_from_sync_thread() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let runtime = tokio::runtime::Handle::current();

    std::thread::spawn(move || {
        for line in ["go review", "start", "pick 2", "bogus"] {
            let events = parse_command(line).unwrap_or_else(|e| vec![AppEvent::Notice(e)]);
            for event in events {
                runtime.block_on(tx.send(event)).expect("send failed");
            }
        }
    });

    let mut received = Vec::new();
    let result = timeout(Duration::from_secs(2), async {
        while received.len() < 4 {
            received.push(rx.recv().await.expect("recv failed"));
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for commands!");
    assert!(matches!(received[0], AppEvent::Navigate(_)));
    assert!(matches!(received[1], AppEvent::StartQuiz));
    assert!(matches!(received[2], AppEvent::SelectAnswer(1)));
    match &received[3] {
        AppEvent::Notice(message) => assert!(message.contains("unknown command")),
        other => panic!("Wrong event type: {other:?}"),
    }
}

#[tokio::test]
async fn test_many_spawned_completions() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    for i in 0..100 {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::SelectAnswer(i)).await.expect("send failed");
        });
    }

    let mut count = 0;
    let result = timeout(Duration::from_secs(2), async {
        while count < 100 {
            rx.recv().await.expect("recv failed");
            count += 1;
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for events!");
    assert_eq!(count, 100);
}
