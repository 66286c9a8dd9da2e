//! Backend tests against a local relay

use crossbeam_channel::{unbounded, Receiver};
use futures_util::{SinkExt, StreamExt};
use std::time::{Duration, Instant};
use tokio_tungstenite::tungstenite::Message;

use crate::events::process_single_event;
use crate::input_state::{InputState, SubmitOutcome};
use crate::protocol::{BackendAction, ChatEvent, GuiEvent};
use crate::state::ClientState;
use crate::transport::{BackendLink, ChatTransport};
use crate::wire::Framing;

/// Wait until an event matching `pred` arrives, skipping diagnostics.
fn wait_for(
    event_rx: &Receiver<GuiEvent>,
    what: &str,
    pred: impl Fn(&GuiEvent) -> bool,
) -> GuiEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match event_rx.recv_timeout(left) {
            Ok(event) if pred(&event) => return event,
            Ok(_) => continue,
            Err(_) => break,
        }
    }
    panic!("timed out waiting for {}", what);
}

/// Spawn a one-connection relay that speaks the JSON framing.
///
/// It forwards every text frame it receives to the returned channel,
/// greets the client with a message from "bob" after registration, pushes
/// a `start_chat` after the first chat message, then closes.
fn spawn_json_relay() -> (u16, Receiver<String>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    listener.set_nonblocking(true).unwrap();
    let (seen_tx, seen_rx) = unbounded::<String>();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();

            // Registration frame
            if let Some(Ok(Message::Text(text))) = ws.next().await {
                let _ = seen_tx.send(text);
            }
            ws.send(Message::Text(
                r#"{"type":"message","sender":"bob","message":"hi"}"#.to_string(),
            ))
            .await
            .unwrap();

            // First chat message from the client
            if let Some(Ok(Message::Text(text))) = ws.next().await {
                let _ = seen_tx.send(text);
            }
            ws.send(Message::Text(
                r#"{"type":"start_chat","with":"bob","ip":"127.0.0.1"}"#.to_string(),
            ))
            .await
            .unwrap();

            let _ = ws.close(None).await;
            // Drain until the client acknowledges the close
            while let Some(Ok(_)) = ws.next().await {}
        });
    });

    (port, seen_rx)
}

/// Spawn a relay that accepts one connection and reads until it closes.
fn spawn_quiet_relay() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
            while let Some(Ok(_)) = ws.next().await {}
        });
    });

    port
}

/// A port nothing listens on.
fn dead_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Apply backend events to the UI state the way the app does until one
/// matches `pred`. Returns every event seen.
fn apply_until(
    event_rx: &Receiver<GuiEvent>,
    state: &mut ClientState,
    link: &mut BackendLink,
    what: &str,
    pred: impl Fn(&GuiEvent) -> bool,
) -> Vec<GuiEvent> {
    let mut seen = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        let Ok(event) = event_rx.recv_timeout(left) else {
            break;
        };
        let done = pred(&event);
        seen.push(event.clone());
        if let Some(ready) = process_single_event(state, event) {
            link.set_ready(ready);
        }
        if done {
            return seen;
        }
    }
    panic!("timed out waiting for {}", what);
}

#[test]
fn test_backend_thread_creation() {
    // Test that the backend thread can be created without panicking
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, _event_rx) = unbounded::<GuiEvent>();

    let handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx);
    });

    // Dropping the sender stops the loop
    drop(action_tx);
    handle.join().unwrap();
}

#[test]
fn test_disconnect_handling() {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();

    let _handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx);
    });

    action_tx.send(BackendAction::Disconnect).unwrap();

    match event_rx.recv_timeout(Duration::from_secs(2)) {
        Ok(GuiEvent::Disconnected(_)) => {}
        other => panic!("Expected Disconnected event, got {:?}", other),
    }
}

#[test]
fn test_send_without_connection_reports_error() {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();

    let _handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx);
    });

    action_tx
        .send(BackendAction::SendMessage("hello".into()))
        .unwrap();
    let event = wait_for(&event_rx, "error", |e| matches!(e, GuiEvent::Error(_)));
    assert_eq!(event, GuiEvent::Error("Not connected".into()));
}

#[test]
fn test_connect_refused_reports_error() {
    // Grab a free port and release it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let _handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx);
    });

    action_tx
        .send(BackendAction::Connect {
            url: format!("ws://127.0.0.1:{}/ws", port),
            name: "alice".into(),
            framing: Framing::Json,
        })
        .unwrap();

    let event = wait_for(&event_rx, "connection error", |e| {
        matches!(e, GuiEvent::Error(_) | GuiEvent::Connected)
    });
    match event {
        GuiEvent::Error(msg) => assert!(msg.starts_with("Connection failed")),
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_json_relay_session() {
    let (port, seen_rx) = spawn_json_relay();

    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let _handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx);
    });

    action_tx
        .send(BackendAction::Connect {
            url: format!("ws://127.0.0.1:{}/ws", port),
            name: "alice".into(),
            framing: Framing::Json,
        })
        .unwrap();

    wait_for(&event_rx, "connected", |e| matches!(e, GuiEvent::Connected));

    let register = seen_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    let register: serde_json::Value = serde_json::from_str(&register).unwrap();
    assert_eq!(register["type"], "register");
    assert_eq!(register["name"], "alice");

    let greeting = wait_for(&event_rx, "chat", |e| matches!(e, GuiEvent::Chat(_)));
    assert_eq!(greeting, GuiEvent::Chat(ChatEvent::chat("bob", "hi")));

    action_tx
        .send(BackendAction::SendMessage("hello".into()))
        .unwrap();
    let sent = seen_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    let sent: serde_json::Value = serde_json::from_str(&sent).unwrap();
    assert_eq!(sent["type"], "message");
    assert_eq!(sent["message"], "hello");

    let started = wait_for(&event_rx, "chat started", |e| {
        matches!(e, GuiEvent::ChatStarted { .. })
    });
    assert_eq!(
        started,
        GuiEvent::ChatStarted {
            with: "bob".into(),
            ip: Some("127.0.0.1".into()),
        }
    );

    wait_for(&event_rx, "disconnected", |e| {
        matches!(e, GuiEvent::Disconnected(_))
    });
}

#[test]
fn test_tls_connector_builds() {
    let connector = crate::backend::create_tls_connector();
    assert!(matches!(connector, tokio_tungstenite::Connector::Rustls(_)));
}

#[test]
fn test_failed_reconnect_leaves_link_not_ready() {
    let port = spawn_quiet_relay();
    let dead = dead_port();

    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let _handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx);
    });

    let mut link = BackendLink::new(action_tx);
    let mut state = ClientState::new("alice");
    let mut input = InputState::new();

    link.connect(&format!("ws://127.0.0.1:{}/ws", port), "alice", Framing::Json)
        .unwrap();
    apply_until(&event_rx, &mut state, &mut link, "connected", |e| {
        matches!(e, GuiEvent::Connected)
    });
    assert!(link.is_ready());

    // Renaming reconnects; this time the relay is unreachable
    link.connect(&format!("ws://127.0.0.1:{}/ws", dead), "alicia", Framing::Json)
        .unwrap();
    let seen = apply_until(&event_rx, &mut state, &mut link, "connection error", |e| {
        matches!(e, GuiEvent::Error(msg) if msg.starts_with("Connection failed"))
    });

    assert!(seen.iter().any(|e| matches!(e, GuiEvent::Disconnected(_))));
    assert!(!state.is_connected);
    assert!(!link.is_ready());

    input.message_input = "hello".into();
    assert_eq!(input.submit(&mut link), SubmitOutcome::NotReady);
    assert_eq!(input.message_input, "hello");
    assert!(input.history.is_empty());
}
