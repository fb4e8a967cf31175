//! Event handling, key mappings, and background timers.
//!
//! This module converts terminal events to application messages and
//! owns the two timed message sources: the pretend background task and
//! the spinner tick chain. Both communicate solely by posting a
//! [`Message`] into the channel the run loop drains, so every event
//! reaches the application on one serialized stream.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use triptych_protocol::Message;

use crate::spinner::FRAME_INTERVAL;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How long the pretend background task takes.
///
/// Long enough for the spinner to be visible; real work finishing
/// sooner would be no loss.
pub const PRETEND_WORK_DURATION: Duration = Duration::from_secs(2);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `q` | Quit |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Spawns the simulated long-running task.
///
/// Sleeps for [`PRETEND_WORK_DURATION`] and posts exactly one
/// [`Message::WorkDone`]. Fire-and-forget: not cancellable, never
/// retried.
pub fn spawn_pretend_work(tx: UnboundedSender<Message>) {
    tokio::spawn(async move {
        tokio::time::sleep(PRETEND_WORK_DURATION).await;
        // The receiver only closes on shutdown; a failed send is moot then.
        let _ = tx.send(Message::WorkDone);
    });
}

/// Arms the timer for one spinner tick.
///
/// Sleeps for one frame interval and posts a single [`Message::Tick`].
/// The update loop re-arms this while the task is busy; once it stops
/// re-arming, the chain ends and the animation freezes.
pub fn schedule_tick(tx: UnboundedSender<Message>) {
    tokio::spawn(async move {
        tokio::time::sleep(FRAME_INTERVAL).await;
        let _ = tx.send(Message::Tick);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('q'))),
            Some(Message::Quit)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), None);
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn plain_c_does_not_quit() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn event_to_message_handles_key_events() {
        let key_event = Event::Key(make_key(KeyCode::Char('q')));
        assert_eq!(event_to_message(&key_event), Some(Message::Quit));
    }

    #[test]
    fn event_to_message_maps_resize_events() {
        let resize_event = Event::Resize(80, 24);
        assert_eq!(
            event_to_message(&resize_event),
            Some(Message::Resize {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn event_to_message_ignores_focus_events() {
        assert_eq!(event_to_message(&Event::FocusGained), None);
        assert_eq!(event_to_message(&Event::FocusLost), None);
    }

    #[tokio::test(start_paused = true)]
    async fn pretend_work_posts_exactly_one_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_pretend_work(tx);

        assert_eq!(rx.recv().await, Some(Message::WorkDone));
        // The task is done and the sender dropped: nothing else arrives.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn schedule_tick_posts_exactly_one_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();

        schedule_tick(tx);

        assert_eq!(rx.recv().await, Some(Message::Tick));
        assert_eq!(rx.recv().await, None);
    }
}
