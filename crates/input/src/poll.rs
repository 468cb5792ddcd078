//! Draining pending terminal events into a per-frame action batch.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::handle_event;
use crate::types::GameAction;

/// Upper bound on actions collected in one frame; extra events are dropped.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

pub type ActionBatch = ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>;

/// Events that matter to the loop besides game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollExtras {
    /// Terminal was resized; the renderer should redraw fully.
    pub resized: bool,
}

/// Collect every pending event without blocking past `timeout`.
///
/// Waits at most `timeout` for the first event, then drains whatever else is
/// already queued.
pub fn poll_actions(timeout: Duration) -> io::Result<(ActionBatch, PollExtras)> {
    let mut actions = ActionBatch::new();
    let mut extras = PollExtras::default();

    let mut wait = timeout;
    while event::poll(wait)? {
        wait = Duration::ZERO;
        let ev = event::read()?;
        collect_event(&ev, &mut actions, &mut extras);
    }
    Ok((actions, extras))
}

/// Translate one event into the batch.
pub fn collect_event(ev: &Event, actions: &mut ActionBatch, extras: &mut PollExtras) {
    if let Event::Resize(_, _) = ev {
        extras.resized = true;
        return;
    }
    if let Some(action) = handle_event(ev) {
        let _ = actions.try_push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    #[test]
    fn batch_keeps_order_and_caps_length() {
        let mut actions = ActionBatch::new();
        let mut extras = PollExtras::default();

        collect_event(&Event::Key(KeyEvent::from(KeyCode::Char('p'))), &mut actions, &mut extras);
        for _ in 0..40 {
            collect_event(&Event::Key(KeyEvent::from(KeyCode::Char(' '))), &mut actions, &mut extras);
        }
        assert_eq!(actions.len(), MAX_ACTIONS_PER_FRAME);
        assert_eq!(actions[0], GameAction::Pause);
        assert_eq!(actions[1], GameAction::Climb);
        assert!(!extras.resized);
    }

    #[test]
    fn resize_is_reported_separately() {
        let mut actions = ActionBatch::new();
        let mut extras = PollExtras::default();
        collect_event(&Event::Resize(100, 40), &mut actions, &mut extras);
        assert!(actions.is_empty());
        assert!(extras.resized);
    }
}
