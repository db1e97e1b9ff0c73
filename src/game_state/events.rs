//! Typed notifications emitted after real commits and top-level undos.
//!
//! At most one event is emitted per call. Listeners receive a shared
//! reference to the event only; they cannot reach the board from inside the
//! callback. Every emitted event is also queued so callers that prefer
//! polling can drain it after the call returns. The queue keeps only the
//! most recent [`MAX_PENDING_EVENTS`], so listener-only callers never need to
//! drain it.

use std::collections::VecDeque;
use std::fmt;

use crate::game_state::chess_types::PieceColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessEvent {
    /// Carries the side now to move.
    TurnChanged(PieceColor),
    Check,
    Checkmate,
    Stalemate,
}

/// Capacity of the polling queue; the oldest event is dropped beyond it.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Handle returned when registering a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ChessEvent)>;

#[derive(Default)]
pub struct EventDispatcher {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    pending: VecDeque<ChessEvent>,
}

impl EventDispatcher {
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ChessEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, event: ChessEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
        if self.pending.len() == MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<ChessEvent> {
        self.pending.drain(..).collect()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending)
            .finish()
    }
}
