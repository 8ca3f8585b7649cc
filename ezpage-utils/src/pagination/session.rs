//! In-memory registry of live pagination sessions.
//!
//! Sessions are registered before their message is sent, so a button press
//! can never arrive for a session that does not exist yet. The message ids
//! are attached once Discord has created the message, and only then is the
//! expiry timer armed.

use std::{
    collections::HashMap,
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::debug;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};

use super::controller::{Pager, RenderInstruction};
use super::error::PaginationError;
use super::token::NavAction;

/// Where a session's message lives once it has been sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionMessage {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// A controller attached to one paginated message.
pub struct PaginationSession {
    pager: Box<dyn Pager>,
    owner_user_id: Option<u64>,
    message: Option<SessionMessage>,
    expiry_task: Option<JoinHandle<()>>,
}

impl PaginationSession {
    /// `owner_user_id` restricts navigation to one user; `None` lets anyone page.
    pub fn new(pager: Box<dyn Pager>, owner_user_id: Option<u64>) -> Self {
        Self {
            pager,
            owner_user_id,
            message: None,
            expiry_task: None,
        }
    }

    fn abort_expiry(&mut self) {
        if let Some(task) = self.expiry_task.take() {
            task.abort();
        }
    }

    /// Replace the expiry timer. Does nothing until the message is attached.
    fn arm_expiry<F, Fut>(&mut self, make_task: F)
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.message.is_none() {
            return;
        }

        self.abort_expiry();
        self.expiry_task = Some(tokio::spawn(make_task(self.pager.timeout())));
    }
}

impl std::fmt::Debug for PaginationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationSession")
            .field("owner_user_id", &self.owner_user_id)
            .field("message", &self.message)
            .field("expiry_scheduled", &self.expiry_task.is_some())
            .finish_non_exhaustive()
    }
}

/// Result of routing a navigation event to its session.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// Page changed to `index`; apply `instruction` to the message.
    Render {
        instruction: RenderInstruction,
        index: usize,
    },
    /// No live session (expired, deleted, or never registered).
    UnknownSession,
    /// The session belongs to another user.
    WrongUser,
    /// The controller refused the move; state is unchanged.
    Rejected(PaginationError),
}

/// Registry of live sessions. Every access goes through one mutex, which
/// serializes navigation, rollback and timeout events for a given session.
#[derive(Debug, Default)]
pub struct PaginationSessions {
    sessions: Mutex<HashMap<u64, PaginationSession>>,
    next_id: AtomicU64,
}

impl PaginationSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and return its id for the button custom ids.
    pub async fn open(&self, session: PaginationSession) -> u64 {
        let session_id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.sessions.lock().await.insert(session_id, session);
        session_id
    }

    /// Record the sent message and arm the expiry timer.
    ///
    /// Returns `false` when the session is already gone.
    pub async fn attach_message<F, Fut>(
        &self,
        session_id: u64,
        message: SessionMessage,
        make_expiry: F,
    ) -> bool
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(&session_id) else {
            return false;
        };

        session.message = Some(message);
        session.arm_expiry(make_expiry);
        true
    }

    /// Route a button press to the session's controller.
    ///
    /// A successful move re-arms the expiry timer before the lock is released,
    /// so a pending timeout can never fire between the move and the re-arm.
    pub async fn navigate<F, Fut>(
        &self,
        session_id: u64,
        actor_user_id: u64,
        action: NavAction,
        make_expiry: F,
    ) -> NavigationOutcome
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(&session_id) else {
            return NavigationOutcome::UnknownSession;
        };

        if session
            .owner_user_id
            .is_some_and(|owner| owner != actor_user_id)
        {
            return NavigationOutcome::WrongUser;
        }

        let result = match action {
            NavAction::Retreat => session.pager.on_retreat_activated(),
            NavAction::Advance => session.pager.on_advance_activated(),
        };

        match result {
            Ok(instruction) => {
                session.arm_expiry(make_expiry);
                NavigationOutcome::Render {
                    instruction,
                    index: session.pager.current_index(),
                }
            }
            Err(err) => NavigationOutcome::Rejected(err),
        }
    }

    /// Undo a move whose render never reached the message.
    ///
    /// Only applies while the controller is still at `index`, the page the
    /// move produced; returns whether anything was undone.
    pub async fn revert(&self, session_id: u64, action: NavAction, index: usize) -> bool {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(&session_id) else {
            return false;
        };

        if session.pager.current_index() != index {
            return false;
        }

        let undone = match action.opposite() {
            NavAction::Retreat => session.pager.on_retreat_activated(),
            NavAction::Advance => session.pager.on_advance_activated(),
        };
        undone.is_ok()
    }

    /// Expire and drop a session, returning its message and terminal view.
    ///
    /// Returns `None` when the session is already gone or was never sent.
    pub async fn expire(&self, session_id: u64) -> Option<(SessionMessage, RenderInstruction)> {
        let mut sessions = self.sessions.lock().await;
        let message = sessions.get(&session_id)?.message?;
        let mut session = sessions.remove(&session_id)?;
        debug!(session_id, message_id = message.message_id.get(), "pagination session expired");

        Some((message, session.pager.on_timeout()))
    }

    /// Drop a session without rendering anything, disarming its timer.
    pub async fn remove(&self, session_id: u64) -> bool {
        let Some(mut session) = self.sessions.lock().await.remove(&session_id) else {
            return false;
        };

        session.abort_expiry();
        true
    }

    /// Drop the session shown on a deleted message.
    pub async fn remove_message(&self, message_id: Id<MessageMarker>) -> bool {
        let mut sessions = self.sessions.lock().await;
        let Some(session_id) = sessions.iter().find_map(|(id, session)| {
            session
                .message
                .is_some_and(|message| message.message_id == message_id)
                .then_some(*id)
        }) else {
            return false;
        };

        if let Some(mut session) = sessions.remove(&session_id) {
            session.abort_expiry();
        }
        true
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
