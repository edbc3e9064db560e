//! Chat view state.
//!
//! A `ChatSession` is created when the chat view opens and passed to every
//! handler that needs the current conversation. `SendControl` is the
//! enable/disable flag around one outstanding chat request.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use uuid::Uuid;

use crate::models::ChatRequest;

/// Shared enabled/disabled state of the send control.
///
/// Cloning shares the flag. At most one [`SendGuard`] exists at a time.
#[derive(Debug, Clone, Default)]
pub struct SendControl {
    busy: Arc<AtomicBool>,
}

impl SendControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the control for the lifetime of the returned guard.
    ///
    /// Returns `None` while another send is outstanding. There is no
    /// cancellation: the in-flight request keeps the control disabled until
    /// it finishes.
    pub fn try_acquire(&self) -> Option<SendGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SendGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_enabled(&self) -> bool {
        !self.busy.load(Ordering::Acquire)
    }
}

/// Re-enables the send control when dropped, on every exit path.
#[derive(Debug)]
pub struct SendGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for SendGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Explicit chat view state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    user_id: String,
    timezone: Option<String>,
    conversation_id: Option<Uuid>,
    send: SendControl,
}

impl ChatSession {
    pub fn new(user_id: impl Into<String>, timezone: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            timezone,
            conversation_id: None,
            send: SendControl::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn conversation_id(&self) -> Option<Uuid> {
        self.conversation_id
    }

    pub fn send_control(&self) -> &SendControl {
        &self.send
    }

    /// Clears the current conversation; the next send creates a new one.
    pub fn start_new_conversation(&mut self) {
        self.conversation_id = None;
    }

    /// Makes `id` the current conversation.
    pub fn open_conversation(&mut self, id: Uuid) {
        if self.conversation_id != Some(id) {
            log::debug!("switching to conversation {id}");
        }
        self.conversation_id = Some(id);
    }

    /// Called after `id` was deleted. Returns true if it was the current one.
    pub fn forget_conversation(&mut self, id: Uuid) -> bool {
        if self.conversation_id == Some(id) {
            self.conversation_id = None;
            true
        } else {
            false
        }
    }

    /// Builds the request body for sending `message` in the current conversation.
    pub fn chat_request(&self, message: impl Into<String>) -> ChatRequest {
        ChatRequest {
            message: message.into(),
            user_id: self.user_id.clone(),
            conversation_id: self.conversation_id,
            timezone: self.timezone.clone(),
        }
    }
}
