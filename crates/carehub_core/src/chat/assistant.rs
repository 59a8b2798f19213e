//! Simulated help-desk assistant with delayed canned replies.
//!
//! # Responsibility
//! - Keep the visible message log and typing indicator for one chat panel.
//! - Schedule keyword-matched replies after a simulated delay.
//!
//! # Invariants
//! - Pending replies are owned by the session; `close` and drop cancel them.
//! - A closed session ignores new messages.
//! - Message text is never logged.

use crate::chat::scheduler::{TaskHandle, TaskScheduler};
use log::debug;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm the CareHub assistant. Ask me about appointments, doctors or visiting hours.";

const FALLBACK_REPLY: &str =
    "Thanks for your message. A member of our care team will follow up shortly.";

static REPLY_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"(?i)\b(emergency|urgent|chest pain|bleeding)\b",
            "If this is an emergency, please call 108 or visit the nearest emergency department immediately.",
        ),
        (
            r"(?i)\b(appointment|book|schedule|reschedule)\b",
            "You can book or reschedule an appointment from the Appointments tab. Pick a department, a doctor and a free slot.",
        ),
        (
            r"(?i)\b(doctor|specialist|physician)s?\b",
            "Our doctor directory lists every specialist with their department and availability.",
        ),
        (
            r"(?i)\b(hours|timing|open|visiting)\b",
            "OPD runs 9:00 to 18:00, Monday to Saturday. Emergency services are open 24/7.",
        ),
        (
            r"(?i)^\s*(hi|hello|hey|namaste)\b",
            "Hello! How can I help you today?",
        ),
    ]
    .into_iter()
    .map(|(pattern, reply)| (Regex::new(pattern).expect("valid reply rule regex"), reply))
    .collect()
});

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    /// Epoch milliseconds when the message became visible.
    pub at_ms: i64,
}

/// Simulated response latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
    Fixed(u64),
    /// Uniformly random delay in `[min_ms, max_ms]`.
    Jitter { min_ms: u64, max_ms: u64 },
}

impl DelayPolicy {
    pub fn sample(self) -> u64 {
        match self {
            Self::Fixed(delay) => delay,
            Self::Jitter { min_ms, max_ms } => {
                let (low, high) = if min_ms <= max_ms {
                    (min_ms, max_ms)
                } else {
                    (max_ms, min_ms)
                };
                rand::thread_rng().gen_range(low..=high)
            }
        }
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::Jitter {
            min_ms: 800,
            max_ms: 1_600,
        }
    }
}

#[derive(Debug)]
struct PendingReply {
    due_ms: i64,
    text: &'static str,
}

/// One chat panel's conversation state.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: TaskScheduler<PendingReply>,
    delay: DelayPolicy,
    closed: bool,
}

impl ChatSession {
    /// Opens a session seeded with the welcome message.
    pub fn open(delay: DelayPolicy, now_ms: i64) -> Self {
        Self {
            messages: vec![ChatMessage {
                speaker: Speaker::Assistant,
                text: WELCOME_MESSAGE.to_string(),
                at_ms: now_ms,
            }],
            pending: TaskScheduler::new(),
            delay,
            closed: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// `true` while at least one reply is pending.
    pub fn is_typing(&self) -> bool {
        self.pending.pending() > 0
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Earliest time a pending reply becomes due.
    pub fn next_reply_due(&self) -> Option<i64> {
        self.pending.next_due()
    }

    /// Posts a user message and schedules the assistant reply.
    ///
    /// Blank text and closed sessions are ignored and return `None`.
    pub fn send(&mut self, text: &str, now_ms: i64) -> Option<TaskHandle> {
        let trimmed = text.trim();
        if self.closed || trimmed.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: trimmed.to_string(),
            at_ms: now_ms,
        });

        let delay_ms = i64::try_from(self.delay.sample()).unwrap_or(i64::MAX);
        let due_ms = now_ms.saturating_add(delay_ms);
        let handle = self.pending.schedule(
            due_ms,
            PendingReply {
                due_ms,
                text: reply_for(trimmed),
            },
        );
        debug!(
            "event=chat_send module=chat status=ok delay_ms={} pending={}",
            delay_ms,
            self.pending.pending()
        );
        Some(handle)
    }

    /// Delivers every reply due at `now_ms`; returns how many arrived.
    pub fn poll(&mut self, now_ms: i64) -> usize {
        let due = self.pending.drain_due(now_ms);
        let delivered = due.len();
        self.messages.extend(due.into_iter().map(|reply| ChatMessage {
            speaker: Speaker::Assistant,
            text: reply.text.to_string(),
            at_ms: reply.due_ms,
        }));
        delivered
    }

    /// Cancels one pending reply.
    pub fn cancel_reply(&mut self, handle: TaskHandle) -> bool {
        self.pending.cancel(handle)
    }

    /// Closes the panel, cancelling every pending reply.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let dropped = self.pending.cancel_all();
        debug!("event=chat_close module=chat status=ok cancelled={dropped}");
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.close();
    }
}

/// Picks the canned reply for a user message.
pub fn reply_for(text: &str) -> &'static str {
    REPLY_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map_or(FALLBACK_REPLY, |(_, reply)| *reply)
}
