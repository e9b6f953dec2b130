// src/client/toggle.rs

use std::{fmt, time::Duration};

use async_trait::async_trait;
use tokio::time::Instant;
use uuid::Uuid;

use crate::client::auth::AuthState;

/// How long the "log in first" notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// A locally displayed value that a click flips before the server answers.
pub trait ToggleValue: Clone + PartialEq + fmt::Debug {
    fn toggled(&self) -> Self;
}

/// A review's helpful counter and whether the viewer has voted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpfulVote {
    pub count: u32,
    pub voted: bool,
}

impl ToggleValue for HelpfulVote {
    fn toggled(&self) -> Self {
        if self.voted {
            Self {
                count: self.count.saturating_sub(1),
                voted: false,
            }
        } else {
            Self {
                count: self.count.saturating_add(1),
                voted: true,
            }
        }
    }
}

/// Whether a campsite sits in the viewer's wishlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WishlistMark {
    pub saved: bool,
}

impl ToggleValue for WishlistMark {
    fn toggled(&self) -> Self {
        Self { saved: !self.saved }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleError {
    message: String,
}

impl ToggleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ToggleError {}

/// The server call behind a toggle (vote/unvote, save/unsave).
#[async_trait]
pub trait ToggleOperation: Send + Sync {
    async fn toggle(&self, target: Uuid) -> Result<(), ToggleError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    pub component: &'static str,
    pub target: Uuid,
}

/// Where failed toggles are reported once the UI has reverted.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &ToggleError, context: &ReportContext);
}

/// Reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &ToggleError, context: &ReportContext) {
        tracing::error!(
            component = context.component,
            target = %context.target,
            error = %error,
            "Toggle failed, reverted to previous state"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The value flipped and the server call should run.
    Started,
    /// A call is already in flight; the click was dropped.
    Ignored,
    /// Anonymous user; nothing changed except the login notice.
    LoginRequired,
}

/// An optimistic two-state button.
///
/// A click flips the local value at once and enters `Pending`; clicks while
/// pending are ignored. Success keeps the new value, failure restores the
/// value from just before the click. Server values delivered while idle
/// replace local state; while pending they are held and applied on settle.
#[derive(Debug, Clone)]
pub struct OptimisticToggle<V> {
    component: &'static str,
    target: Uuid,
    value: V,
    phase: Phase,
    snapshot: Option<V>,
    incoming: Option<V>,
    notice_until: Option<Instant>,
    notice_duration: Duration,
}

pub type HelpfulButton = OptimisticToggle<HelpfulVote>;
pub type WishlistButton = OptimisticToggle<WishlistMark>;

impl OptimisticToggle<HelpfulVote> {
    pub fn helpful(review_id: Uuid, count: u32, voted: bool) -> Self {
        Self::new("helpful-button", review_id, HelpfulVote { count, voted })
    }
}

impl OptimisticToggle<WishlistMark> {
    pub fn wishlist(campsite_id: Uuid, saved: bool) -> Self {
        Self::new("wishlist-button", campsite_id, WishlistMark { saved })
    }
}

impl<V: ToggleValue> OptimisticToggle<V> {
    pub fn new(component: &'static str, target: Uuid, initial: V) -> Self {
        Self {
            component,
            target,
            value: initial,
            phase: Phase::Idle,
            snapshot: None,
            incoming: None,
            notice_until: None,
            notice_duration: NOTICE_DURATION,
        }
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn target(&self) -> Uuid {
        self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn activate(&mut self, auth: &AuthState) -> Activation {
        if self.is_pending() {
            return Activation::Ignored;
        }
        if !auth.is_authenticated() {
            self.notice_until = Some(Instant::now() + self.notice_duration);
            return Activation::LoginRequired;
        }

        self.snapshot = Some(self.value.clone());
        self.value = self.value.toggled();
        self.phase = Phase::Pending;
        Activation::Started
    }

    /// Finishes the in-flight call. No-op unless pending.
    pub fn settle<R>(&mut self, outcome: Result<(), ToggleError>, reporter: &R)
    where
        R: ErrorReporter + ?Sized,
    {
        if !self.is_pending() {
            return;
        }

        let snapshot = self.snapshot.take();
        if let Err(error) = outcome {
            if let Some(previous) = snapshot {
                self.value = previous;
            }
            reporter.report(
                &error,
                &ReportContext {
                    component: self.component,
                    target: self.target,
                },
            );
        }
        if let Some(server) = self.incoming.take() {
            self.value = server;
        }
        self.phase = Phase::Idle;
    }

    /// A fresh value from the server (new props).
    pub fn receive(&mut self, server: V) {
        match self.phase {
            Phase::Idle => self.value = server,
            Phase::Pending => self.incoming = Some(server),
        }
    }

    /// Runs a whole click: flip, call the server, settle.
    pub async fn click<O, R>(&mut self, auth: &AuthState, operation: &O, reporter: &R) -> Activation
    where
        O: ToggleOperation + ?Sized,
        R: ErrorReporter + ?Sized,
    {
        let activation = self.activate(auth);
        if activation == Activation::Started {
            let outcome = operation.toggle(self.target).await;
            self.settle(outcome, reporter);
        }
        activation
    }

    pub fn notice_visible(&self) -> bool {
        self.notice_until.is_some_and(|until| Instant::now() < until)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice_until = None;
    }
}
