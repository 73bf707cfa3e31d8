//! # Swipe deck
//!
//! One browsing session over the candidates returned by a search: an ordered
//! queue and a cursor that only moves forward. [`SwipeDeck::load`] is the only
//! way to reset it.
//!
//! ```text
//! load ──► Loading ──┬─► Unauthenticated   (no token, nothing fetched)
//!                    ├─► Error             (search failed)
//!                    ├─► Empty             (zero candidates)
//!                    └─► Browsing ──► ... ──► Exhausted
//! ```
//!
//! A verdict goes through [`SwipeDeck::step`], which never touches the network:
//!
//! | Verdict | Token | Step | Cursor |
//! |---------|-------|------|--------|
//! | `No` | not checked | [`SwipeStep::Skipped`] | advances |
//! | `Yes` | missing, expired or malformed | [`SwipeStep::Blocked`] | holds |
//! | `Yes` | fresh | [`SwipeStep::Submit`] | holds until [`settle`](SwipeDeck::settle) |
//!
//! While a submission is outstanding every further step is
//! [`SwipeStep::Idle`], so two decisions can never be in flight at once.
//! [`SwipeDeck::decide`] chains the three for callers that can hold the deck
//! across an await.

use crate::client::Backend;
use crate::error::ApiError;
use crate::models::{Candidate, SwipeDecision, Verdict};
use crate::session::{require_fresh, Session};
use crate::token::{auth_message, NOT_AUTHENTICATED};

pub const NO_SIMILAR_USERS: &str = "No similar users found.";
pub const ALL_VIEWED: &str = "You've viewed all similar users.";
pub const SEARCH_ERROR: &str = "Error fetching similar users. Please try again.";
pub const SWIPE_ERROR: &str = "An error occurred while logging the swipe. Please try again.";

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Loading,
    Unauthenticated,
    Failed,
    Loaded,
}

/// What the search page should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Loading,
    Unauthenticated,
    Error,
    Empty,
    Browsing,
    Exhausted,
}

impl DeckPhase {
    /// Text shown in place of a card, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            DeckPhase::Unauthenticated => Some(NOT_AUTHENTICATED),
            DeckPhase::Error => Some(SEARCH_ERROR),
            DeckPhase::Empty => Some(NO_SIMILAR_USERS),
            DeckPhase::Exhausted => Some(ALL_VIEWED),
            DeckPhase::Loading | DeckPhase::Browsing => None,
        }
    }
}

/// The result of applying a verdict locally.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeStep {
    /// "No": the cursor moved, nothing to send.
    Skipped,
    /// "Yes" with a fresh token: send this, then [`SwipeDeck::settle`].
    Submit { token: String, decision: SwipeDecision },
    /// "Yes" refused before any request; the message is now the deck error.
    Blocked(String),
    /// No current candidate, or a submission is still outstanding.
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeDeck {
    status: Status,
    candidates: Vec<Candidate>,
    cursor: usize,
    error: Option<String>,
    in_flight: bool,
}

impl Default for SwipeDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeDeck {
    pub fn new() -> Self {
        Self {
            status: Status::Loading,
            candidates: Vec::new(),
            cursor: 0,
            error: None,
            in_flight: false,
        }
    }

    /// A deck already holding `candidates`, cursor at the first.
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        let mut deck = Self::new();
        deck.finish_load(Ok(candidates));
        deck
    }

    pub fn phase(&self) -> DeckPhase {
        match self.status {
            Status::Loading => DeckPhase::Loading,
            Status::Unauthenticated => DeckPhase::Unauthenticated,
            Status::Failed => DeckPhase::Error,
            Status::Loaded if self.candidates.is_empty() => DeckPhase::Empty,
            Status::Loaded if self.cursor >= self.candidates.len() => DeckPhase::Exhausted,
            Status::Loaded => DeckPhase::Browsing,
        }
    }

    pub fn current(&self) -> Option<&Candidate> {
        match self.status {
            Status::Loaded => self.candidates.get(self.cursor),
            _ => None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The last swipe error, cleared by the next successful decision.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Reset for a new search. Returns the token to search with, or `None`
    /// (and the `Unauthenticated` phase) when there is no session.
    pub fn begin_load(&mut self, session: Option<&Session>) -> Option<String> {
        *self = Self::new();
        match session {
            Some(session) => Some(session.token.clone()),
            None => {
                tracing::warn!("No token stored; not searching");
                self.status = Status::Unauthenticated;
                None
            }
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<Candidate>, ApiError>) {
        match result {
            Ok(candidates) => {
                tracing::info!("Loaded {} similar users", candidates.len());
                self.candidates = candidates;
                self.cursor = 0;
                self.status = Status::Loaded;
            }
            Err(e) => {
                tracing::error!("Error fetching similar users: {}", e);
                self.status = Status::Failed;
            }
        }
    }

    /// Fetch a fresh queue.
    pub async fn load<B: Backend>(&mut self, backend: &B, session: Option<&Session>) {
        if let Some(token) = self.begin_load(session) {
            let result = backend.search(&token).await;
            self.finish_load(result);
        }
    }

    /// Apply a verdict to the current candidate. `now` is Unix seconds.
    pub fn step(&mut self, verdict: Verdict, session: Option<&Session>, now: i64) -> SwipeStep {
        if self.in_flight {
            return SwipeStep::Idle;
        }
        let Some(candidate) = self.current() else {
            return SwipeStep::Idle;
        };

        match verdict {
            Verdict::No => {
                self.advance();
                SwipeStep::Skipped
            }
            Verdict::Yes => {
                let decision = SwipeDecision {
                    swiped_user_email: candidate.email().map(str::to_string),
                    decision: Verdict::Yes,
                    swiped_by_email: session.and_then(|s| s.email.clone()),
                };
                match require_fresh(session, now) {
                    Ok(_) => {
                        self.in_flight = true;
                        SwipeStep::Submit {
                            token: session.map(|s| s.token.clone()).unwrap_or_default(),
                            decision,
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Swipe blocked: {}", e);
                        let message = auth_message(&e).unwrap_or(SWIPE_ERROR).to_string();
                        self.error = Some(message.clone());
                        SwipeStep::Blocked(message)
                    }
                }
            }
        }
    }

    /// Record the outcome of a [`SwipeStep::Submit`].
    pub fn settle(&mut self, result: Result<(), ApiError>) {
        self.in_flight = false;
        match result {
            Ok(()) => self.advance(),
            Err(e) => {
                tracing::error!("Error logging swipe: {}", e);
                self.error = Some(SWIPE_ERROR.to_string());
            }
        }
    }

    fn advance(&mut self) {
        self.cursor += 1;
        self.error = None;
    }

    /// Step, send when needed, settle.
    pub async fn decide<B: Backend>(
        &mut self,
        backend: &B,
        verdict: Verdict,
        session: Option<&Session>,
        now: i64,
    ) -> SwipeStep {
        let step = self.step(verdict, session, now);
        if let SwipeStep::Submit { token, decision } = &step {
            let result = backend.record_swipe(token, decision).await;
            self.settle(result);
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use crate::session::tests::FakeBackend;
    use crate::token::{fake_token, INVALID_TOKEN, SESSION_EXPIRED};

    const NOW: i64 = 1_700_000_000;

    fn candidate(email: &str) -> Candidate {
        Candidate {
            profile: UserProfile {
                email: Some(email.to_string()),
                name: Some(email.split('@').next().unwrap_or_default().to_string()),
                ..Default::default()
            },
            similarity: Some(0.5),
        }
    }

    fn three() -> Vec<Candidate> {
        vec![candidate("a@x.io"), candidate("b@x.io"), candidate("c@x.io")]
    }

    fn session(exp: i64) -> Session {
        Session {
            token: fake_token(exp),
            email: Some("me@x.io".to_string()),
        }
    }

    #[tokio::test]
    async fn test_load_preserves_order() {
        let backend = FakeBackend {
            search_result: Some(Ok(three())),
            ..Default::default()
        };
        let mut deck = SwipeDeck::new();
        assert_eq!(deck.phase(), DeckPhase::Loading);

        deck.load(&backend, Some(&session(NOW + 60))).await;
        assert_eq!(deck.phase(), DeckPhase::Browsing);
        assert_eq!(deck.current().and_then(Candidate::email), Some("a@x.io"));
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_split_load() {
        let mut deck = SwipeDeck::with_candidates(three());
        deck.step(Verdict::No, None, NOW);

        // The token comes back before any request; the deck shows Loading until answered
        let token = deck.begin_load(Some(&session(NOW + 60)));
        assert_eq!(token, Some(fake_token(NOW + 60)));
        assert_eq!(deck.phase(), DeckPhase::Loading);
        assert_eq!(deck.cursor(), 0);

        deck.finish_load(Ok(vec![candidate("d@x.io")]));
        assert_eq!(deck.current().and_then(Candidate::email), Some("d@x.io"));

        assert_eq!(deck.begin_load(None), None);
        assert_eq!(deck.phase(), DeckPhase::Unauthenticated);
    }

    #[tokio::test]
    async fn test_load_without_session() {
        let backend = FakeBackend::default();
        let mut deck = SwipeDeck::new();
        deck.load(&backend, None).await;
        assert_eq!(deck.phase(), DeckPhase::Unauthenticated);
        assert_eq!(deck.phase().message(), Some(NOT_AUTHENTICATED));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_load_failure_and_empty() {
        let backend = FakeBackend {
            search_result: Some(Err(ApiError::Server {
                status: 500,
                message: None,
            })),
            ..Default::default()
        };
        let mut deck = SwipeDeck::new();
        deck.load(&backend, Some(&session(NOW))).await;
        assert_eq!(deck.phase(), DeckPhase::Error);
        assert_eq!(deck.phase().message(), Some(SEARCH_ERROR));
        assert!(deck.current().is_none());

        let deck = SwipeDeck::with_candidates(vec![]);
        assert_eq!(deck.phase(), DeckPhase::Empty);
        assert_eq!(deck.phase().message(), Some(NO_SIMILAR_USERS));
    }

    #[tokio::test]
    async fn test_no_swipes_never_call_backend() {
        let backend = FakeBackend::default();
        let mut deck = SwipeDeck::with_candidates(three());

        for expected in ["b@x.io", "c@x.io"] {
            let step = deck.decide(&backend, Verdict::No, None, NOW).await;
            assert_eq!(step, SwipeStep::Skipped);
            assert_eq!(deck.current().and_then(Candidate::email), Some(expected));
        }
        deck.decide(&backend, Verdict::No, None, NOW).await;
        assert_eq!(deck.phase(), DeckPhase::Exhausted);
        assert_eq!(deck.phase().message(), Some(ALL_VIEWED));
        assert_eq!(backend.call_count(), 0);

        // Nothing left to decide on
        assert_eq!(deck.decide(&backend, Verdict::No, None, NOW).await, SwipeStep::Idle);
        assert_eq!(deck.cursor(), 3);
    }

    #[tokio::test]
    async fn test_yes_sends_decision_and_advances() {
        let backend = FakeBackend::default();
        let mut deck = SwipeDeck::with_candidates(three());
        let me = session(NOW + 60);

        deck.decide(&backend, Verdict::Yes, Some(&me), NOW).await;
        assert_eq!(deck.cursor(), 1);
        assert!(!deck.is_busy());

        let swipes = backend.swipes.borrow();
        assert_eq!(swipes.len(), 1);
        let (token, decision) = &swipes[0];
        assert_eq!(token, &me.token);
        assert_eq!(
            decision,
            &SwipeDecision {
                swiped_user_email: Some("a@x.io".to_string()),
                decision: Verdict::Yes,
                swiped_by_email: Some("me@x.io".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_yes_with_stale_token_is_blocked() {
        let backend = FakeBackend::default();
        let mut deck = SwipeDeck::with_candidates(three());

        let step = deck.decide(&backend, Verdict::Yes, Some(&session(NOW - 1)), NOW).await;
        assert_eq!(step, SwipeStep::Blocked(SESSION_EXPIRED.to_string()));
        assert_eq!(deck.error(), Some(SESSION_EXPIRED));

        let garbage = Session {
            token: "not-a-jwt".to_string(),
            email: None,
        };
        let step = deck.decide(&backend, Verdict::Yes, Some(&garbage), NOW).await;
        assert_eq!(step, SwipeStep::Blocked(INVALID_TOKEN.to_string()));

        let step = deck.decide(&backend, Verdict::Yes, None, NOW).await;
        assert_eq!(step, SwipeStep::Blocked(NOT_AUTHENTICATED.to_string()));

        assert_eq!(deck.cursor(), 0);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_swipe_holds_cursor_until_success() {
        let backend = FakeBackend {
            swipe_results: vec![Err(ApiError::Transport("offline".to_string()))].into(),
            ..Default::default()
        };
        let mut deck = SwipeDeck::with_candidates(three());
        let me = session(NOW + 60);

        deck.decide(&backend, Verdict::Yes, Some(&me), NOW).await;
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.error(), Some(SWIPE_ERROR));

        // Retrying the same candidate succeeds and clears the error
        deck.decide(&backend, Verdict::Yes, Some(&me), NOW).await;
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.error(), None);
        assert_eq!(backend.call_count(), 2);
    }

    #[test]
    fn test_one_submission_at_a_time() {
        let mut deck = SwipeDeck::with_candidates(three());
        let me = session(NOW + 60);

        let step = deck.step(Verdict::Yes, Some(&me), NOW);
        assert!(matches!(step, SwipeStep::Submit { .. }));
        assert!(deck.is_busy());
        assert_eq!(deck.step(Verdict::No, Some(&me), NOW), SwipeStep::Idle);
        assert_eq!(deck.step(Verdict::Yes, Some(&me), NOW), SwipeStep::Idle);

        deck.settle(Ok(()));
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.step(Verdict::No, Some(&me), NOW), SwipeStep::Skipped);
        assert_eq!(deck.cursor(), 2);
    }

    #[test]
    fn test_skip_clears_previous_error() {
        let mut deck = SwipeDeck::with_candidates(three());
        deck.step(Verdict::Yes, None, NOW);
        assert!(deck.error().is_some());
        deck.step(Verdict::No, None, NOW);
        assert!(deck.error().is_none());
    }

    #[tokio::test]
    async fn test_reload_resets_cursor() {
        let backend = FakeBackend {
            search_result: Some(Ok(three())),
            ..Default::default()
        };
        let mut deck = SwipeDeck::with_candidates(three());
        deck.step(Verdict::No, None, NOW);
        deck.step(Verdict::No, None, NOW);

        deck.load(&backend, Some(&session(NOW))).await;
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.phase(), DeckPhase::Browsing);
    }
}
