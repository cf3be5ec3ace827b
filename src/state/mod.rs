//! View-state primitives — app-owned async request state.
//!
//! The app owns instances of these types; the SDK provides the update
//! logic. [`Query`] re-runs an operation when its dependency key changes,
//! [`Mutation`] runs one on demand, and both expose their lifecycle as an
//! observable [`RequestState`]. [`AutoRefresh`] layers a countdown-driven
//! periodic refetch on top.
//!
//! Requires a Tokio runtime (the `state` feature).

mod mutation;
mod query;
mod refresh;

pub use mutation::{Mutation, MutationBuilder};
pub use query::{Query, QueryBuilder};
pub use refresh::AutoRefresh;

use crate::error::SdkError;
use std::sync::Arc;

/// Observable lifecycle of one async request.
///
/// After a settled attempt exactly one of `data`/`error` is `Some` while
/// `loading` is false. While an attempt is in flight, `loading` is true and
/// both are `None` — consumers never see stale data during a refetch.
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<Arc<SdkError>>,
}

impl<T> RequestState<T> {
    /// Nothing requested yet (a mutation before `mutate`).
    pub fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    pub(crate) fn in_flight() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub(crate) fn settled_ok(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub(crate) fn settled_err(error: Arc<SdkError>) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error),
        }
    }

    /// Whether an attempt has completed (either way).
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_clears_both_fields() {
        let s: RequestState<u32> = RequestState::in_flight();
        assert!(s.loading);
        assert!(s.data.is_none());
        assert!(s.error.is_none());
        assert!(!s.is_settled());
    }

    #[test]
    fn test_settled_states_are_exclusive() {
        let ok: RequestState<u32> = RequestState::settled_ok(7);
        assert!(ok.is_settled());
        assert!(!ok.is_err());
        assert_eq!(ok.data, Some(7));

        let err: RequestState<u32> =
            RequestState::settled_err(Arc::new(SdkError::Other("boom".into())));
        assert!(err.is_settled());
        assert!(err.is_err());
        assert!(err.data.is_none());
    }

    #[test]
    fn test_default_is_idle() {
        let s: RequestState<u32> = RequestState::default();
        assert!(!s.loading);
        assert!(!s.is_settled());
    }
}
