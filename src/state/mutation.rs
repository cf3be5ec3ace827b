//! Caller-triggered mutation primitive.
//!
//! Unlike [`Query`](super::Query), a [`Mutation`] never runs on its own —
//! state stays idle until [`Mutation::mutate`] is called. The outcome is
//! reported on two channels: it is stored in the observable state for
//! passive display, and returned (success) or re-raised (failure) to the
//! caller for local handling, e.g. keeping a form open.

use super::RequestState;
use crate::error::SdkError;

use futures_util::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

type MutationOp<P, T> = Box<dyn Fn(P) -> BoxFuture<'static, Result<T, SdkError>> + Send + Sync>;
type SuccessCallback<T> = Box<dyn Fn(&T) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&SdkError) + Send + Sync>;

struct MutationInner<P, T> {
    op: MutationOp<P, T>,
    tx: watch::Sender<RequestState<T>>,
    on_success: Option<SuccessCallback<T>>,
    on_error: Option<ErrorCallback>,
}

/// Handle to a mutation. Cloneable; all clones observe the same state.
pub struct Mutation<P, T> {
    inner: Arc<MutationInner<P, T>>,
}

impl<P, T> Clone for Mutation<P, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P, T> Mutation<P, T>
where
    P: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Start building a mutation around `op`.
    pub fn builder<F, Fut>(op: F) -> MutationBuilder<P, T>
    where
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        MutationBuilder {
            op: Box::new(move |payload| Box::pin(op(payload))),
            on_success: None,
            on_error: None,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> RequestState<T> {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn watch(&self) -> watch::Receiver<RequestState<T>> {
        self.inner.tx.subscribe()
    }

    /// Run the operation with `payload`.
    ///
    /// Clears prior data/error, settles the observable state, fires the
    /// matching callback, and hands the outcome back to the caller — the
    /// error is both stored and returned.
    pub async fn mutate(&self, payload: P) -> Result<T, Arc<SdkError>> {
        self.inner.tx.send_replace(RequestState::in_flight());

        match (self.inner.op)(payload).await {
            Ok(data) => {
                self.inner
                    .tx
                    .send_replace(RequestState::settled_ok(data.clone()));
                if let Some(cb) = &self.inner.on_success {
                    cb(&data);
                }
                Ok(data)
            }
            Err(err) => {
                let err = Arc::new(err);
                self.inner
                    .tx
                    .send_replace(RequestState::settled_err(Arc::clone(&err)));
                if let Some(cb) = &self.inner.on_error {
                    cb(&err);
                }
                Err(err)
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MutationBuilder<P, T> {
    op: MutationOp<P, T>,
    on_success: Option<SuccessCallback<T>>,
    on_error: Option<ErrorCallback>,
}

impl<P, T> MutationBuilder<P, T>
where
    P: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Called once per successful `mutate`.
    pub fn on_success(mut self, cb: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(cb));
        self
    }

    /// Called once per failed `mutate`.
    pub fn on_error(mut self, cb: impl Fn(&SdkError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(cb));
        self
    }

    /// Create the mutation. Nothing runs until `mutate` is called.
    pub fn build(self) -> Mutation<P, T> {
        let (tx, _rx) = watch::channel(RequestState::idle());
        Mutation {
            inner: Arc::new(MutationInner {
                op: self.op,
                tx,
                on_success: self.on_success,
                on_error: self.on_error,
            }),
        }
    }
}
