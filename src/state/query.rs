//! Dependency-keyed query primitive.
//!
//! A [`Query`] wraps a re-runnable async operation. It runs once on spawn,
//! re-runs whenever [`Query::set_key`] changes the dependency key, and can
//! be re-run manually with [`Query::refetch`]. Its lifecycle is observable
//! as a [`RequestState`] through a `watch` channel.
//!
//! Two guarantees the observable state keeps:
//!
//! - a settlement is applied only if its invocation token is still the
//!   latest issued one, so the state always reflects the most recently
//!   requested data even when invocations overlap;
//! - once the last handle is dropped, in-flight invocations apply nothing.

use super::RequestState;
use crate::error::SdkError;

use futures_util::future::BoxFuture;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

type QueryOp<K, T> = Box<dyn Fn(K) -> BoxFuture<'static, Result<T, SdkError>> + Send + Sync>;
type SuccessCallback<T> = Box<dyn Fn(&T) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&SdkError) + Send + Sync>;

struct QueryInner<K, T> {
    op: QueryOp<K, T>,
    key: Mutex<K>,
    tx: watch::Sender<RequestState<T>>,
    /// Latest issued invocation token.
    epoch: AtomicU64,
    /// Cleared when the last `Query` handle drops.
    live: Arc<AtomicBool>,
    on_success: Option<SuccessCallback<T>>,
    on_error: Option<ErrorCallback>,
}

/// Handle to a running query. Cloneable; all clones observe the same state.
pub struct Query<K, T> {
    inner: Arc<QueryInner<K, T>>,
    _live: Arc<LiveGuard>,
}

struct LiveGuard {
    live: Arc<AtomicBool>,
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.live.store(false, Ordering::SeqCst);
    }
}

impl<K, T> Clone for Query<K, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _live: Arc::clone(&self._live),
        }
    }
}

impl<K, T> Query<K, T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Start building a query around `op`.
    pub fn builder<F, Fut>(op: F) -> QueryBuilder<K, T>
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        QueryBuilder {
            op: Box::new(move |key| Box::pin(op(key))),
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

    /// Current dependency key.
    pub fn key(&self) -> K {
        lock(&self.inner.key).clone()
    }

    /// Change the dependency key. A changed key starts a new invocation
    /// (reset to loading, run, settle); an equal key is a no-op.
    pub fn set_key(&self, key: K) {
        let changed = {
            let mut guard = lock(&self.inner.key);
            if *guard == key {
                false
            } else {
                *guard = key;
                true
            }
        };
        if changed {
            self.spawn_run();
        }
    }

    /// Re-run the operation with the current key, resolving once settled.
    ///
    /// Errors land in the observable state; this never returns them.
    pub async fn refetch(&self) {
        let token = begin(&self.inner);
        run(Arc::clone(&self.inner), token).await;
    }

    /// Wait for (or return) a settled state.
    pub async fn settled(&self) -> RequestState<T> {
        let mut rx = self.inner.tx.subscribe();
        let settled = match rx.wait_for(|s| !s.loading).await {
            Ok(state) => state.clone(),
            // Unreachable while a handle exists; fall back to the snapshot.
            Err(_) => self.state(),
        };
        settled
    }

    fn spawn_run(&self) {
        let token = begin(&self.inner);
        let inner = Arc::clone(&self.inner);
        tokio::spawn(run(inner, token));
    }
}

/// Issue the next invocation token and reset state to loading.
fn begin<K, T>(inner: &QueryInner<K, T>) -> u64 {
    let token = inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
    inner.tx.send_replace(RequestState::in_flight());
    token
}

async fn run<K, T>(inner: Arc<QueryInner<K, T>>, token: u64)
where
    K: Clone + Send,
    T: Clone + Send + Sync,
{
    let key = lock(&inner.key).clone();
    let result = (inner.op)(key).await;

    if !inner.live.load(Ordering::SeqCst) {
        tracing::debug!(token, "query settled after last handle dropped; ignoring");
        return;
    }
    if inner.epoch.load(Ordering::SeqCst) != token {
        tracing::debug!(token, "stale query settlement superseded; ignoring");
        return;
    }

    match result {
        Ok(data) => {
            inner.tx.send_replace(RequestState::settled_ok(data.clone()));
            if let Some(cb) = &inner.on_success {
                cb(&data);
            }
        }
        Err(err) => {
            let err = Arc::new(err);
            inner.tx.send_replace(RequestState::settled_err(Arc::clone(&err)));
            if let Some(cb) = &inner.on_error {
                cb(&err);
            }
        }
    }
}

fn lock<K>(mutex: &Mutex<K>) -> std::sync::MutexGuard<'_, K> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct QueryBuilder<K, T> {
    op: QueryOp<K, T>,
    on_success: Option<SuccessCallback<T>>,
    on_error: Option<ErrorCallback>,
}

impl<K, T> QueryBuilder<K, T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Called once per applied successful settlement.
    pub fn on_success(mut self, cb: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(cb));
        self
    }

    /// Called once per applied failed settlement.
    pub fn on_error(mut self, cb: impl Fn(&SdkError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(cb));
        self
    }

    /// Create the query and start its first invocation with `key`.
    ///
    /// Must be called within a Tokio runtime.
    pub fn spawn(self, key: K) -> Query<K, T> {
        let (tx, _rx) = watch::channel(RequestState::in_flight());
        let live = Arc::new(AtomicBool::new(true));
        let query = Query {
            inner: Arc::new(QueryInner {
                op: self.op,
                key: Mutex::new(key),
                tx,
                epoch: AtomicU64::new(0),
                live: Arc::clone(&live),
                on_success: self.on_success,
                on_error: self.on_error,
            }),
            _live: Arc::new(LiveGuard { live }),
        };
        query.spawn_run();
        query
    }
}
