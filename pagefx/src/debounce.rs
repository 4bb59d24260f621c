/// A trailing-edge debouncer.
///
/// A burst of [`call`](Self::call)s collapses to a single [`poll`](Self::poll) delivery,
/// `window_ms` after the last call, carrying that call's value. Each consumer owns its
/// own `Debouncer`; there is no shared timer state.
///
/// The engine has no clock: the host passes `now_ms` into `call`, and fires `poll` from
/// its tick loop. A new `call` always replaces the pending value and re-arms the
/// deadline, so a pending delivery is implicitly cancelled by the next call.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    deadline_ms: u64,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The deadline of the pending delivery, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// Records a call at `now_ms`, replacing any pending value and re-arming the window.
    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            deadline_ms: now_ms.saturating_add(self.window_ms),
            value,
        });
    }

    /// Delivers the pending value once its window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let deadline = self.pending.as_ref()?.deadline_ms;
        if now_ms < deadline {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Drops any pending delivery.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
