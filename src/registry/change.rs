use tokio::sync::watch;

/// Producer side of the registry change signal.
///
/// The signal carries no payload beyond a monotonically increasing
/// generation counter; one bump per net mutation (insert, remove,
/// dispose-clear), never for a no-op. Bumps always happen outside the
/// registry lock so subscribers may re-enter the registry freely.
pub(crate) struct ChangeSignal {
    tx: watch::Sender<u64>,
}

impl ChangeSignal {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    pub(crate) fn notify(&self) {
        self.tx.send_modify(|generation| *generation += 1);
    }

    pub(crate) fn listen(&self) -> ChangeListener {
        ChangeListener {
            rx: self.tx.subscribe(),
        }
    }
}

/// Subscription to a registry's change signal.
///
/// Consumers re-query the registry after each wake-up; the listener itself
/// never carries notification data.
pub struct ChangeListener {
    rx: watch::Receiver<u64>,
}

impl ChangeListener {
    /// Number of net mutations observed by the registry so far.
    pub fn generation(&self) -> u64 {
        *self.rx.borrow()
    }

    /// Waits for the next mutation. Returns `false` once the registry and
    /// all of its clones have been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
