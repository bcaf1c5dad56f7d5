use crate::event::NavigationEvent;

/// Receives every navigation event, synchronously.
///
/// `stack` is a snapshot taken right after the mutation. Observers may issue
/// further navigation intents from inside `on_navigate`; those are applied
/// after the current one, in call order.
pub trait StackObserver<G> {
    fn on_navigate(&self, event: &NavigationEvent<G>, stack: &[G]);
}

impl<G, F> StackObserver<G> for F
where
    F: Fn(&NavigationEvent<G>, &[G]),
{
    fn on_navigate(&self, event: &NavigationEvent<G>, stack: &[G]) {
        self(event, stack)
    }
}

/// Token returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
