//! Reducer seam for UI-driven state transitions.

/// Pure state-transition semantics.
///
/// A reducer computes the next state from the current state and one action
/// descriptor. Implementations must be deterministic and must not perform
/// I/O or other side effects. `apply` takes `&self` and returns a **new**
/// value: a caller that keeps a handle on the previous state observes no
/// change from the call.
pub trait Reducer: Sized {
    /// Action descriptor consumed by this reducer.
    type Action;

    /// Compute the next state from the current state and one action.
    fn apply(&self, action: &Self::Action) -> Self;

    /// Fold a sequence of actions, starting from the current state.
    fn replay<'a, I>(&self, actions: I) -> Self
    where
        Self: Clone,
        Self::Action: 'a,
        I: IntoIterator<Item = &'a Self::Action>,
    {
        let mut state = self.clone();
        for action in actions {
            state = state.apply(action);
        }
        state
    }
}
