//! A strict counter reducer.

use serde::{Deserialize, Serialize};

use shopwindow_core::Reducer;

/// Counter state. Plain value, starts at zero, may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn zero() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

/// Actions the counter understands.
///
/// The action set is closed: tags outside it fail to deserialize. The cart's
/// action set takes the opposite stance and folds unknown tags into a no-op
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl Reducer for Counter {
    type Action = CounterAction;

    fn apply(&self, action: &CounterAction) -> Self {
        let count = match action {
            CounterAction::Increment => self.count.saturating_add(1),
            CounterAction::Decrement => self.count.saturating_sub(1),
            CounterAction::Reset => 0,
        };
        Self { count }
    }
}
