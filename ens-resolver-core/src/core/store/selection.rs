//! Selection tracker
//!
//! Tracks which key is currently displayed.

use serde::{Deserialize, Serialize};
use crate::domain::entities::events::ResolutionEvent;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    pub current_key: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_current(&self, key: &str) -> bool {
        self.current_key.as_deref() == Some(key)
    }

    /// Any failure drops the selection, even for a key that is not current.
    pub fn reduce<D>(&mut self, event: &ResolutionEvent<D>) {
        match event {
            ResolutionEvent::Requested { key, .. }
            | ResolutionEvent::Succeeded { key, .. }
            | ResolutionEvent::Cached { key } => {
                self.current_key = Some(key.clone());
            }
            ResolutionEvent::Failed { .. } => {
                self.current_key = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::events::ResolutionFailure;

    #[test]
    fn test_selection_follows_requests() {
        let mut selection = SelectionState::new();
        selection.reduce::<()>(&ResolutionEvent::Requested { key: "a.eth".to_string(), refresh: false });
        assert!(selection.is_current("a.eth"));

        selection.reduce::<()>(&ResolutionEvent::Cached { key: "b.eth".to_string() });
        assert!(selection.is_current("b.eth"));

        selection.reduce(&ResolutionEvent::Succeeded { key: "c.eth".to_string(), data: () });
        assert!(selection.is_current("c.eth"));
    }

    #[test]
    fn test_failure_of_other_key_clears_selection() {
        let mut selection = SelectionState::new();
        selection.reduce::<()>(&ResolutionEvent::Requested { key: "a.eth".to_string(), refresh: false });
        selection.reduce::<()>(&ResolutionEvent::Failed {
            key: "b.eth".to_string(),
            error: ResolutionFailure::empty(),
        });

        assert_eq!(selection.current_key, None);
    }
}
