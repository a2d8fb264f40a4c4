//! Read-only views over the resolution state

use super::DirectionState;
use crate::domain::entities::records::{DomainData, ReverseData};
use crate::domain::entities::request::ResolutionRequest;

pub fn current_key<D>(state: &DirectionState<D>) -> Option<&str> {
    state.selection.current_key.as_deref()
}

pub fn request_for<'a, D: Clone>(state: &'a DirectionState<D>, key: &str) -> Option<&'a ResolutionRequest<D>> {
    state.requests.get(key)
}

pub fn current_request<D: Clone>(state: &DirectionState<D>) -> Option<&ResolutionRequest<D>> {
    current_key(state).and_then(|key| state.requests.get(key))
}

pub fn current_data<D: Clone>(state: &DirectionState<D>) -> Option<&D> {
    current_request(state).and_then(|request| request.data.as_ref())
}

pub fn is_resolving<D: Clone>(state: &DirectionState<D>) -> bool {
    current_request(state).map(|request| request.is_pending()).unwrap_or(false)
}

/// True when `key` is the current selection and already holds data
pub fn has_cached_data<D: Clone>(state: &DirectionState<D>, key: &str) -> bool {
    state.selection.is_current(key)
        && state
            .requests
            .get(key)
            .map(|request| request.data.is_some())
            .unwrap_or(false)
}

pub fn current_resolved_address(state: &DirectionState<DomainData>) -> Option<&str> {
    current_data(state).map(|data| data.resolved_address.as_str())
}

pub fn current_owner_address(state: &DirectionState<DomainData>) -> Option<&str> {
    current_data(state).map(|data| data.owner_address.as_str())
}

pub fn current_reverse_name(state: &DirectionState<ReverseData>) -> Option<&str> {
    current_data(state).map(|data| data.name.as_str())
}
