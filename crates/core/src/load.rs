//! Load state shared by the views.

use std::fmt::Display;

/// Where a fetched collection stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    /// The request has not resolved yet.
    #[default]
    Awaiting,

    /// The request succeeded.
    Ready(T),

    /// The request failed; carries a user-facing message.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Fold a request result into a load state.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    /// The loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Awaiting | Self::Failed(_) => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Awaiting | Self::Ready(_) => None,
        }
    }

    /// Whether the request is still outstanding.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Awaiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_awaiting() {
        let state = LoadState::<Vec<u8>>::default();

        assert!(state.is_awaiting(), "new state should be awaiting");
        assert_eq!(state.ready(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn from_result_maps_both_arms() {
        let ready = LoadState::from_result(Ok::<_, String>(vec![1, 2]));
        let failed = LoadState::<Vec<u8>>::from_result(Err("boom"));

        assert_eq!(ready.ready(), Some(&vec![1, 2]));
        assert_eq!(failed.error(), Some("boom"));
    }
}
