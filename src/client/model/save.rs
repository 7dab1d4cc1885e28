//! Save flow shared by every settings form.

use crate::client::model::error::ApiError;

#[derive(Clone, Default, PartialEq, Debug)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Settled(Result<(), ApiError>),
}

impl SaveState {
    /// Submission is blocked while saving and after a failed save until reset.
    pub fn can_submit(&self) -> bool {
        matches!(self, SaveState::Idle | SaveState::Settled(Ok(())))
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, SaveState::Saving)
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SaveState::Settled(Ok(())))
    }

    pub fn save_error(&self) -> Option<&ApiError> {
        match self {
            SaveState::Settled(Err(error)) => Some(error),
            _ => None,
        }
    }

    /// Enters `Saving`; returns `false` when a save may not start.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        *self = SaveState::Saving;
        true
    }

    pub fn settle(&mut self, result: Result<(), ApiError>) {
        if self.is_saving() {
            *self = SaveState::Settled(result);
        }
    }

    /// Back to `Idle` after the form is reset or reloaded.
    pub fn reset(&mut self) {
        *self = SaveState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> ApiError {
        ApiError {
            status: 500,
            message: "Internal server error".to_string(),
        }
    }

    #[test]
    fn successful_save_allows_another() {
        let mut state = SaveState::default();
        assert!(state.begin());
        assert!(!state.can_submit());
        state.settle(Ok(()));
        assert!(state.is_saved());
        assert!(state.begin());
    }

    /// A failed save disables submission until the form is reset.
    #[test]
    fn failed_save_blocks_until_reset() {
        let mut state = SaveState::default();
        state.begin();
        state.settle(Err(failure()));

        assert_eq!(state.save_error(), Some(&failure()));
        assert!(!state.can_submit());
        assert!(!state.begin());

        state.reset();
        assert!(state.can_submit());
        assert_eq!(state.save_error(), None);
    }

    #[test]
    fn settle_without_begin_is_ignored() {
        let mut state = SaveState::default();
        state.settle(Err(failure()));
        assert_eq!(state, SaveState::Idle);
    }
}
