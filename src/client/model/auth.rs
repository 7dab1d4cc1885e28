use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

/// Who is logged in, shared with every page through context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    inner: Signal<AuthState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    pub fn user(&self) -> Option<UserDto> {
        self.inner.read().user().cloned()
    }

    /// Forgets the user after logout or an expired session.
    pub fn clear(&mut self) {
        self.inner.set(AuthState::NotLoggedIn);
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl From<Result<Option<UserDto>, ApiError>> for AuthState {
    fn from(result: Result<Option<UserDto>, ApiError>) -> Self {
        match result {
            Ok(user) => user.into(),
            Err(error) if error.is_unauthorized() => AuthState::NotLoggedIn,
            Err(error) => AuthState::Error(error),
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, AuthState::Initializing)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_check_means_logged_out() {
        let state: AuthState = Err(ApiError {
            status: 401,
            message: "Not logged in".to_string(),
        })
        .into();
        assert_eq!(state, AuthState::NotLoggedIn);

        let state: AuthState = Err(ApiError {
            status: 502,
            message: "Bad gateway".to_string(),
        })
        .into();
        assert!(matches!(state, AuthState::Error(_)));
    }
}
