use test_utils::builder::TestBuilder;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, InviteSession, LoginFlowSession},
        },
    },
};

mod guard;
mod session;
