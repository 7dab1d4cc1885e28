use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::api::AztraApi,
    error::{backend::BackendError, internal::InternalError, AppError},
};

mod api;
mod discord;
mod invite;
mod server_data;
mod ticket;
