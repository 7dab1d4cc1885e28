//! Pure helpers behind the dashboard views.
//!
//! Nothing in here touches Dioxus: every function takes plain data and returns
//! plain data so the list, chart and form logic can be unit tested directly.

pub mod chart;
pub mod export;
pub mod list;
pub mod pagination;
pub mod search;
pub mod template;
pub mod validation;
pub mod warn_ranking;
