//! Per-guild dashboard pages, rendered inside [`DashboardLayout`].

pub mod autotasking;
pub mod billboards;
pub mod general;
pub mod layout;
pub mod leveling;
pub mod settings_form;
pub mod members;
pub mod statistics;
pub mod tickets;
pub mod warns;

pub use autotasking::Autotasking;
pub use billboards::Billboards;
pub use general::General;
pub use layout::DashboardLayout;
pub use leveling::Leveling;
pub use members::{MemberDetail, Members};
pub use statistics::Statistics;
pub use tickets::Tickets;
pub use warns::Warns;
