pub mod chart;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod save_bar;
pub mod searchable_dropdown;
pub mod select;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::Pagination;
pub use protected_layout::RequiresLoggedIn;
pub use save_bar::SaveBar;
pub use select::{ChannelFilter, ChannelSelect, RoleSelect};
pub use chart::ChartCard;
