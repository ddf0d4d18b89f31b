//! Widgets shared by the pages and the shell.

pub mod footer;
pub mod logo;
pub mod notifications;
pub mod progress;
pub mod searchable_list;
pub mod tabs;

pub use footer::render_footer;
pub use logo::{LOGO_HEIGHT, render_logo};
pub use notifications::{Notification, Notifications, Severity};
pub use progress::render_progress;
pub use searchable_list::{ListEvent, ListId, SearchableList};
pub use tabs::render_tab_bar;
