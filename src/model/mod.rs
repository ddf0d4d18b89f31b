//! Plain data shared by the lists, the navigator and the detail pages.

mod item;
mod service_path;

pub use item::Item;
pub use service_path::{PathField, ServicePath};
