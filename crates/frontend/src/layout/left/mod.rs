pub mod actions;
pub mod expansion;
pub mod left;
pub mod menu;
pub mod sidebar;

pub use actions::Navigator;
pub use left::Left;
pub use sidebar::Sidebar;
