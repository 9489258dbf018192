pub mod menu;
pub mod menu_entry;
pub mod nav_button;

pub use menu::Menu;
pub use menu_entry::{menu_entries, MenuEntry, MenuEntryView};
pub use nav_button::NavButton;
