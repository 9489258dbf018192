pub mod menu_layout;

pub use menu_layout::MenuLayout;
