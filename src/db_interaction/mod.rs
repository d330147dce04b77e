pub mod categories;
pub mod menu_items;
pub mod orders;
pub mod user;
pub mod user_menu_items;
