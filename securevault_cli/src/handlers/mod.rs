pub mod activity;
pub mod add;
pub mod folder;
pub mod list;
pub mod protect;
