pub mod api_utils;
pub mod components;
pub mod config;
pub mod format;
pub mod icons;
pub mod list;
pub mod list_utils;
pub mod mutation;
pub mod notify;
