pub mod config;
pub mod content;
pub mod i18n;
pub mod navigation;
pub mod site;
