#[macro_use]
extern crate rust_i18n;

pub mod adapter;
pub mod config;
pub mod csp;
pub mod embed;
pub mod error;
pub mod hooks;

// Initialize i18n
i18n!("locales", fallback = "en");
