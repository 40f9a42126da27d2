pub mod client;
pub mod cookies;
pub mod error;
pub mod parse;

pub use client::PageClient;
pub use cookies::{parse_cookies, render_cookie_header};
pub use error::ScraperError;
pub use parse::parse_cards;
pub use stockwatch_core::config::split_target_urls;
