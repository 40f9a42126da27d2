use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub target_urls: Vec<String>,
    pub cookie: String,
    pub bot_token: String,
    pub chat_id: String,
    pub mode: String,
    pub only_on_change: bool,
    pub state_path: PathBuf,
    pub categories_path: PathBuf,
    pub log_level: String,
    pub fetch_timeout_secs: u64,
    pub notify_timeout_secs: u64,
    pub user_agent: String,
    pub stock_unit: String,
    pub telegram_api_base: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("target_urls", &self.target_urls)
            .field(
                "cookie",
                &(!self.cookie.is_empty()).then_some("[redacted]"),
            )
            .field("bot_token", &"[redacted]")
            .field("chat_id", &self.chat_id)
            .field("mode", &self.mode)
            .field("only_on_change", &self.only_on_change)
            .field("state_path", &self.state_path)
            .field("categories_path", &self.categories_path)
            .field("log_level", &self.log_level)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("notify_timeout_secs", &self.notify_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("stock_unit", &self.stock_unit)
            .field("telegram_api_base", &self.telegram_api_base)
            .finish()
    }
}
