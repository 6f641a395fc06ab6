pub const LOG_ENV_VAR: &str = "PHOTO_SORTER_LOG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_width: usize,
    pub window_height: usize,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 680,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_log_override(std::env::var(LOG_ENV_VAR).ok())
    }

    fn with_log_override(mut self, value: Option<String>) -> Self {
        if let Some(filter) = value.filter(|filter| !filter.trim().is_empty()) {
            self.log_filter = filter;
        }
        self
    }
}
