#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub template_dir: Option<String>,
    pub log_filter: String,
    pub draft_idle_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            template_dir: std::env::var("SCAFFOLD_TEMPLATE_DIR")
                .ok()
                .map(|dir| dir.trim().to_string())
                .filter(|dir| !dir.is_empty()),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            draft_idle_minutes: std::env::var("DRAFT_IDLE_MINUTES")
                .ok()
                .and_then(|minutes| minutes.trim().parse().ok())
                .filter(|minutes: &i64| (1..=525_600).contains(minutes))
                .unwrap_or(240),
        }
    }
}
