use chrono::Datelike;
use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    /// Season year the standings/scorers/player requests are issued for.
    pub season: u16,
}

impl AppSettings {
    pub fn load() -> Self {
        let season = std::env::var("FOOTUI_SEASON")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(|| chrono::Utc::now().year() as u16);

        Self { full_screen: false, log_level: None, season }
    }
}
