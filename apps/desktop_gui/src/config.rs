use std::fs;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
}

/// Layered settings: defaults, then `widget.toml`, then environment
/// variables. The `--server-url` flag is applied on top by `main`.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("widget.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) {
        if let Some(v) = file_cfg.server_url {
            settings.server_url = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_service() {
        assert_eq!(Settings::default().server_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn file_value_overrides_default() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "server_url = \"http://title-svc:9000\"\n");
        assert_eq!(settings.server_url, "http://title-svc:9000");
    }

    #[test]
    fn environment_overrides_default() {
        std::env::set_var("APP__SERVER_URL", "http://env-host:7000");
        let settings = load_settings();
        std::env::remove_var("APP__SERVER_URL");
        assert_eq!(settings.server_url, "http://env-host:7000");
    }

    #[test]
    fn malformed_file_keeps_defaults() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "server_url = [not valid toml");
        assert_eq!(settings, Settings::default());
    }
}
