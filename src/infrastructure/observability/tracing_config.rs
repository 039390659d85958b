pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_directives: String,
    /// Source file and line on every event. Off in production.
    pub include_location: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of `enable_json`.
    pub fn from_settings(environment: &str, level: &str, enable_json: bool) -> Self {
        let env_json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self {
            environment: environment.to_string(),
            json_format: enable_json || env_json,
            default_directives: format!("{level},elemnote=debug,tower_http=debug"),
            include_location: !environment.eq_ignore_ascii_case("prod"),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_settings("Local", "info", false)
    }
}
