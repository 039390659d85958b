use elemnote::infrastructure::observability::TracingConfig;

#[test]
fn given_logging_settings_when_building_config_then_level_leads_directives() {
    let config = TracingConfig::from_settings("Prod", "warn", true);

    assert_eq!(config.environment, "Prod");
    assert!(config.json_format);
    assert!(config.default_directives.starts_with("warn,"));
    assert!(config.default_directives.contains("elemnote=debug"));
    assert!(!config.include_location);
}

#[test]
fn given_local_environment_when_building_config_then_locations_are_included() {
    let config = TracingConfig::from_settings("Local", "info", false);

    assert!(config.include_location);
    assert!(config.default_directives.starts_with("info,"));
}
