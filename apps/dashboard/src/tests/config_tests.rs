use super::*;

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"
api_url = "https://dashboard.example.com/api"
log_filter = "client_core=debug"
"#,
    );
    assert_eq!(settings.api_base_url, "https://dashboard.example.com/api");
    assert_eq!(settings.log_filter, "client_core=debug");
}

#[test]
fn malformed_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "api_url = [1, 2");
    assert_eq!(settings, Settings::default());
}

#[test]
fn prefixed_env_var_wins_over_short_name() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |key| match key {
        "DASHBOARD_API_URL" => Some("http://short.example/api".into()),
        "APP__API_URL" => Some("http://prefixed.example/api".into()),
        "DASHBOARD_LOG" => Some("warn".into()),
        _ => None,
    });
    assert_eq!(settings.api_base_url, "http://prefixed.example/api");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn normalizes_trailing_slashes() {
    assert_eq!(
        normalize_api_base_url(" http://localhost:5001/api/ ").expect("url"),
        "http://localhost:5001/api"
    );
}

#[test]
fn blank_url_falls_back_to_default() {
    assert_eq!(
        normalize_api_base_url("   ").expect("url"),
        Settings::default().api_base_url
    );
}

#[test]
fn rejects_non_http_urls() {
    assert!(normalize_api_base_url("ftp://files.example.com").is_err());
    assert!(normalize_api_base_url("localhost:5001").is_err());
}
