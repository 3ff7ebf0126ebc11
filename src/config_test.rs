use super::*;

// =============================================================================
// parse_base_url
// =============================================================================

#[test]
fn base_url_trims_trailing_slashes() {
    assert_eq!(parse_base_url(Some("https://api.example.test/v1/")).unwrap(), "https://api.example.test/v1");
    assert_eq!(parse_base_url(Some(" http://localhost:8080// ")).unwrap(), "http://localhost:8080");
}

#[test]
fn base_url_missing_or_blank_errors() {
    assert!(matches!(parse_base_url(None), Err(ConfigError::Missing("API_LOGIN"))));
    assert!(matches!(parse_base_url(Some("   ")), Err(ConfigError::Missing("API_LOGIN"))));
}

#[test]
fn base_url_requires_http_scheme() {
    let err = parse_base_url(Some("api.example.test")).unwrap_err().to_string();
    assert!(err.contains("invalid API_LOGIN"));
}

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("")).unwrap(), DEFAULT_PORT);
}

#[test]
fn port_parses_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
}

#[test]
fn port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================================
// env_parse_u64: uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_u64_reads_value() {
    let key = "__TEST_UPSTREAM_SECS_4411__";
    unsafe { std::env::set_var(key, " 42 ") };
    assert_eq!(env_parse_u64(key, 7), 42);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_falls_back_on_garbage_or_unset() {
    let key = "__TEST_UPSTREAM_SECS_4412__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 7), 7);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_parse_u64("__TEST_UPSTREAM_SECS_UNSET_4413__", 9), 9);
}

#[test]
fn timeouts_convert_to_durations() {
    let t = UpstreamTimeouts { request_secs: 30, connect_secs: 10 };
    assert_eq!(t.request(), Duration::from_secs(30));
    assert_eq!(t.connect(), Duration::from_secs(10));
}
