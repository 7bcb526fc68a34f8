use noerr_site::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const BIN: &str = "noerr-site";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for key in [
            "NOERR_SERVER__PORT",
            "NOERR_FORMS__ENDPOINT",
            "NOERR_LIMITS__CONTACT_BURST",
            "NOERR_LOG__JSON",
            "CONFIG_FILE",
            "PORT",
            "HOST",
            "STATIC_DIR",
            "FORMS_ENDPOINT",
            "LOG_JSON",
        ] {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert!(!config.server.timeout_disabled);
    assert_eq!(config.site.phone, "+1 (717) 242-0566");
    assert_eq!(config.forms.form_name, "contact");
    assert!(config.forms.endpoint_url().unwrap().is_none());
    assert!(!config.log.json);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("NOERR_SERVER__PORT", "9090");
        env::set_var("NOERR_FORMS__ENDPOINT", "https://forms.example.com/submit");
        env::set_var("NOERR_LOG__JSON", "true");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.forms.endpoint, "https://forms.example.com/submit");
    assert!(config.log.json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("NOERR_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([BIN, "--port", "4000", "--static-dir", "public"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.site.static_dir.to_str(), Some("public"));

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        r#"
server:
  port: 7070
site:
  email: sales@noerr.example
limits:
  contact_burst: 2
"#
    )
    .unwrap();

    // Tell AppConfig to use this file via Env Var (mocking CLI arg indirectly)
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.site.email, "sales@noerr.example");
    assert!((config.limits.contact_burst - 2.0).abs() < f64::EPSILON);
    // untouched keys keep their defaults
    assert_eq!(config.forms.timeout_secs, 10);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/definitely/not/here.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_invalid_endpoint_is_rejected() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--forms-endpoint", "not a url"]);
    let err = result.expect_err("bad endpoint must fail");
    assert!(err.to_string().contains("forms.endpoint"));
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./config.yaml
    let config_content = r#"
server:
  port: 6060
    "#;
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    // No Env var, No CLI: should pick up ./config.yaml
    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
