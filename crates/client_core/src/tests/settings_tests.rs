use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_dir(tag: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("rufix_settings_{tag}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    dir
}

#[test]
fn defaults_point_at_local_solver_service() {
    let settings = Settings::default();
    assert_eq!(settings.server_url, "http://127.0.0.1:5000/api");
    assert_eq!(settings.request_timeout(), Duration::from_secs(30));
}

#[test]
fn reads_first_existing_fallback_file() {
    let dir = temp_dir("fallback");
    let missing = dir.join("missing.toml");
    let present = dir.join(CONFIG_FILE_NAME);
    fs::write(
        &present,
        "server_url = \"http://solver.internal:8080/api\"\nrequest_timeout_secs = 5\n",
    )
    .expect("write config");

    let settings = read_settings_file(&missing).expect("read");
    assert!(settings.is_none());

    let settings = load_settings(None, &[missing, present]).expect("load");
    assert_eq!(settings.server_url, "http://solver.internal:8080/api");
    assert_eq!(settings.request_timeout_secs, 5);

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = temp_dir("explicit");
    let err = load_settings(Some(&dir.join("nope.toml")), &[]).expect_err("missing");
    assert!(err.to_string().contains("does not exist"), "{err}");
    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn rejects_unknown_keys() {
    let dir = temp_dir("unknown");
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, "sever_url = \"typo\"\n").expect("write config");

    let err = load_settings(Some(&path), &[]).expect_err("unknown key");
    assert!(err.to_string().contains("failed to parse config file"), "{err}");

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn env_overrides_win_over_file_values() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("RUFIX_SERVER_URL", " http://env-host/api "),
        ("RUFIX_REQUEST_TIMEOUT_SECS", "12"),
    ]);
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| vars.get(name).map(|v| v.to_string()));

    assert_eq!(settings.server_url, "http://env-host/api");
    assert_eq!(settings.request_timeout_secs, 12);
}

#[test]
fn ignores_unparseable_timeout_override() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| {
        (name == "RUFIX_REQUEST_TIMEOUT_SECS").then(|| "soon".to_string())
    });
    assert_eq!(settings.request_timeout_secs, 30);
}

#[test]
fn zero_timeout_is_clamped_to_one_second() {
    let settings = Settings {
        request_timeout_secs: 0,
        ..Settings::default()
    };
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}
