use std::collections::HashMap;

use nowplaying::{
    Error,
    config::{self, ConfigProvider},
};

fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_credentials_from_provider() {
    let provider = map(&[
        ("CLIENT_ID", "id"),
        ("CLIENT_SECRET", "secret"),
        ("REFRESH_TOKEN", "refresh"),
    ]);

    let credentials = config::credentials(&provider).unwrap();

    assert_eq!(credentials.client_id, "id");
    assert_eq!(credentials.client_secret, "secret");
    assert_eq!(credentials.refresh_token, "refresh");
}

#[test]
fn test_missing_credentials_are_all_named() {
    let provider = map(&[("CLIENT_SECRET", "secret"), ("REFRESH_TOKEN", "")]);

    let err = config::credentials(&provider).unwrap_err();

    match &err {
        Error::MissingConfig { missing } => {
            assert_eq!(missing, &vec!["CLIENT_ID", "REFRESH_TOKEN"]);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(err.label(), "Missing environment variables");
}

#[test]
fn test_empty_values_are_absent() {
    let provider = map(&[("CLIENT_ID", "")]);
    assert_eq!(ConfigProvider::get(&provider, "CLIENT_ID"), None);
    assert_eq!(ConfigProvider::get(&provider, "UNKNOWN"), None);
}

#[test]
fn test_credentials_debug_redacts_secrets() {
    let provider = map(&[
        ("CLIENT_ID", "id"),
        ("CLIENT_SECRET", "top-secret"),
        ("REFRESH_TOKEN", "very-secret"),
    ]);

    let debug = format!("{:?}", config::credentials(&provider).unwrap());

    assert!(debug.contains("id"));
    assert!(!debug.contains("top-secret"));
    assert!(!debug.contains("very-secret"));
}

// Single test for everything that points XDG_DATA_HOME elsewhere, so no other
// test observes the change.
#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_load_env_tolerates_unusable_data_dir() {
    // A regular file as parent: the data directory can neither exist nor be created
    let file = tempfile::NamedTempFile::new().unwrap();
    unsafe { std::env::set_var("XDG_DATA_HOME", file.path().join("sub")) };
    assert!(config::load_env().await.is_ok());

    let data_home = tempfile::tempdir().unwrap();
    std::fs::create_dir(data_home.path().join("nowplaying")).unwrap();
    std::fs::write(
        data_home.path().join("nowplaying/.env"),
        "NOWPLAYING_LOAD_ENV_TEST=loaded\n",
    )
    .unwrap();
    unsafe { std::env::set_var("XDG_DATA_HOME", data_home.path()) };
    config::load_env().await.unwrap();
    assert_eq!(
        std::env::var("NOWPLAYING_LOAD_ENV_TEST").as_deref(),
        Ok("loaded")
    );

    // Loading never creates the data directory
    let empty_home = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("XDG_DATA_HOME", empty_home.path()) };
    config::load_env().await.unwrap();
    assert!(!empty_home.path().join("nowplaying").exists());
}
