use lightbnb::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_loading() {
    let config = Config::from_file("tests/fixtures/lightbnb.toml").unwrap();
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.user, "vagrant");
    assert_eq!(
        config.database.password_env.as_deref(),
        Some("LIGHTBNB_DB_PASSWORD")
    );
    assert_eq!(config.database.dbname, "lightbnb");
}

#[test]
fn test_config_missing_file() {
    let result = Config::from_file("nonexistent.toml");
    assert!(result.is_err());
}

#[test]
fn test_config_without_password_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lightbnb.toml");
    fs::write(
        &path,
        "[database]\nhost = \"db\"\nport = 5433\nuser = \"app\"\ndbname = \"lightbnb\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.database.password_env.is_none());
    assert_eq!(config.database.port, 5433);
}

#[test]
fn test_config_rejects_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[database\nhost =").unwrap();

    assert!(Config::from_file(&path).is_err());
}
