use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_config(dir: &Path, api_url: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!("api_base_url: {api_url}\nstale_time_secs: 300\ntimeout_secs: 5\n");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn vendorhub(config_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vendorhub"));
    cmd.arg("--config")
        .arg(config_path)
        .env_remove("VENDORHUB_CONFIG")
        .env_remove("VENDORHUB_API_URL")
        .env_remove("VENDORHUB_TOKEN")
        .env_remove("VENDORHUB_FORMAT");
    cmd
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "https://vendorhub.test");

    let assert = vendorhub(&config_path).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("API URL: https://vendorhub.test"));
    assert!(stdout.contains("Not logged in"));
    Ok(())
}

#[test]
fn api_url_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "https://vendorhub.test");

    vendorhub(&config_path)
        .args(["status", "--api-url", "http://override.test/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API URL: http://override.test"));
    Ok(())
}

#[test]
fn init_writes_api_url() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("nested").join("config.yaml");

    vendorhub(&config_path)
        .args(["init", "--api-url", "https://api.vendorhub.test/"])
        .assert()
        .success();

    let saved = fs::read_to_string(&config_path)?;
    assert!(saved.contains("api_base_url"));
    assert!(saved.contains("https://api.vendorhub.test"));
    assert!(!saved.contains("vendorhub.test/"));
    Ok(())
}

#[test]
fn login_then_logout_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "https://vendorhub.test");

    vendorhub(&config_path)
        .args(["login", "--token", "tok-123", "--user", "ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ana"));

    assert!(temp.path().join("session.yaml").exists());
    vendorhub(&config_path)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ana"));

    vendorhub(&config_path).arg("logout").assert().success();
    vendorhub(&config_path)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
    Ok(())
}

#[test]
fn api_commands_require_login() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://127.0.0.1:9");

    vendorhub(&config_path)
        .args(["vendor", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
    Ok(())
}

fn logged_in(server_url: &str) -> Result<(tempfile::TempDir, PathBuf), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), server_url);
    vendorhub(&config_path)
        .args(["login", "--token", "tok-123"])
        .assert()
        .success();
    Ok((temp, config_path))
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn vendor_list_renders_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _vendors = server
        .mock("GET", "/api/v1/vendors")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success":true,"message":"","errors":[],
                "data":[{"id":"v1","name":"Acme Corp","status":"ACTIVE","productCount":2}]}"#,
        )
        .create();
    let (_temp, config_path) = logged_in(&server.url())?;

    vendorhub(&config_path)
        .args(["vendor", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Corp"))
        .stdout(predicate::str::contains("VENDOR ID"));
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn product_create_reports_success() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _create = server
        .mock("POST", "/api/v1/products")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success":true,"message":"Created","errors":[],
                "data":{"id":"p1","vendorId":"v1","name":"Widget"}}"#,
        )
        .create();
    let (_temp, config_path) = logged_in(&server.url())?;

    vendorhub(&config_path)
        .args(["--format", "json", "product", "create", "--vendor", "v1", "--name", "Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vendorId\": \"v1\""))
        .stderr(predicate::str::contains("Product created successfully!"));
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn failed_mutation_prints_server_errors_once() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _create = server
        .mock("POST", "/api/v1/vendors")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Validation failed","errors":["Name is taken"]}"#)
        .create();
    let (_temp, config_path) = logged_in(&server.url())?;

    let assert = vendorhub(&config_path)
        .args(["vendor", "create", "--name", "Acme"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert_eq!(stderr.matches("Name is taken").count(), 1);
    assert!(!stderr.contains("Error:"));
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn unauthorized_response_logs_out() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _vendors = server
        .mock("GET", "/api/v1/vendors")
        .with_status(401)
        .create();
    let (temp, config_path) = logged_in(&server.url())?;

    vendorhub(&config_path)
        .args(["vendor", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired. Please log in again."));

    let session = fs::read_to_string(temp.path().join("session.yaml")).unwrap_or_default();
    assert!(!session.contains("tok-123"));
    vendorhub(&config_path)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn security_block_shows_support_id() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _blocked = server
        .mock("GET", "/api/v1/products")
        .with_status(403)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body("<html><body>The requested URL was rejected. Your support ID is: 9876543210</body></html>")
        .create();
    let (_temp, config_path) = logged_in(&server.url())?;

    vendorhub(&config_path)
        .args(["product", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please consult with your administrator. Your support ID is: 9876543210",
        ));
    Ok(())
}
