use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

#[test]
fn version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("printify_merch")?;

    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn create_without_token_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("printify_merch")?;

    cmd.arg("create").env_remove("PRINTIFY_TOKEN");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("PRINTIFY_TOKEN"));

    Ok(())
}

#[test]
fn create_without_shop_fails_before_touching_images_folder() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let covers = tmp.path().join("covers");

    create_cmd(tmp.path(), &covers)?
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not get shop ID"))
        .stdout(predicate::str::contains("Created folder").not());

    assert!(!covers.exists());

    Ok(())
}

#[test]
fn create_without_shop_fails_with_images() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let covers = tmp.path().join("covers");
    fs::create_dir(&covers)?;
    fs::write(covers.join("a.png"), "not really a png")?;

    create_cmd(tmp.path(), &covers)?
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not get shop ID"))
        .stdout(predicate::str::contains("Processing").not());

    Ok(())
}

/// Запуск `create` с конфигом, указывающим на `covers`, и API по адресу где
/// никто не слушает: магазин получить не удастся.
fn create_cmd(dir: &Path, covers: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let config_path = dir.join("config.toml");
    fs::write(
        &config_path,
        format!(
            "base_url = \"http://127.0.0.1:9\"\nimages_path = {:?}\n",
            covers
        ),
    )?;

    let mut cmd = Command::cargo_bin("printify_merch")?;

    cmd.arg("create")
        .arg("--config-path")
        .arg(config_path)
        .env("PRINTIFY_TOKEN", "test-token");

    Ok(cmd)
}
