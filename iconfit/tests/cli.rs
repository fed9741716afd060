use anyhow::Result;
use image::{GenericImageView, Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};

fn iconfit(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_iconfit"))
        .args(args)
        .env("ICONFIT_LOG", "off")
        .output()?)
}

fn write_icon(dir: &Path, name: &str, width: u32, height: u32) -> Result<()> {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])).save(dir.join(name))?;
    Ok(())
}

#[test]
fn test_usage() -> Result<()> {
    let output = iconfit(&[])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));

    let dir = tempfile::tempdir()?;
    let path = dir.path().to_str().unwrap();
    let output = iconfit(&[path, path])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let output = iconfit(&["--help"])?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_invalid_folder() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("appIcon.png");
    write_icon(dir.path(), "appIcon.png", 36, 36)?;

    let output = iconfit(&[file.to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Invalid folder path"));

    let missing = dir.path().join("nope");
    let output = iconfit(&[missing.to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_normalize_folder() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_icon(dir.path(), "appIcon.png", 50, 50)?;
    write_icon(dir.path(), "appIcon_2x.png", 72, 72)?;
    std::fs::write(dir.path().join("appLogo.png"), b"garbage")?;

    let output = iconfit(&[dir.path().to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "appIcon_2x.png is already the correct size.");
    assert_eq!(lines[1], "Resizing appIcon.png from 50x50 to 36x36");
    assert_eq!(lines[2], "Missing: appIconAlt_2x.png");
    assert!(lines[4].starts_with("Error processing appLogo.png: "));
    assert_eq!(lines[5], "Missing: appLogo_2x.png");

    let img = image::open(dir.path().join("appIcon.png"))?;
    assert_eq!(img.dimensions(), (36, 36));
    assert!(!dir.path().join("appLogo_2x.png").exists());
    Ok(())
}

#[test]
fn test_config_and_dry_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("icons.yaml");
    std::fs::write(
        &config,
        "icons:\n  - name: launcher.png\n    width: 48\n    height: 48\n",
    )?;
    write_icon(dir.path(), "launcher.png", 96, 96)?;

    let output = iconfit(&[
        "--config",
        config.to_str().unwrap(),
        "--filter",
        "nearest",
        "--dry-run",
        dir.path().to_str().unwrap(),
    ])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Would resize launcher.png from 96x96 to 48x48\n"
    );
    let img = image::open(dir.path().join("launcher.png"))?;
    assert_eq!(img.dimensions(), (96, 96));
    Ok(())
}

#[test]
fn test_bad_filter() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = iconfit(&["--filter", "blurry", dir.path().to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
