use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn snapjot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("snapjot").unwrap();
    cmd.env_remove("SNAPJOT_ROOT");
    cmd.env_remove("SNAPJOT_CAMERA");
    cmd
}

/// Initialize a journal in `root` wired to a fake camera that copies a
/// fixture image into place, with both grants enabled.
#[allow(dead_code)]
pub fn init_journal_with_camera(root: &Path, image_bytes: &[u8]) -> PathBuf {
    snapjot_cmd().arg("init").arg(root).assert().success();

    let fixture = root.join("fixture.jpg");
    fs::write(&fixture, image_bytes).unwrap();

    set_config(root, "camera_command", &format!("cp {}", fixture.display()));
    set_config(root, "allow_camera", "true");
    set_config(root, "allow_gallery", "true");

    fixture
}

#[allow(dead_code)]
pub fn set_config(root: &Path, key: &str, value: &str) {
    snapjot_cmd()
        .current_dir(root)
        .arg("config")
        .arg(key)
        .arg(value)
        .assert()
        .success();
}

/// Run a capture and return the new entry id parsed from stdout.
#[allow(dead_code)]
pub fn capture_entry(root: &Path, caption: &str) -> String {
    let output = snapjot_cmd()
        .current_dir(root)
        .arg("capture")
        .arg(caption)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Captured entry ")
        .expect("unexpected capture output")
        .to_string()
}
