//! Integration tests for the capture pipeline

#![cfg(unix)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{capture_entry, init_journal_with_camera, set_config, snapjot_cmd};

#[test]
fn test_capture_with_caption() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("capture")
        .arg("Lunch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Captured entry"));

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn test_capture_without_caption() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("capture")
        .assert()
        .success()
        .stdout(predicate::str::contains("Captured entry"));
}

#[test]
fn test_capture_denied_camera_permission() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");
    set_config(temp.path(), "allow_camera", "false");

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("capture")
        .arg("Lunch")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Permission denied: camera"));

    // No entry was created
    snapjot_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_capture_failing_camera_command() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");
    set_config(temp.path(), "camera_command", "false");

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("capture")
        .arg("Lunch")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Capture failed"));

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_capture_command_producing_no_image() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");
    // Exits cleanly but writes no output file
    set_config(temp.path(), "camera_command", "true");

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("capture")
        .arg("Lunch")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("no image data"));
}

#[test]
fn test_over_long_caption_rejected() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");

    let caption = "x".repeat(201);
    snapjot_cmd()
        .current_dir(temp.path())
        .arg("capture")
        .arg(&caption)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caption too long"));
}

#[test]
fn test_capture_copies_photo_to_gallery() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");

    let gallery = temp.path().join("gallery");
    set_config(temp.path(), "gallery_dir", gallery.to_str().unwrap());

    capture_entry(temp.path(), "Lunch");

    let copies: Vec<_> = fs::read_dir(&gallery)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(copies.len(), 1);
    assert_eq!(fs::read(&copies[0]).unwrap(), b"jpegbytes");
}

#[test]
fn test_gallery_failure_does_not_lose_entry() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");

    // gallery_dir nested under a regular file cannot be created
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    set_config(
        temp.path(),
        "gallery_dir",
        blocker.join("gallery").to_str().unwrap(),
    );

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("capture")
        .arg("Lunch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Captured entry"));

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn test_show_exports_original_photo_bytes() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");

    let id = capture_entry(temp.path(), "Lunch");

    let out = temp.path().join("exported.jpg");
    snapjot_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .arg("--photo-out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("caption: Lunch"));

    assert_eq!(fs::read(&out).unwrap(), b"jpegbytes");
}

#[test]
fn test_show_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    init_journal_with_camera(temp.path(), b"jpegbytes");

    snapjot_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("no-such-id")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry with id"));
}
