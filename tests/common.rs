#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtg() -> Command {
    cargo_bin_cmd!("rtimeguard")
}

/// Unique file path inside the system temp dir, removed if it already exists
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeguard.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a page description with the default element ids
pub fn write_page(name: &str, login: &str, logout: &str) -> String {
    let path = temp_file(name, "yaml");
    let yaml = format!(
        "elements:\n  date: {{}}\n  login-time:\n    value: \"{}\"\n  logout-time:\n    value: \"{}\"\n",
        login, logout
    );
    fs::write(&path, yaml).expect("write page");
    path
}
