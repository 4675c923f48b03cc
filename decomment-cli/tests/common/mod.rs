//! Test helpers for running the `decomment` binary

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with `args`
pub fn decomment(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_decomment"))
        .args(args)
        .output()
        .expect("spawn decomment")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write fixture");
}
