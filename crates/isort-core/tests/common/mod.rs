//! Shared helpers for tests that load real algorithm modules.

use std::path::{Path, PathBuf};
use std::process::Command;

use once_cell::sync::Lazy;

/// Module crates built for native loading tests.
pub const MODULE_PACKAGES: [&str; 2] = ["isort-radix", "isort-bubble"];

static MODULE_DIR: Lazy<PathBuf> = Lazy::new(build_modules);

/// Directory holding freshly built `radix` and `bubble` modules.
///
/// The modules are built once per test binary, into a target directory
/// separate from the one running the tests.
pub fn module_dir() -> &'static Path {
    &MODULE_DIR
}

fn build_modules() -> PathBuf {
    let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("isort-modules");

    let mut cmd = Command::new(env!("CARGO"));
    cmd.current_dir(&workspace)
        .args(["build", "--quiet", "--target-dir"])
        .arg(&target_dir);
    for package in MODULE_PACKAGES {
        cmd.args(["-p", package]);
    }

    let status = cmd.status().expect("failed to run cargo");
    assert!(status.success(), "building algorithm modules failed");

    target_dir.join("debug")
}
