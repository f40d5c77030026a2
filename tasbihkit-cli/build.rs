//! Build script for tasbihkit-cli
//!
//! Stamps the binary with a build id for the startup log line:
//! `TASBIHKIT_REVISION` (short commit, `+dirty` when the tree has local
//! changes), `TASBIHKIT_BUILT_AT` (UTC, RFC 3339) and `TASBIHKIT_PROFILE`.

use chrono::{SecondsFormat, Utc};
use std::process::Command;

/// Trimmed stdout of a successful git invocation
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn revision() -> String {
    let Some(commit) = git(&["rev-parse", "--short=8", "HEAD"]) else {
        return "unknown".to_string();
    };

    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .map(|status| !status.is_empty())
        .unwrap_or(false);

    if dirty {
        format!("{}+dirty", commit)
    } else {
        commit
    }
}

fn main() {
    let stamps = [
        ("TASBIHKIT_REVISION", revision()),
        (
            "TASBIHKIT_BUILT_AT",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        (
            "TASBIHKIT_PROFILE",
            std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string()),
        ),
    ];

    for (key, value) in stamps {
        println!("cargo:rustc-env={}={}", key, value);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/index");
}
