use std::process::Command;

use chrono::Local;

fn git(args: &[&str]) -> Option<std::process::Output> {
    Command::new("git").args(args).output().ok()
}

fn main() {
    // Short commit hash of the checkout being built
    let commit = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(out) if out.status.success() => {
            String::from_utf8_lossy(&out.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    };

    // Check if tracked files have been modified (untracked files are ignored)
    let dirty = commit != "unknown"
        && git(&["diff", "--quiet", "HEAD"])
            .map(|out| !out.status.success())
            .unwrap_or(false);

    let build_hash = if dirty {
        // Dirty builds get a timestamp so they can still be told apart
        format!("{commit}-dirty-{}", Local::now().format("%Y%m%d-%H%M%S"))
    } else {
        commit
    };

    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // Rerun when HEAD moves; .git sits at the workspace root, two levels up
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
