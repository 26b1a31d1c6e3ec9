//! Build script for luach-server
//!
//! Ensures the dist/ folder exists for rust-embed. The actual client build is
//! done separately via `trunk build` before building the server; when dist/
//! is missing (CI, server-only builds) a placeholder index.html is generated
//! so the embed still compiles.

use std::env;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir).join("../..");
    let dist_dir = workspace_root.join("dist");

    // Rerun if dist/ directory changes
    println!("cargo:rerun-if-changed={}", dist_dir.display());

    if !dist_dir.exists() {
        println!("cargo:warning=dist/ directory not found, embedding a placeholder");
        println!("cargo:warning=Run `trunk build --release` in crates/luach-client for the real SPA");
        std::fs::create_dir_all(&dist_dir).ok();
        std::fs::write(dist_dir.join("index.html"), "<!-- placeholder -->").ok();
    }
}
