//! Build script for the site crate.
//!
//! Hashes the stylesheet so templates can link `main.css?v=<hash>` and
//! browsers refetch it only when it changes.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_css();
}

/// Sets `CSS_HASH` (first 8 hex chars of the SHA-256 of `main.css`) for
/// `env!("CSS_HASH")`. Empty when the file can't be read.
fn hash_css() {
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let hash = match fs::read(&css_path) {
        Ok(content) => {
            let digest = format!("{:x}", Sha256::digest(&content));
            digest.chars().take(8).collect::<String>()
        }
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            String::new()
        }
    };

    println!("cargo:rustc-env=CSS_HASH={hash}");
}
