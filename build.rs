//! Build script for the RC link firmware
//!
//! Handles memory layout configuration for embedded builds.

fn main() {
    // Tell Cargo to re-run this if the linker script changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Link memory.x from project directory (embedded builds only)
    if std::env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        println!(
            "cargo:rustc-link-search={}",
            std::env::var("CARGO_MANIFEST_DIR").unwrap()
        );
    }
}
