// Bakes compiler-style build stamps into the binary so the `version`
// command can report when it was built.

use chrono::Local;

fn main() {
    let now = Local::now();
    // Same shape as C's __DATE__/__TIME__, day space-padded.
    println!("cargo:rustc-env=BUILD_DATE={}", now.format("%b %e %Y"));
    println!("cargo:rustc-env=BUILD_TIME={}", now.format("%H:%M:%S"));
    println!("cargo:rerun-if-changed=build.rs");
}
