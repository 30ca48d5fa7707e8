use std::env;

fn main() {
    // Host builds (driver tests) have no ESP-IDF environment to export
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_os == "espidf" {
        embuild::espidf::sysenv::output();
    } else {
        println!("cargo:warning=Not an ESP-IDF target ({}), skipping ESP-IDF link setup", target_os);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
