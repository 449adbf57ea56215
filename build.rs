use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // OUT_DIR is target/<profile>/build/<pkg>/out, the binary lives in target/<profile>
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let profile_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("OUT_DIR is nested under the profile directory");

    fs::copy("config.toml", profile_dir.join("config.toml"))
        .expect("failed to copy config.toml next to the binary");
}
