#[path = "src/version.rs"]
mod version;

fn main() {
    println!("cargo:rerun-if-changed=src/version.rs");
    println!("cargo:rerun-if-env-changed=KALMAN1D_VERSION");

    let version = match std::env::var("KALMAN1D_VERSION") {
        Ok(v) => v,
        Err(_) => std::env::var("CARGO_PKG_VERSION").unwrap_or_default(),
    };
    let version = version.strip_prefix('v').unwrap_or(&version);

    let (major, minor, patch) = version::parse(version).unwrap_or_else(|| {
        panic!("Unable to parse 'major.minor.patch' from version: {version}")
    });

    println!("cargo:rustc-env=KALMAN1D_VERSION={version}");
    println!("cargo:rustc-env=KALMAN1D_VERSION_MAJOR={major}");
    println!("cargo:rustc-env=KALMAN1D_VERSION_MINOR={minor}");
    println!("cargo:rustc-env=KALMAN1D_VERSION_PATCH={patch}");
}
