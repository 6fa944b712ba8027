fn main() {
    // Capture the current year for the footer copyright line
    let build_year = chrono::Utc::now().format("%Y").to_string();

    // Set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
