fn main() {
    // Only build the external kernel when the feature is on.
    if std::env::var("CARGO_FEATURE_ORC").is_ok() {
        cc::Build::new()
            .file("csrc/i32_or_a16_orc.c")
            .include("csrc")
            .flag_if_supported("-O3")
            .flag_if_supported("-fPIC")
            .flag_if_supported("-Wno-unused-parameter")
            .compile("i32_or_a16_orc");

        println!("cargo:rerun-if-changed=csrc/i32_or_a16_orc.c");
        println!("cargo:rerun-if-changed=csrc/i32_or_a16_orc.h");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
