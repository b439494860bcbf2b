//! Compiles `proto/outerspace.proto` into the `LaunchService` server and client stubs.
//!
//! `protoc` comes from `protoc-bin-vendored` so the build does not depend on a
//! system installation.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/outerspace.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/outerspace.proto");

    Ok(())
}
