include!("src/bridge/names.rs");

fn main() {
    // Declaring the app manifest makes Tauri's ACL deny every app command
    // that is not listed here and granted in `capabilities/`.
    tauri_build::try_build(
        tauri_build::Attributes::new()
            .app_manifest(tauri_build::AppManifest::new().commands(BRIDGE_COMMANDS)),
    )
    .expect("failed to run tauri-build");
}
