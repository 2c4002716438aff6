//! Build script that generates Info.plist for the macOS application bundle.
//!
//! Sets LSUIElement so the app lives in the menu bar without a dock icon.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let plist_path = Path::new(&out_dir).join("Info.plist");
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.1.0".to_string());

    let plist_content = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>com.diskjockey.menubar</string>

    <key>CFBundleName</key>
    <string>Disk Jockey</string>

    <key>CFBundleExecutable</key>
    <string>diskjockey-menubar</string>

    <key>CFBundleVersion</key>
    <string>{version}</string>

    <key>CFBundleShortVersionString</key>
    <string>{version}</string>

    <key>CFBundlePackageType</key>
    <string>APPL</string>

    <!-- No dock icon - menu bar only -->
    <key>LSUIElement</key>
    <true/>

    <!-- SF Symbols need macOS 11 -->
    <key>LSMinimumSystemVersion</key>
    <string>11.0</string>

    <key>NSHighResolutionCapable</key>
    <true/>

    <key>NSPrincipalClass</key>
    <string>NSApplication</string>
</dict>
</plist>
"#
    );

    fs::write(&plist_path, plist_content).expect("Failed to write Info.plist");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-env=INFO_PLIST_PATH={}", plist_path.display());
}
