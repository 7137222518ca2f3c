//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `filemark_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let settings = filemark_core::MarkSettings::default();
    println!("filemark_core version={}", filemark_core::core_version());
    println!(
        "filemark_core default_registers={}",
        settings.harpoon_register_list.join(",")
    );
}
