fn main() {
    // Windows-specific build configuration
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=assets/frostpack.ico");

        // Embed Windows resources (icon and metadata)
        let mut res = winres::WindowsResource::new();

        res.set_icon("assets/frostpack.ico");

        // File metadata (shown in Properties > Details)
        res.set("ProductName", "frostpack");
        res.set("FileDescription", "Freeze-Build Configuration Assembler");
        res.set("LegalCopyright", "Copyright © 2026");
        res.set("CompanyName", "frostpack contributors");
        res.set("OriginalFilename", "frostpack.exe");
        res.set("InternalName", "frostpack");

        // Version info (must match Cargo.toml)
        res.set("FileVersion", "0.2.0.0");
        res.set("ProductVersion", "0.2.0.0");

        if let Err(e) = res.compile() {
            eprintln!("Warning: Failed to compile Windows resources: {}", e);
        }
    }
}
