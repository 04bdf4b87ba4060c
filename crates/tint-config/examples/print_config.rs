/// Example program to print the loaded configuration
///
/// Run with: cargo run -p tint-config --example print_config

fn main() {
    let config = tint_config::TintConfig::load();

    println!("=== Tint Configuration ===\n");

    println!("Device Settings:");
    println!("  Density DPI: {:?}", config.device.density_dpi);
    println!("  Tablet: {}", config.device.tablet);
    println!();

    println!("Resources:");
    println!("  Button Frame: {}", config.resources.button_frame.display());
    println!(
        "  Bookmark Thumbnail: {}",
        config.resources.bookmark_thumbnail.display()
    );
    println!("  Changelog: {}", config.resources.changelog.display());
    println!();

    println!("Logging:");
    println!("  Filter: {}", config.logging.filter);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
