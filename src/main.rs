use anyhow::Result;
use std::path::Path;

mod icons;

/// Source image expected in the working directory.
const INPUT_PATH: &str = "original_icon.png";
/// Output directory for the generated assets (assumed to exist).
const OUTPUT_DIR: &str = "assets/images";

fn main() -> Result<()> {
    let input = Path::new(INPUT_PATH);
    if !input.exists() {
        println!("❌ Error: {INPUT_PATH} not found");
        println!("Save your source image as \"{INPUT_PATH}\" in the project root");
        return Ok(());
    }

    println!("🎨 Processing icons...\n");

    let out_dir = Path::new(OUTPUT_DIR);

    // Main app icon (iOS/general) - 1024x1024
    icons::create_rounded_icon(input, out_dir, 1024, "icon.png")?;

    // Android adaptive icon layers - 1024x1024
    icons::create_adaptive_icon_parts(input, out_dir, 1024)?;

    // Favicon - 48x48
    icons::create_rounded_icon(input, out_dir, 48, "favicon.png")?;

    println!("\n✅ All icons generated successfully!");
    println!("\nYou can now rebuild the app with: npx eas build --platform android --profile preview");
    Ok(())
}
