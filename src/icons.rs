use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use std::path::Path;

/// Corner radius as a fraction of the icon edge, per the iOS app icon shape.
const CORNER_RADIUS_FRACTION: f32 = 0.2237;
/// Fraction of the adaptive-icon canvas guaranteed visible across launcher masks.
const SAFE_AREA_FRACTION: f32 = 0.66;
/// Solid launcher background color (#FF9C00).
const BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 156, 0, 255]);

/// Creates a square icon with rounded corners and saves it as a PNG.
pub fn create_rounded_icon(input: &Path, out_dir: &Path, size: u32, output_name: &str) -> Result<()> {
    let img = load_resized(input, size)?;

    let radius = (size as f32 * CORNER_RADIUS_FRACTION).round() as u32;
    let mask = rounded_rect_mask(size, radius);

    // The mask replaces the alpha channel entirely, so pixels outside the
    // rounded rectangle end up fully transparent.
    let mut output = RgbaImage::new(size, size);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let src = img.get_pixel(x, y);
        *pixel = Rgba([src[0], src[1], src[2], mask.get_pixel(x, y)[0]]);
    }

    let output_path = out_dir.join(output_name);
    output
        .save(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    println!("✓ Created: {}", output_path.display());
    Ok(())
}

/// Creates the three layers of an Android adaptive icon (foreground,
/// background, monochrome), all sized `size`x`size`.
pub fn create_adaptive_icon_parts(input: &Path, out_dir: &Path, size: u32) -> Result<()> {
    let img = load_resized(input, size)?;

    let safe_area_size = (size as f32 * SAFE_AREA_FRACTION).round() as u32;
    let margin = ((size - safe_area_size) / 2) as i64;

    // Foreground: the full image shrunk into the safe area of a transparent canvas.
    let shrunk = imageops::resize(&img, safe_area_size, safe_area_size, FilterType::Lanczos3);
    let mut foreground = RgbaImage::new(size, size);
    imageops::overlay(&mut foreground, &shrunk, margin, margin);
    save_layer(&foreground, out_dir, "android-icon-foreground.png")?;

    // Background: solid color.
    let background = RgbaImage::from_pixel(size, size, BACKGROUND_COLOR);
    save_layer(&background, out_dir, "android-icon-background.png")?;

    // Monochrome: white silhouette placed with the same geometry as the foreground.
    let white = white_silhouette(&img);
    let shrunk = imageops::resize(&white, safe_area_size, safe_area_size, FilterType::Lanczos3);
    let mut monochrome = RgbaImage::new(size, size);
    imageops::overlay(&mut monochrome, &shrunk, margin, margin);
    save_layer(&monochrome, out_dir, "android-icon-monochrome.png")?;

    Ok(())
}

/// Decodes the source image and resizes it to an exact `size`x`size` RGBA buffer.
fn load_resized(input: &Path, size: u32) -> Result<RgbaImage> {
    let img = image::open(input).with_context(|| format!("Failed to load {}", input.display()))?;
    Ok(img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8())
}

/// Builds a hard-edged rounded-rectangle mask covering the full `size` square.
fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    let s = size as f32;
    let r = radius as f32;
    let mut mask = GrayImage::new(size, size);
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        // Sample at the pixel center; a pixel is opaque when its center lies
        // within `radius` of the inner rectangle inset by the corner radius.
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dx = px - px.clamp(r, s - r);
        let dy = py - py.clamp(r, s - r);
        *pixel = Luma([if dx * dx + dy * dy <= r * r { 255 } else { 0 }]);
    }
    mask
}

/// Copies the alpha channel onto an all-white image, discarding luminance.
fn white_silhouette(img: &RgbaImage) -> RgbaImage {
    let mut out = RgbaImage::new(img.width(), img.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = Rgba([255, 255, 255, img.get_pixel(x, y)[3]]);
    }
    out
}

fn save_layer(img: &RgbaImage, out_dir: &Path, name: &str) -> Result<()> {
    let path = out_dir.join(name);
    img.save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✓ Created: {name}");
    Ok(())
}
