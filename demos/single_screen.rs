//! Single screen example - renders one screenshot and reports its digest

use storeshots::catalog::find_device;
use storeshots::rendering::raster::rasterize;
use storeshots::{FontBook, FontCandidates, SCREENS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("storeshots - Single Screen Example\n");

    let fonts = FontBook::resolve(&FontCandidates::default());
    match fonts.bold.source() {
        Some(path) => println!("Caption font: {}", path.display()),
        None => println!("Caption font: built-in bitmap"),
    }

    let device = find_device("iPad_12.9")?;
    let screen = &SCREENS[1];
    let shot = rasterize(&device, screen, &fonts)?;

    let out = std::env::temp_dir().join(format!("{}_{}.png", device.name, screen.mockup));
    std::fs::write(&out, &shot.png_data)?;

    println!("Device:  {} ({}x{})", device.name, shot.width, shot.height);
    println!("Screen:  {}", screen.caption.replace('\n', " "));
    println!("SHA-256: {}", shot.sha256_hex());
    println!("Wrote {}", out.display());

    Ok(())
}
