use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use storeshots::catalog::{find_device, DEVICES, SCREENS};
use storeshots::{generate, RenderConfig};

/// Render the App Store screenshots for every device and screen.
#[derive(Parser, Debug)]
#[command(name = "storeshots", version, about)]
struct Cli {
    /// Output root (default: `generated/` next to the crate manifest)
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Only render this device; repeat for several
    #[arg(long = "device", value_name = "NAME")]
    devices: Vec<String>,

    /// Also write manifest.json with a SHA-256 per file
    #[arg(long)]
    manifest: bool,

    /// Print the device and screen catalog and exit
    #[arg(long)]
    list: bool,
}

fn print_catalog() {
    println!("Devices:");
    for d in DEVICES.iter() {
        println!("  {:<12} {}x{} ({:?})", d.name, d.width, d.height, d.class);
    }
    println!("Screens:");
    for (i, s) in SCREENS.iter().enumerate() {
        println!("  {:02} {:<14} {}", i + 1, s.mockup, s.caption.replace('\n', " "));
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        print_catalog();
        return Ok(());
    }

    let mut config = RenderConfig {
        write_manifest: cli.manifest,
        ..Default::default()
    };
    if let Some(dir) = cli.output {
        config.output_dir = dir;
    }
    if !cli.devices.is_empty() {
        config.devices = cli
            .devices
            .iter()
            .map(String::as_str)
            .map(find_device)
            .collect::<storeshots::Result<_>>()?;
    }

    let report = generate(&config, |f| {
        println!("  ✓ {} ({}x{})", f.file, f.width, f.height);
    })
    .with_context(|| format!("generating screenshots in {}", config.output_dir.display()))?;

    if let Some(manifest) = &report.manifest {
        println!("  ✓ {}", manifest.display());
    }
    println!(
        "\nDone! Generated {} screenshots in {}",
        report.files.len(),
        report.output_dir.display()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("storeshots: {:#}", e);
        std::process::exit(1);
    }
}
