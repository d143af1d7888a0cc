use android_icon_gen::{generate, IconConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "android-icon-gen",
    about = "Regenerate Android launcher icons for every mipmap density"
)]
struct Args {
    /// Path to the source icon (PNG, JPEG, WebP, ...). Non-square images are squashed.
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Android resource directory holding the mipmap-* folders.
    #[clap(short, long, value_name = "DIR", default_value = "./res")]
    output: PathBuf,
}

fn run(args: Args) -> Result<()> {
    let config = IconConfig::new(args.input, args.output);
    let report = generate(&config).context("Icon generation aborted")?;

    let total = report.outcomes.len();
    let done = report.succeeded().count();
    if report.is_complete() {
        println!("✓ Generated launcher icons for {done} densities");
    } else {
        let failed: Vec<&str> = report.failed().map(|o| o.folder.as_str()).collect();
        println!(
            "⚠ Generated launcher icons for {done} of {total} densities (failed: {})",
            failed.join(", ")
        );
    }
    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}
