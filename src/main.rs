mod error;
mod padder;
mod physical_image;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use error::PadError;
use padder::{pad_to_panel, write_framebuffer};
use physical_image::{PaperSize, PhysicalDimensions, PhysicalPicture};

#[derive(Debug, Parser)]
#[command(
    name = "lcd-png-fit",
    about = "Pads a PNG to fill an LCD panel at the picture's own pixel density"
)]
struct Args {
    /// PNG image to place on the panel (treated as a landscape A4 sheet)
    #[arg(long = "png", value_name = "FILE")]
    png: PathBuf,

    /// Where to write the padded PNG
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("❌ {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PadError> {
    println!("📁 Loading PNG: {}", args.png.display());
    let picture = PhysicalPicture::open(&args.png, PaperSize::A4_LANDSCAPE)?;
    println!(
        "✓ Decoded {}x{} px representing {}x{} mm",
        picture.dims.width_px, picture.dims.height_px, picture.dims.width_mm, picture.dims.height_mm
    );

    let panel = PhysicalDimensions::LCD_1360X768;
    let framebuffer = pad_to_panel(&picture, &panel)?;

    write_framebuffer(&framebuffer, &args.output)?;
    println!(
        "✅ Wrote {} ({}x{} px)",
        args.output.display(),
        framebuffer.width(),
        framebuffer.height()
    );

    Ok(())
}
