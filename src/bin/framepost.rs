use std::path::PathBuf;

use clap::{Parser, Subcommand};

use framepost::crop::PixelBox;
use framepost::overlay::config::OverlayConfig;

#[derive(Parser, Debug)]
#[command(name = "framepost", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the four corner text overlays on every PNG in a folder.
    Overlay(OverlayArgs),
    /// Scan frames for the union of non-black bounding boxes.
    CropScan(CropScanArgs),
    /// Crop every frame to a fixed box.
    Crop(CropArgs),
    /// Crop a centered square from every frame.
    CropSquare(CropSquareArgs),
    /// Flatten transparent frames onto a black background.
    Fill(DirArgs),
    /// Copy frames in reverse order with fresh numbering.
    Reverse(DirArgs),
    /// Rotate each frame by a per-frame angle from a curve file.
    Rotate(RotateArgs),
    /// Rotation-curve file tools.
    #[command(subcommand)]
    Curve(CurveCommand),
    /// GeoTIFF export tools.
    #[command(subcommand)]
    Geotiff(GeotiffCommand),
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// Input folder containing PNG frames.
    folder: PathBuf,

    /// Optional JSON overlay config; compiled-in defaults otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Re-render only this filename (repeatable). Frame numbering still
    /// follows the full folder listing.
    #[arg(long = "only", value_name = "FILENAME")]
    only: Vec<String>,
}

#[derive(Parser, Debug)]
struct DirArgs {
    /// Input folder containing PNG frames.
    folder: PathBuf,
}

#[derive(Parser, Debug)]
struct CropScanArgs {
    /// Input folder containing PNG frames.
    folder: PathBuf,

    /// Scan only the first N frames.
    #[arg(long)]
    frames: Option<usize>,
}

#[derive(Parser, Debug)]
struct CropArgs {
    /// Input folder containing PNG frames.
    folder: PathBuf,
    /// Left edge of the crop box.
    left: u32,
    /// Top edge of the crop box.
    top: u32,
    /// Right edge of the crop box (exclusive).
    right: u32,
    /// Bottom edge of the crop box (exclusive).
    bottom: u32,
}

#[derive(Parser, Debug)]
struct CropSquareArgs {
    /// Input folder containing PNG frames.
    folder: PathBuf,
    /// Side length of the centered square crop, in pixels.
    side: u32,
}

#[derive(Parser, Debug)]
struct RotateArgs {
    /// Curve file of `frame degrees` lines.
    curve: PathBuf,
    /// Input folder containing PNG frames.
    folder: PathBuf,
}

#[derive(Subcommand, Debug)]
enum CurveCommand {
    /// Scale all values so the smallest maps exactly to a target.
    Scale(CurveScaleArgs),
    /// Multiply all values by -1.
    Negate(CurveFileArgs),
    /// Accumulate per-frame strengths into a total-rotation curve.
    Accumulate(CurveAccumulateArgs),
}

#[derive(Parser, Debug)]
struct CurveFileArgs {
    /// Curve file of `frame value` lines.
    file: PathBuf,
}

#[derive(Parser, Debug)]
struct CurveScaleArgs {
    /// Curve file of `frame value` lines.
    file: PathBuf,

    /// Value the smallest entry should map to.
    #[arg(long, default_value_t = -104.0, allow_hyphen_values = true)]
    target: f64,
}

#[derive(Parser, Debug)]
struct CurveAccumulateArgs {
    /// Strength file of `frame strength` lines.
    file: PathBuf,

    /// Running-sum scale factor.
    #[arg(long)]
    scale: f64,

    /// First frame to accumulate.
    #[arg(long, default_value_t = 2)]
    start: u32,

    /// Last frame to accumulate.
    #[arg(long)]
    end: u32,
}

#[derive(Subcommand, Debug)]
enum GeotiffCommand {
    /// Convert a GeoTIFF to a PNG with a world-file sidecar.
    ToPng(GeotiffFileArgs),
    /// Re-encode a GeoTIFF keeping only pixels and georeferencing.
    Strip(GeotiffFileArgs),
}

#[derive(Parser, Debug)]
struct GeotiffFileArgs {
    /// Input GeoTIFF.
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Overlay(args) => cmd_overlay(args),
        Command::CropScan(args) => cmd_crop_scan(args),
        Command::Crop(args) => cmd_crop(args),
        Command::CropSquare(args) => cmd_crop_square(args),
        Command::Fill(args) => {
            let (written, out_dir) = framepost::fill::fill_sequence(&args.folder)?;
            println!("Wrote {written} file(s) to {}", out_dir.display());
            Ok(())
        }
        Command::Reverse(args) => {
            framepost::reverse::reverse_sequence(&args.folder)?;
            Ok(())
        }
        Command::Rotate(args) => {
            let (_, out_dir) = framepost::rotate::rotate_sequence(&args.curve, &args.folder)?;
            println!("\nDone. Rotated images written to: {}", out_dir.display());
            Ok(())
        }
        Command::Curve(cmd) => cmd_curve(cmd),
        Command::Geotiff(cmd) => cmd_geotiff(cmd),
    }
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => OverlayConfig::from_path(path)?,
        None => OverlayConfig::default(),
    };
    config.filter.extend(args.only);
    // Zero matching images is informational (exit 0); a bad input path is a
    // usage error (exit 1). The run function prints both cases' messages.
    framepost::overlay::run(&args.folder, &config)?;
    Ok(())
}

fn cmd_crop_scan(args: CropScanArgs) -> anyhow::Result<()> {
    match framepost::crop::scan_bbox(&args.folder, args.frames)? {
        Some(bbox) => println!("{} {} {} {}", bbox.left, bbox.top, bbox.right, bbox.bottom),
        None => println!("0 0 0 0"),
    }
    Ok(())
}

fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let bbox = PixelBox {
        left: args.left,
        top: args.top,
        right: args.right,
        bottom: args.bottom,
    };
    let (_, out_dir) = framepost::crop::crop_sequence(&args.folder, bbox)?;
    println!("Done. Cropped images written to: {}", out_dir.display());
    Ok(())
}

fn cmd_crop_square(args: CropSquareArgs) -> anyhow::Result<()> {
    framepost::crop::crop_square(&args.folder, args.side)?;
    Ok(())
}

fn cmd_curve(cmd: CurveCommand) -> anyhow::Result<()> {
    match cmd {
        CurveCommand::Scale(args) => {
            let (factor, out_path) = framepost::curve::scale_to_min(&args.file, args.target)?;
            println!("Calculated SCALE: {factor}");
            println!("Done. Scaled file written to: {}", out_path.display());
        }
        CurveCommand::Negate(args) => {
            let out_path = framepost::curve::negate(&args.file)?;
            println!("Done. Output written to: {}", out_path.display());
        }
        CurveCommand::Accumulate(args) => {
            framepost::curve::accumulate_file(&args.file, args.scale, args.start, args.end)?;
        }
    }
    Ok(())
}

fn cmd_geotiff(cmd: GeotiffCommand) -> anyhow::Result<()> {
    match cmd {
        GeotiffCommand::ToPng(args) => {
            let (png_path, world_path) = framepost::geotiff::to_png(&args.file)?;
            println!("Exported geocoded PNG:\n  PNG: {}", png_path.display());
            match world_path {
                Some(p) => println!("  World file: {}", p.display()),
                None => println!("  World file: (no georeferencing tags found)"),
            }
        }
        GeotiffCommand::Strip(args) => {
            let out_path = framepost::geotiff::strip(&args.file)?;
            println!("Wrote cleaned GeoTIFF: {}", out_path.display());
        }
    }
    Ok(())
}
