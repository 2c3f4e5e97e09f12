//! rectcover CLI - decompose an image's alpha channel into covering rectangles

use clap::Parser;
use rectcover::{Decomposer, RectcoverError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rectcover", about = "Decompose an image's alpha channel into covering rectangles")]
struct Args {
    /// Input image file
    input: PathBuf,
    /// Mask resolution: cell count along the longer image side
    #[arg(short, long, default_value = "16")]
    resolution: u32,
    /// Alpha values above this count as solid
    #[arg(short, long, default_value = "0")]
    alpha_threshold: u8,
    /// Emit the result as JSON instead of text
    #[arg(short, long)]
    json: bool,
    /// Also print rectangles projected into a target area, e.g. 480x360
    #[arg(long, value_name = "WxH", value_parser = parse_fit)]
    fit: Option<(u32, u32)>,
}

fn parse_fit(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s.split_once('x').ok_or("expected WxH, e.g. 480x360")?;
    let w: u32 = w.parse().map_err(|_| format!("bad width: {w}"))?;
    let h: u32 = h.parse().map_err(|_| format!("bad height: {h}"))?;
    if w == 0 || h == 0 {
        return Err("target dimensions must be nonzero".into());
    }
    Ok((w, h))
}

fn main() -> Result<(), RectcoverError> {
    let args = Args::parse();

    let image = image::open(&args.input)?;
    let result = Decomposer::new()
        .with_resolution(args.resolution)
        .with_alpha_threshold(args.alpha_threshold)
        .decompose(&image);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "mask {}x{}: {} rectangles",
        result.mask_width,
        result.mask_height,
        result.rects.len()
    );
    for rect in &result.rects {
        print!("{} {} {} {}", rect.x, rect.y, rect.w, rect.h);
        if let Some((tw, th)) = args.fit {
            let [fx, fy, fw, fh] =
                rect.project(result.mask_width, result.mask_height, tw as f32, th as f32);
            print!("  -> {fx:.1} {fy:.1} {fw:.1} {fh:.1}");
        }
        println!();
    }
    Ok(())
}
