use anyhow::Context;
use log::info;
use motion_averager::core_modules::utils::image_helper;
use motion_averager::{DetectorConfig, Frame, MotionDetector};
use std::env;

const USAGE: &str = "Usage: visual_tester <current_image> [previous_image] [--overlay <output.png>] [--config <config.json>]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // --- 1. Argument Parsing ---
    let mut images = Vec::new();
    let mut overlay_path = None;
    let mut config_path = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--overlay" => overlay_path = Some(args.next().context("--overlay needs a path")?),
            "--config" => config_path = Some(args.next().context("--config needs a path")?),
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => images.push(arg),
        }
    }
    if images.is_empty() || images.len() > 2 {
        println!("{USAGE}");
        return Ok(());
    }

    // --- 2. Detector Configuration ---
    let config = match &config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<DetectorConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => DetectorConfig::default(),
    };
    let detector = MotionDetector::new(config)?;
    info!(
        "kernel {}x{}, threshold {}",
        config.kernel_size, config.kernel_size, config.difference_threshold
    );

    // --- 3. Image Loading ---
    let current_image = image_helper::load_gray(&images[0])
        .with_context(|| format!("loading {}", images[0]))?;
    let previous_image = match images.get(1) {
        Some(path) => {
            Some(image_helper::load_gray(path).with_context(|| format!("loading {path}"))?)
        }
        None => None,
    };

    // --- 4. Detection ---
    let current = Frame::try_from(&current_image)?;
    let detection = match &previous_image {
        Some(previous_image) => {
            let previous = Frame::try_from(previous_image)?;
            detector.detect((current, previous))?
        }
        None => detector.detect(current)?,
    };

    if detection.has_motion() {
        info!(
            "{} moving pixels, centroid ({:.2}, {:.2})",
            detection.moving_pixels, detection.x, detection.y
        );
    } else {
        info!("no motion found");
    }
    println!("{} {} {}", detection.x, detection.y, detection.fraction_moving);

    // --- 5. Overlay Output ---
    if let Some(path) = overlay_path {
        image_helper::save_overlay(&path, &current, &detection)
            .with_context(|| format!("writing overlay {path}"))?;
        info!("overlay saved to {path}");
    }

    Ok(())
}
