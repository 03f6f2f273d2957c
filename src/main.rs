use anyhow::{Context, Result};
use clap::Parser;
use cubic_drag::color_utils::parse_color_result;
use cubic_drag::{generate_svg, render_to_png, CurveFrame, EditScript, Style, DEFAULT_POINT_RADIUS, DEFAULT_STEP};
use palette::Srgba;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cubic-drag")]
#[command(about = "Replay drag gestures on a cubic Bezier and render the result", long_about = None)]
struct Args {
    /// JSON script with optional starting points and drag events
    /// (defaults to the built-in layout with no events)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,

    /// Output file path; .svg exports SVG, anything else PNG
    #[arg(short, long, value_name = "FILE", default_value = "curve.png")]
    output: PathBuf,

    /// Parametric step between curve samples, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,

    /// Control point radius; hit tests reach twice this far
    #[arg(long, default_value_t = DEFAULT_POINT_RADIUS)]
    point_radius: f64,

    /// Background color (#RRGGBB, #RRGGBBAA or "transparent")
    #[arg(long, value_parser = parse_color_result, default_value = "#ffffff")]
    background: Srgba<u8>,

    /// PNG compression quality (0-100)
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Output DPI for PNG (source is 96 DPI)
    #[arg(long)]
    dpi: Option<u32>,

    /// Do not draw the individual curve samples
    #[arg(long)]
    no_curve_points: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let script = match &args.script {
        Some(path) => {
            let json_content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read script file: {path:?}"))?;
            serde_json::from_str::<EditScript>(&json_content)
                .context("Failed to parse edit script JSON")?
        }
        None => EditScript::default(),
    };

    let (points, redraws) = script
        .replay(args.point_radius)
        .context("Failed to replay edit script")?;
    log::info!(
        "replayed {} events ({} redraws requested)",
        script.events.len(),
        redraws
    );

    let frame = CurveFrame::build(&points, args.step).context("Failed to sample curve")?;
    let style = Style {
        control_radius: args.point_radius,
        show_curve_points: !args.no_curve_points,
        ..Style::default()
    };

    let extension = args
        .output
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match extension.to_lowercase().as_str() {
        "svg" => {
            let svg_content = generate_svg(&frame, &style, Some(args.background));
            fs::write(&args.output, svg_content)
                .with_context(|| format!("Failed to write SVG file: {:?}", args.output))?;
        }
        _ => {
            render_to_png(&frame, &style, &args.output, Some(args.background), args.quality, args.dpi)
                .with_context(|| format!("Failed to render PNG: {:?}", args.output))?;
        }
    }

    log::info!("wrote {}", args.output.display());

    Ok(())
}
