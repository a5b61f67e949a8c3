use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use trackball::{Surface, TrackballState};

/// Replays a drag gesture given as pointer coordinates
#[derive(Parser, Debug)]
#[command(version, about = "Virtual trackball rotation calculator")]
struct Args {
    /// Tracked surface width
    #[arg(long, short = 'W', default_value_t = 640.0)]
    width: f64,

    /// Tracked surface height
    #[arg(long, short = 'H', default_value_t = 480.0)]
    height: f64,

    /// Sphere radius, defaults to half the smaller surface dimension
    #[arg(long, short = 'r')]
    radius: Option<f64>,

    /// Pointer positions as X Y pairs; the first pair starts the drag
    #[arg(required = true, num_args = 2.., allow_negative_numbers = true)]
    coords: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.coords.len() % 2 != 0 {
        bail!("coordinates must come in X Y pairs, got {} values", args.coords.len());
    }

    let surface = Surface::new(args.width, args.height)?;
    let mut state = match args.radius {
        Some(radius) => TrackballState::new(surface, radius)?,
        None => TrackballState::inscribed(surface)?,
    };
    info!(
        "surface {}x{}, radius {}",
        surface.width(),
        surface.height(),
        state.radius()
    );

    let mut pairs = args.coords.chunks_exact(2);
    if let Some(&[x, y]) = pairs.next() {
        let p = state.project(x, y).context("invalid starting position")?;
        println!("start ({x}, {y}) -> [{:.6}, {:.6}, {:.6}]", p[0], p[1], p[2]);
    }

    for (step, pair) in pairs.enumerate() {
        let (x, y) = (pair[0], pair[1]);
        let rotation = state
            .drag(x, y)
            .with_context(|| format!("invalid position at step {}", step + 1))?;
        let [ax, ay, az] = rotation.axis;
        println!(
            "drag ({x}, {y}) -> axis [{ax:.6}, {ay:.6}, {az:.6}] angle {:.6} rad ({:.3} deg)",
            rotation.angle,
            rotation.angle.to_degrees()
        );
    }

    println!("orientation:");
    for row in state.orientation() {
        println!("  [{:>9.6}, {:>9.6}, {:>9.6}]", row[0], row[1], row[2]);
    }

    Ok(())
}
