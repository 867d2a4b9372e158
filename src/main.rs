use solsim::{Frame, Scenario, ScenarioConfig, ViewContext, DAY};
use solsim::{bench_gravity, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless solar-system run: steps the simulation and prints frame readouts")]
struct Args {
    /// Scenario file, looked up under the crate's `scenarios/` directory
    #[arg(short, long, default_value = "solar_system.yaml")]
    file_name: String,

    /// Ignore `--file-name` and use the built-in Sun + eight planets roster
    #[arg(long)]
    builtin: bool,

    /// Number of ticks (simulated days by default) to run
    #[arg(short = 'n', long, default_value_t = 365)]
    steps: u64,

    /// Print a frame readout every this many ticks (0 = only at the end)
    #[arg(long, default_value_t = 30)]
    report_every: u64,

    /// Wheel events applied before the run; negative zooms out
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    zoom: i32,

    /// Window width, recentres the view
    #[arg(long)]
    width: Option<f64>,

    /// Window height, recentres the view
    #[arg(long)]
    height: Option<f64>,

    /// Run the timing helpers instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    if args.builtin {
        return Ok(ScenarioConfig::solar_system());
    }

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn report(frame: &Frame) {
    println!("t = {:.0} d", frame.t / DAY);
    for s in &frame.sprites {
        println!(
            "  {:<10} ({:>9.1}, {:>9.1}) trail {:>5}  {}",
            s.name,
            s.center.x,
            s.center.y,
            s.trail.len(),
            s.label.as_deref().unwrap_or("")
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let (mut sim, mut view) = Scenario::build_scenario(scenario_cfg)?.into_parts();

    if args.width.is_some() || args.height.is_some() {
        let current = view.context();
        view.resize(ViewContext {
            width: args.width.unwrap_or(current.width),
            height: args.height.unwrap_or(current.height),
        })?;
    }

    for _ in 0..args.zoom.unsigned_abs() {
        view.zoom(args.zoom.signum());
    }

    info!("running {} ticks", args.steps);
    for tick in 1..=args.steps {
        sim.step().with_context(|| format!("tick {tick} failed"))?;

        if args.report_every > 0 && tick % args.report_every == 0 && tick != args.steps {
            report(&Frame::capture(&sim.system, &view));
        }
    }

    report(&Frame::capture(&sim.system, &view));
    Ok(())
}
