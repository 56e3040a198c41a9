use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "motionblur", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the easing table keys.
    Easings,
    /// Print an easing as a CSS `linear(...)` curve.
    Linearize(LinearizeArgs),
    /// Run an animation on the headless host and print a JSON report.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct LinearizeArgs {
    /// Easing table key.
    #[arg(long, default_value = "easeOutExpo")]
    easing: String,

    /// Number of linear segments.
    #[arg(long, default_value_t = motionblur::DEFAULT_LINEAR_POINTS)]
    points: usize,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Options JSON (`durationMs`, `x`, `y`, `easing`, ...). Flags override its fields.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    #[arg(long)]
    duration_ms: Option<f64>,

    #[arg(long)]
    easing: Option<String>,

    /// Disable the blur side effect.
    #[arg(long)]
    no_blur: bool,

    /// Starting offset of the simulated element.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    from_x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    from_y: f64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(serde::Serialize, Debug)]
struct SimulateReport {
    options: motionblur::ResolvedOptions,
    frames: u64,
    start: motionblur::Vec2,
    end: motionblur::Vec2,
    positions: Vec<motionblur::Vec2>,
    blur: Vec<motionblur::BlurRadius>,
    /// Markup of the scope's blur filter after the run; absent with blur disabled.
    filter_svg: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Easings => cmd_easings(),
        Command::Linearize(args) => cmd_linearize(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_easings() -> anyhow::Result<()> {
    for ease in motionblur::Ease::ALL {
        println!("{ease}");
    }
    Ok(())
}

fn cmd_linearize(args: LinearizeArgs) -> anyhow::Result<()> {
    let ease = motionblur::Ease::from_name(&args.easing)?;
    println!("{}", ease.linearize(args.points));
    Ok(())
}

fn read_options_json(path: &Path) -> anyhow::Result<motionblur::MotionBlurOptions> {
    let f = File::open(path).with_context(|| format!("open options '{}'", path.display()))?;
    let r = BufReader::new(f);
    let opts = serde_json::from_reader(r).with_context(|| "parse options JSON")?;
    Ok(opts)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be a positive number");
    }

    let mut opts = match &args.in_path {
        Some(path) => read_options_json(path)?,
        None => motionblur::MotionBlurOptions::new(),
    };
    if args.x.is_some() {
        opts.x = args.x;
    }
    if args.y.is_some() {
        opts.y = args.y;
    }
    if args.duration_ms.is_some() {
        opts.duration_ms = args.duration_ms;
    }
    if let Some(easing) = args.easing {
        opts.easing = Some(easing);
    }
    if args.no_blur {
        opts.use_motion_blur = Some(false);
    }

    let doc = motionblur::HeadlessDocument::new();
    let frames = motionblur::SteppedFrames::at_fps(args.fps);
    let start = motionblur::Vec2::new(args.from_x, args.from_y);
    let element = doc.create_element(start);

    let resolved = opts.resolve()?;
    let animation = motionblur::motion_blur(&doc, &frames, element, &opts)?;
    let element = pollster::block_on(animation)?;

    let filter_svg = doc
        .scope(&resolved.doc_root)
        .filters
        .first()
        .map(motionblur::BlurFilterDef::to_svg);
    let report = SimulateReport {
        blur: doc.blur_history(&resolved.doc_root),
        filter_svg,
        options: resolved,
        frames: frames.delivered(),
        start,
        end: doc
            .offset(element)
            .context("simulated element disappeared")?,
        positions: doc.writes(element),
    };
    serde_json::to_writer_pretty(std::io::stdout().lock(), &report)
        .context("write simulation report")?;
    println!();
    Ok(())
}
