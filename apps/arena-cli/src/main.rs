use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_camera::FpsCamera;
use arena_common::Tunables;
use arena_render::{DebugTextRenderer, Level, RenderView, Renderer};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod script;

use script::{FramePose, Script, Session};

#[derive(Parser)]
#[command(name = "arena-cli", about = "Headless host loop for the arena camera controller")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Tunables file (.yaml, .yml or .json); defaults are used when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info and the active tunables
    Info,
    /// Run a scripted input session and report the camera pose
    Simulate {
        /// Number of frames to run (defaults to the script length)
        #[arg(short, long)]
        frames: Option<u64>,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// YAML input script
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Print one JSON pose per frame instead of the final pose
        #[arg(long)]
        json: bool,
    },
    /// Jump from rest and trace the arc until landing
    Jump {
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Print every frame, not just the summary
        #[arg(long)]
        trace: bool,
    },
    /// Print a debug text render of the arena from the spawn pose
    Render {
        /// Viewport aspect ratio
        #[arg(long, default_value_t = RenderView::DEFAULT_ASPECT)]
        aspect: f32,
    },
}

fn load_tunables(path: Option<&PathBuf>) -> Result<Tunables> {
    match path {
        Some(path) => Tunables::from_path(path)
            .with_context(|| format!("loading tunables from {}", path.display())),
        None => Ok(Tunables::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let tunables = load_tunables(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("arena-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", arena_common::crate_info());
            println!("camera: {}", arena_camera::crate_info());
            println!("input: {}", arena_input::crate_info());
            println!("render: {}", arena_render::crate_info());
            println!("--- tunables ---");
            print!("{}", tunables.to_yaml_string()?);
        }
        Commands::Simulate {
            frames,
            dt,
            script,
            json,
        } => {
            anyhow::ensure!(dt >= 0.0 && dt.is_finite(), "dt must be a non-negative number");
            let script = match script {
                Some(path) => Script::load(&path)?,
                None => Script::default(),
            };
            let frames = frames.unwrap_or_else(|| script.frame_count());
            tracing::info!(frames, dt, "starting simulation");

            let mut session = Session::new(FpsCamera::new(tunables), script);
            let mut last = FramePose::capture(0, 0.0, &session.camera);
            for _ in 0..frames {
                last = session.step(dt);
                if json {
                    println!("{}", serde_json::to_string(&last)?);
                }
                if session.quit_requested() {
                    break;
                }
            }
            if !json {
                println!(
                    "frame={} t={:.3}s pos=({:.3}, {:.3}, {:.3}) yaw={:.2} pitch={:.2} zoom={:.1} airborne={} sprint={}",
                    last.frame,
                    last.time,
                    last.position[0],
                    last.position[1],
                    last.position[2],
                    last.yaw,
                    last.pitch,
                    last.zoom,
                    last.airborne,
                    last.sprint
                );
            }
        }
        Commands::Jump { dt, trace } => {
            anyhow::ensure!(dt > 0.0 && dt.is_finite(), "dt must be a positive number");
            let mut camera = FpsCamera::new(tunables);
            let ground = camera.position().y;
            camera.jump();

            let mut frames = 0u64;
            let mut apex = ground;
            while camera.is_airborne() {
                camera.update(dt);
                frames += 1;
                apex = apex.max(camera.position().y);
                if trace {
                    println!(
                        "{frames:>5} y={:.4} vy={:.4}",
                        camera.position().y,
                        camera.vertical_velocity()
                    );
                }
                anyhow::ensure!(frames < 1_000_000, "jump never landed");
            }
            println!(
                "apex={:.4} (+{:.4}) airtime={:.4}s frames={frames}",
                apex,
                apex - ground,
                frames as f32 * dt
            );
        }
        Commands::Render { aspect } => {
            anyhow::ensure!(aspect > 0.0, "aspect must be positive");
            let camera = FpsCamera::new(tunables);
            let view = RenderView::from_camera(&camera, aspect);
            print!("{}", DebugTextRenderer::new().render(&Level::arena(), &view));
        }
    }

    Ok(())
}
