#![deny(unsafe_code)]
//! CLI binary for the sierpinski chaos-game renderer.
//!
//! Subcommands:
//! - `render` — draw one shape (or all three) and write a PNG, optionally
//!   with a parameter log
//! - `points <shape>` — print generated coordinates
//! - `list` — print available shapes and selections

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use log::{debug, info};
use sierpinski_core::run::{DEFAULT_HEIGHT, DEFAULT_POINTS, DEFAULT_WIDTH};
use sierpinski_core::{generate_with, RunParams, Selection, Shape, Srgb, Xorshift64};
use sierpinski_render::output::{save, DEFAULT_IMAGES_DIR, DEFAULT_LOGS_DIR};
use sierpinski_render::OutputDirs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "sierpinski", about = "Sierpinski fractals via the chaos game")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one shape, or all three side by side, to a PNG.
    Render {
        /// Shape to draw: triangle, diamond, tetrahedron or all.
        #[arg(short, long, default_value = "all")]
        shape: String,

        /// Points per shape (diamond draws twice as many).
        #[arg(short, long, default_value_t = DEFAULT_POINTS)]
        points: usize,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        /// Point color as "#rrggbb" or "r,g,b" with components in [0, 1].
        #[arg(long, default_value = "0,0,1")]
        point_color: String,

        /// Background color as "#rrggbb" or "r,g,b" with components in [0, 1].
        #[arg(long, default_value = "1,1,1")]
        bg_color: String,

        /// PRNG seed; omit for a different fractal sample every run.
        #[arg(long)]
        seed: Option<u64>,

        /// PNG file name (placed in the images directory).
        #[arg(short, long, default_value = "fractal.png")]
        output: PathBuf,

        /// Directory images are written to.
        #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
        images_dir: PathBuf,

        /// Directory parameter logs are written to.
        #[arg(long, default_value = DEFAULT_LOGS_DIR)]
        logs_dir: PathBuf,

        /// Also write a plain-text parameter log next to the image.
        #[arg(long)]
        save_params: bool,
    },
    /// Print generated points, one per line.
    Points {
        /// Shape name (triangle, diamond, tetrahedron).
        shape: String,

        /// Number of points (diamond prints twice as many).
        #[arg(short, long, default_value_t = DEFAULT_POINTS)]
        points: usize,

        /// PRNG seed; omit for a different sample every run.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List available shapes and selections.
    List,
}

fn rng_for(seed: Option<u64>) -> Xorshift64 {
    match seed {
        Some(seed) => Xorshift64::new(seed),
        None => Xorshift64::from_entropy(),
    }
}

fn parse_color(flag: &str, value: &str) -> Result<Srgb, CliError> {
    value
        .parse()
        .map_err(|e| CliError::Input(format!("invalid --{flag}: {e}")))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let shapes = Shape::list_names();
            let selections = Selection::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "shapes": shapes,
                    "selections": selections,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Shapes:");
                for name in shapes {
                    println!("  {name}");
                }
                println!("Selections:");
                println!("  {}", selections.join(", "));
            }
        }
        Command::Points {
            shape,
            points,
            seed,
        } => {
            let shape = Shape::from_name(&shape)?;
            let generated = generate_with(shape, points, &mut rng_for(seed))?;
            debug!("generated {} {shape} points", generated.len());

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            if cli.json {
                serde_json::to_writer(&mut out, &generated)?;
                writeln!(out)?;
            } else {
                for row in generated.to_rows() {
                    let line: Vec<String> = row.iter().map(f64::to_string).collect();
                    writeln!(out, "{}", line.join(" "))?;
                }
            }
            out.flush()?;
        }
        Command::Render {
            shape,
            points,
            width,
            height,
            point_color,
            bg_color,
            seed,
            output,
            images_dir,
            logs_dir,
            save_params,
        } => {
            let params = RunParams {
                selection: Selection::from_name(&shape)?,
                points,
                point_color: parse_color("point-color", &point_color)?,
                bg_color: parse_color("bg-color", &bg_color)?,
                width,
                height,
            };
            params.validate()?;

            let dirs = OutputDirs {
                images: images_dir,
                logs: logs_dir,
            };
            let target = dirs.image_path(&output)?;
            dirs.create()?;

            info!(
                "rendering {} ({} points, {}x{})",
                params.selection, params.points, params.width, params.height
            );
            let raster = sierpinski_render::render(&params, &mut rng_for(seed))?;
            let saved = save(&raster, &params, &dirs, &target, save_params)?;

            if cli.json {
                let info = serde_json::json!({
                    "params": params,
                    "seed": seed,
                    "image": saved.image.display().to_string(),
                    "log": saved.log.as_ref().map(|p| p.display().to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}, {} points) -> {}",
                    params.selection,
                    params.width,
                    params.height,
                    params.points,
                    saved.image.display()
                );
                if let Some(log) = &saved.log {
                    eprintln!("parameters -> {}", log.display());
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
