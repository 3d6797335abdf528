//! cavegen
//!
//! Generates one cave map and prints it as JSON (or ASCII) on stdout.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cave_core::export::map_output;
use cave_core::{GeneratorConfig, MapError, MapGenerator, MapOutput, rng_for};

/// Cave map generator
#[derive(Parser, Debug)]
#[command(name = "cavegen")]
#[command(author, version, about = "Generate a cave arena map", long_about = None)]
struct Args {
    /// Map width in cells, before the border
    #[arg(short = 'W', long = "width")]
    width: Option<u32>,

    /// Map height in cells, before the border
    #[arg(short = 'H', long = "height")]
    height: Option<u32>,

    /// Initial wall fill in percent
    #[arg(short = 'f', long = "fill")]
    fill: Option<u32>,

    /// RNG seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// TOML config file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the grid as ASCII instead of JSON
    #[arg(long = "ascii")]
    ascii: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Leave spawn points out of the output
    #[arg(long = "no-spawns")]
    no_spawns: bool,

    /// Include the raw triangle list
    #[arg(long = "triangles")]
    triangles: bool,

    /// Verbose logging (repeat for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// File config first, then command-line overrides
    fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                GeneratorConfig::from_toml_str(&text)?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fill) = self.fill {
            config.fill_percent = fill;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_spawns {
            config.spawn_points = 0;
        }
        if self.triangles {
            config.include_triangles = true;
        }
        Ok(config)
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.generator_config()?;
    let generator = MapGenerator::new(config)?;
    let config = generator.config();
    let mut rng = rng_for(config);
    log::info!(
        "generating {}x{} at {}% fill, seed {}",
        config.width,
        config.height,
        config.fill_percent,
        rng.seed()
    );

    let map = generator.generate(&mut rng)?;
    log::info!(
        "{} rooms, {} passages carved",
        map.rooms.len(),
        map.passages
    );

    if args.ascii {
        print!("{}", map.grid);
        return Ok(());
    }

    let output = map_output(
        &map.grid,
        config.spawn_points,
        config.include_triangles,
        &mut rng,
    );
    println!("{}", output.to_json(args.pretty)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            let output = match err.downcast_ref::<MapError>() {
                Some(map_err) => MapOutput::failure(map_err),
                None => MapOutput::error_message(format!("{err:#}")),
            };
            match output.to_json(args.pretty) {
                Ok(json) => println!("{json}"),
                Err(json_err) => eprintln!("{json_err}"),
            }
            ExitCode::FAILURE
        }
    }
}
