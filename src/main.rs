//! droplet - draw a stylistic droplet profile as OpenSCAD source.
//!
//! ```text
//! droplet > droplet.scad            # -90 10 64, hanging by a thread
//! droplet 0 46.5 64 > drip.scad     # start drip
//! droplet --preset vase > vase.scad
//! ```

#![deny(clippy::unwrap_used)]

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use droplet::{Curve, IntegratorConfig, Preset, Profile, ScadOptions};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "droplet", version)]
#[command(about = "Draw a stylistic droplet profile using varying curvature")]
#[command(long_about = "
Draw a stylistic droplet profile using varying curvature.

Starting at the origin with unit curvature, the curve turns a little less at
every step until, after RAMP_LENGTH steps, it runs straight and then bends the
other way. The part of the curve on the positive side of the axis is closed
back onto the axis and written as an OpenSCAD rotate_extrude of a polygon.

Numbers are read leniently: text that does not start with a number counts as 0,
and values that start with '-', such as -.5 or -12abc, are not taken as flags.
")]
struct Cli {
    /// START_DIRECTION in degrees (-90 due south, 0 due east), RAMP_LENGTH in steps
    /// over which unit curvature is reduced to zero, ITERATIONS to draw. Flags go
    /// before these values; anything after the third value is ignored.
    #[arg(
        value_name = "VALUES",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    positional: Vec<String>,

    /// Named parameter set; positional values override its fields
    #[arg(long, value_enum, default_value_t = Preset::Hanging)]
    preset: Preset,

    /// Write to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Refuse a zero ramp length, non-finite numbers and negative iteration counts
    #[arg(long)]
    strict: bool,

    /// Verbose logging on standard error
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("droplet={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = cli.preset.params().with_positional_args(cli.positional.as_slice());

    match params.check() {
        Err(error) if cli.strict => {
            return Err(error).context("parameter check failed");
        },
        Err(error) => debug!(%error, "continuing with degenerate parameters"),
        Ok(()) => {},
    }

    let curve = Curve::from_params(&params, &IntegratorConfig::default());
    let profile = Profile::from_curve(&curve);
    debug!(
        vertices = profile.vertex_count(),
        area = profile.area(),
        "profile ready"
    );

    let options = ScadOptions::default();
    let written = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            droplet::io::write_scad(&mut BufWriter::new(file), &params, &profile, &options)
        },
        None => droplet::io::write_scad(&mut io::stdout().lock(), &params, &profile, &options),
    };

    // A failed write still ends the run normally.
    if let Err(error) = written {
        warn!(%error, "failed to write OpenSCAD output");
    }

    Ok(())
}
