//! Test support library
//! Provides helpers shared by the integration tests.
#![allow(dead_code)]

use droplet::float_types::Real;
use droplet::{Curve, DropletParams, IntegratorConfig, Profile, ScadOptions};

/// Integrate `params` with the default constants.
pub fn curve(start_direction: Real, ramp_length: Real, iterations: i64) -> Curve {
    let params = DropletParams::new(start_direction, ramp_length, iterations);
    Curve::from_params(&params, &IntegratorConfig::default())
}

/// Full OpenSCAD text for the given parameters with default options.
pub fn scad(start_direction: Real, ramp_length: Real, iterations: i64) -> String {
    let params = DropletParams::new(start_direction, ramp_length, iterations);
    let curve = Curve::from_params(&params, &IntegratorConfig::default());
    Profile::from_curve(&curve).to_scad(&params, &ScadOptions::default())
}

/// The vertex lines of a `polygon(...)` statement, without the brackets.
pub fn vertex_lines(scad: &str) -> Vec<String> {
    scad.lines()
        .skip_while(|line| *line != "polygon(")
        .skip(1)
        .take_while(|line| *line != "]);")
        .map(|line| {
            line.trim_start_matches(['[', ','])
                .trim_end_matches(']')
                .replace(['\t', '[', ']'], "")
        })
        .collect()
}

/// Parse one line from [`vertex_lines`] into its two coordinates.
pub fn parse_vertex(line: &str) -> (Real, Real) {
    let (x, y) = line.split_once(',').expect("vertex line has two coordinates");
    (
        x.parse().expect("x coordinate"),
        y.parse().expect("y coordinate"),
    )
}

/// Reference truncation: the longest run from index 1 with a non-negative radial
/// coordinate.
pub fn expected_kept(curve: &Curve) -> usize {
    curve.samples()[1..]
        .iter()
        .position(|s| !(s.position.x >= 0.0))
        .unwrap_or(curve.len() - 1)
}
