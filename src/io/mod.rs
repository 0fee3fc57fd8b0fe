//! Text export of droplet profiles.
//!
//! Only [OpenSCAD] is supported: a `rotate_extrude` wrapping a `polygon`.
//!
//! [OpenSCAD]: https://openscad.org/

mod format;
pub mod scad;

pub use format::{format_g, format_g_precision};
pub use scad::{ScadOptions, emit, to_scad_string, write_scad};
