//! **Stylistic droplet** profiles for solids of revolution.
//!
//! A droplet outline is drawn by travelling along a curve whose curvature starts
//! at one and decays linearly over a chosen number of steps, then keeps going the
//! other way. The [`curve`] integrator samples that path, [`profile`] cuts off the
//! part that crosses the axis of revolution and closes it back onto the axis, and
//! [`io`] writes the result as an OpenSCAD `rotate_extrude` of a `polygon`.
//!
//! ```
//! use droplet::{Curve, DropletParams, IntegratorConfig, Profile, ScadOptions};
//!
//! let params = DropletParams::default(); // -90 10 64, hanging by a thread
//! let curve = Curve::from_params(&params, &IntegratorConfig::default());
//! let profile = Profile::from_curve(&curve);
//! let scad = profile.to_scad(&params, &ScadOptions::default());
//! assert!(scad.starts_with("// droplet -90 10 64\nrotate_extrude($fn=60)\n"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod curve;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod params;
pub mod profile;

pub use curve::{Curve, IntegratorConfig};
pub use errors::ParamError;
pub use io::ScadOptions;
pub use params::{DropletParams, Preset};
pub use profile::Profile;
