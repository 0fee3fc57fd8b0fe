use super::format::format_g;
use crate::curve::Curve;
use crate::params::DropletParams;
use crate::profile::Profile;
use std::io::{self, Write};
use tracing::info;

/// Fixed parts of the OpenSCAD output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScadOptions {
    /// Name written in the leading comment.
    pub tool_name: String,
    /// `$fn` of the `rotate_extrude`, i.e. facets per full revolution.
    pub facets: u32,
}

impl Default for ScadOptions {
    fn default() -> Self {
        Self {
            tool_name: "droplet".to_string(),
            facets: 60,
        }
    }
}

/// Write `profile` as an OpenSCAD solid of revolution.
///
/// ```text
/// // droplet -90 10 64
/// rotate_extrude($fn=60)
/// polygon(
/// [[0,0]
/// ,[5.34353e-18\t,-0.0872665\t]
/// ,[0.00760577\t,-0.174201\t]
/// ...
/// ,[0.0721279\t,-2.43862\t]
/// ,[0,-2.43862]
/// ]);
/// ```
///
/// The header carries the parameters as given, so a negative iteration count is
/// printed even though no steps were run for it. The writer is flushed before
/// returning.
pub fn write_scad<W: Write>(
    writer: &mut W,
    params: &DropletParams,
    profile: &Profile,
    options: &ScadOptions,
) -> io::Result<()> {
    writeln!(
        writer,
        "// {} {} {} {}",
        options.tool_name,
        format_g(params.start_direction),
        format_g(params.ramp_length),
        params.iterations
    )?;
    writeln!(writer, "rotate_extrude($fn={})", options.facets)?;
    writeln!(writer, "polygon(")?;
    writeln!(writer, "[[0,{}]", format_g(profile.start().y))?;
    for p in profile.kept() {
        writeln!(writer, ",[{}\t,{}\t]", format_g(p.x), format_g(p.y))?;
    }
    writeln!(writer, ",[0,{}]", format_g(profile.closure().y))?;
    writeln!(writer, "]);")?;
    writer.flush()?;

    info!(
        vertices = profile.vertex_count(),
        tip = profile.closure().y,
        "wrote OpenSCAD profile"
    );
    Ok(())
}

/// Cut the profile from `curve` and write it to `writer`.
pub fn emit<W: Write>(
    curve: &Curve,
    params: &DropletParams,
    options: &ScadOptions,
    mut writer: W,
) -> io::Result<()> {
    let profile = Profile::from_curve(curve);
    write_scad(&mut writer, params, &profile, options)
}

/// Convert `profile` to an OpenSCAD source string.
pub fn to_scad_string(params: &DropletParams, profile: &Profile, options: &ScadOptions) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_scad(&mut out, params, profile, options);
    String::from_utf8_lossy(&out).into_owned()
}

impl Profile {
    pub fn to_scad(&self, params: &DropletParams, options: &ScadOptions) -> String {
        self::to_scad_string(params, self, options)
    }
}
