//! Run parameters: start direction, ramp length and iteration count.
//!
//! Command-line text is read the forgiving way: the longest numeric prefix wins
//! and anything unparseable becomes `0`, so `"12abc"` is `12` and `"south"` is `0`.

use crate::errors::ParamError;
use crate::float_types::Real;

/// The three knobs that shape a droplet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropletParams {
    /// Initial heading in degrees. `-90` points due south, `0` due east.
    pub start_direction: Real,
    /// Number of steps over which the unit curvature decays to zero.
    /// Past that point the curve keeps turning, the other way.
    pub ramp_length: Real,
    /// Number of segments to draw, as given. See [`Self::effective_iterations`].
    pub iterations: i64,
}

impl Default for DropletParams {
    fn default() -> Self {
        Preset::Hanging.params()
    }
}

impl DropletParams {
    pub const fn new(start_direction: Real, ramp_length: Real, iterations: i64) -> Self {
        Self {
            start_direction,
            ramp_length,
            iterations,
        }
    }

    /// Replace each field for which an override is present.
    pub fn with_overrides(
        self,
        start_direction: Option<Real>,
        ramp_length: Option<Real>,
        iterations: Option<i64>,
    ) -> Self {
        Self {
            start_direction: start_direction.unwrap_or(self.start_direction),
            ramp_length: ramp_length.unwrap_or(self.ramp_length),
            iterations: iterations.unwrap_or(self.iterations),
        }
    }

    /// Apply positional command-line values in order: start direction, ramp length,
    /// iteration count. Each one is parsed leniently; values past the third are ignored.
    pub fn with_positional_args<S: AsRef<str>>(self, args: &[S]) -> Self {
        self.with_overrides(
            args.first().map(|s| parse_lenient_real(s.as_ref())),
            args.get(1).map(|s| parse_lenient_real(s.as_ref())),
            args.get(2).map(|s| parse_lenient_count(s.as_ref())),
        )
    }

    /// Number of integration steps actually taken. Negative counts run no steps.
    pub fn effective_iterations(&self) -> usize {
        if self.iterations <= 0 {
            0
        } else {
            usize::try_from(self.iterations).unwrap_or(usize::MAX)
        }
    }

    /// Report inputs that would produce a degenerate curve.
    ///
    /// The integrator never calls this; NaN and infinity are allowed to reach the
    /// output. Callers that would rather fail early opt in here.
    pub fn check(&self) -> Result<(), ParamError> {
        if !self.start_direction.is_finite() {
            return Err(ParamError::NonFiniteStartDirection(self.start_direction));
        }
        if !self.ramp_length.is_finite() {
            return Err(ParamError::NonFiniteRampLength(self.ramp_length));
        }
        if self.ramp_length == 0.0 {
            return Err(ParamError::ZeroRampLength);
        }
        if self.iterations < 0 {
            return Err(ParamError::NegativeIterations(self.iterations));
        }
        Ok(())
    }
}

/// Named parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    /// Hanging by a thread: `-90 10 64`
    #[default]
    Hanging,
    /// Start of a drip: `0 46.5 64`
    StartDrip,
    /// Mid drip: `0 52 64`
    MidDrip,
    /// Close to spherical: `0 999 64`
    Spherical,
    /// Vase: `0 43 74`
    Vase,
}

impl Preset {
    pub const fn params(self) -> DropletParams {
        match self {
            Preset::Hanging => DropletParams::new(-90.0, 10.0, 64),
            Preset::StartDrip => DropletParams::new(0.0, 46.5, 64),
            Preset::MidDrip => DropletParams::new(0.0, 52.0, 64),
            Preset::Spherical => DropletParams::new(0.0, 999.0, 64),
            Preset::Vase => DropletParams::new(0.0, 43.0, 74),
        }
    }
}

/// Parse a real number from the longest valid prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign, decimal digits with an
/// optional fraction and exponent, or `inf`/`infinity`/`nan` in any case. Returns
/// `0.0` when no prefix parses. Hexadecimal floats are not recognised.
pub fn parse_lenient_real(text: &str) -> Real {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let sign = &s[..pos];

    let rest = s[pos..].to_ascii_lowercase();
    for word in ["infinity", "inf", "nan"] {
        if rest.starts_with(word) {
            return format!("{sign}{word}").parse().unwrap_or(0.0);
        }
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return 0.0;
    }

    let mut exponent = "";
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos..end];
        }
    }

    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    let canonical = if frac_digits.is_empty() {
        format!("{sign}{int_digits}{exponent}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}{exponent}")
    };
    canonical.parse().unwrap_or(0.0)
}

/// Parse an integer from the longest run of leading digits in `text`.
///
/// Leading whitespace and one sign are accepted. Returns `0` when there are no
/// digits; values beyond the `i64` range saturate.
pub fn parse_lenient_count(text: &str) -> i64 {
    let s = text.trim_start();
    let mut chars = s.chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        },
        Some('+') => {
            chars.next();
            false
        },
        _ => false,
    };

    let mut value: i64 = 0;
    for digit in chars.map_while(|c| c.to_digit(10)) {
        let digit = i64::from(digit);
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
