use crate::error::MorphkitError;

/// Reshapes the curve sample parameter before each De Casteljau step.
///
/// All variants fix `0` and `1`, so the endpoint guarantees of
/// [`crate::curve::sample_quadratic`] hold regardless of ease. `Linear` is
/// the identity and the default.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = MorphkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "quad-in" => Ok(Self::QuadIn),
            "quad-out" => Ok(Self::QuadOut),
            "quad-in-out" => Ok(Self::QuadInOut),
            "cubic-in" => Ok(Self::CubicIn),
            "cubic-out" => Ok(Self::CubicOut),
            "cubic-in-out" => Ok(Self::CubicInOut),
            other => Err(MorphkitError::validation(format!(
                "unknown ease '{other}'; expected linear, quad-in, quad-out, \
                 quad-in-out, cubic-in, cubic-out or cubic-in-out"
            ))),
        }
    }
}
