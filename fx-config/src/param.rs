//! This module handles the declarations of tunable parameters.

use crate::{ConfigError, Configuration};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// The current value of a single parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A numeric value. Always within the bounds declared by its
    /// [`ParamKind::Number`].
    Number(f64),

    /// A boolean toggle.
    Bool(bool),

    /// An RGB colour triplet with each channel in `[0, 1]`.
    Color([f32; 3]),

    /// One of a declared set of string options.
    Choice(String),
}

impl Value {
    /// Compare two values for equality within floating point tolerance.
    ///
    /// Stepping a number to a multiple of its step size accumulates floating point error, so
    /// exact comparison would report spurious changes when a value is set to itself.
    pub fn approx_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => (a - b).abs() <= 1e-9,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => {
                a.iter().zip(b).all(|(x, y)| (x - y).abs() <= 1e-6)
            }
            (Self::Choice(a), Self::Choice(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Color([r, g, b]) => write!(f, "[{r:.2}, {g:.2}, {b:.2}]"),
            Self::Choice(s) => write!(f, "{s}"),
        }
    }
}

/// The semantic type of a parameter, including its declared bounds where applicable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamKind {
    /// A number bounded to `[min, max]` and stepped to multiples of `step` from `min`.
    ///
    /// A non-positive `step` means the value is continuous within its bounds.
    Number {
        /// The inclusive lower bound.
        min: f64,

        /// The inclusive upper bound.
        max: f64,

        /// The step size, measured from `min`.
        step: f64,
    },

    /// A boolean toggle.
    Bool,

    /// An RGB colour triplet, each channel clamped to `[0, 1]`.
    Color,

    /// One of a fixed set of string options.
    Choice {
        /// The allowed options, in display order.
        options: Vec<String>,
    },
}

/// A declarative dependency between two parameters.
///
/// A gated parameter's widget is disabled while the gate evaluates false, which blocks
/// gesture-to-mutation translation but not display. The only predicate shapes needed are "that
/// boolean is on" and "that boolean is off", so this is a closed enum rather than a boxed
/// closure, which keeps it serializable and comparable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// The named boolean parameter must currently be true.
    RequiresTrue(String),

    /// The named boolean parameter must currently be false.
    RequiresFalse(String),
}

impl Gate {
    /// Evaluate this gate against the current configuration.
    ///
    /// A gate that names an undeclared or non-boolean parameter is an authoring bug; it gets
    /// logged and evaluates as open so the widget stays usable.
    pub fn admits(&self, config: &Configuration) -> bool {
        let (name, wanted) = match self {
            Self::RequiresTrue(name) => (name, true),
            Self::RequiresFalse(name) => (name, false),
        };

        match config.get(name) {
            Ok(Value::Bool(current)) => *current == wanted,
            Ok(other) => {
                warn!(%name, ?other, "Gate depends on a non-boolean parameter");
                true
            }
            Err(error) => {
                warn!(%name, %error, "Gate depends on an undeclared parameter");
                true
            }
        }
    }
}

/// The declaration of a single named, typed, tunable value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The name used to address this parameter in the configuration.
    pub name: String,

    /// The human-readable label shown next to this parameter's widget.
    pub label: String,

    /// The semantic type and bounds of this parameter.
    pub kind: ParamKind,

    /// The value this parameter starts at and resets to.
    pub default: Value,

    /// An optional dependency on another parameter which must hold for this parameter's widget
    /// to be enabled.
    pub gate: Option<Gate>,
}

impl Parameter {
    /// Declare a numeric parameter with the given bounds.
    pub fn number(
        name: impl Into<String>,
        label: impl Into<String>,
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ParamKind::Number { min, max, step },
            default: Value::Number(default),
            gate: None,
        }
    }

    /// Declare a boolean parameter.
    pub fn boolean(name: impl Into<String>, label: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ParamKind::Bool,
            default: Value::Bool(default),
            gate: None,
        }
    }

    /// Declare an RGB colour parameter.
    pub fn color(name: impl Into<String>, label: impl Into<String>, default: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ParamKind::Color,
            default: Value::Color(default),
            gate: None,
        }
    }

    /// Declare an enumerated string parameter with the given options.
    pub fn choice(
        name: impl Into<String>,
        label: impl Into<String>,
        default: &str,
        options: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ParamKind::Choice {
                options: options.iter().map(|&option| option.to_owned()).collect(),
            },
            default: Value::Choice(default.to_owned()),
            gate: None,
        }
    }

    /// Attach a [`Gate`] to this parameter.
    pub fn gated(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Validate a raw value against this parameter's declaration and return the value that
    /// should actually be stored.
    ///
    /// Numbers are clamped to `[min, max]` and rounded to the nearest multiple of `step` from
    /// `min`; colour channels are clamped to `[0, 1]`. Booleans and choices are either valid or
    /// rejected with [`ConfigError::InvalidValue`], as is any value whose type doesn't match the
    /// declared kind.
    pub fn conform(&self, raw: Value) -> Result<Value, ConfigError> {
        match (&self.kind, raw) {
            (&ParamKind::Number { min, max, step }, Value::Number(value)) => {
                Ok(Value::Number(clamp_and_step(value, min, max, step)))
            }
            (ParamKind::Bool, Value::Bool(value)) => Ok(Value::Bool(value)),
            (ParamKind::Color, Value::Color(channels)) => Ok(Value::Color(
                channels.map(|channel| channel.clamp(0., 1.)),
            )),
            (ParamKind::Choice { options }, Value::Choice(value)) => {
                if options.iter().any(|option| *option == value) {
                    Ok(Value::Choice(value))
                } else {
                    Err(ConfigError::InvalidValue {
                        name: self.name.clone(),
                        value: Value::Choice(value),
                        reason: "not one of the declared options",
                    })
                }
            }
            (_, raw) => Err(ConfigError::InvalidValue {
                name: self.name.clone(),
                value: raw,
                reason: "the value's type doesn't match the declared parameter kind",
            }),
        }
    }
}

/// Clamp the value to `[min, max]` and round it to the nearest multiple of `step` from `min`.
fn clamp_and_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let clamped = value.clamp(min, max);
    if step > 0. {
        // Stepping can push the value just past max, so clamp again
        (min + ((clamped - min) / step).round() * step).clamp(min, max)
    } else {
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn clamp_and_step_test() {
        // The wave speed scenario: raw gesture values snap to the nearest step
        assert!(approx_eq!(f64, clamp_and_step(0.073, 0., 0.10, 0.01), 0.07));
        assert!(approx_eq!(f64, clamp_and_step(0.075, 0., 0.10, 0.01), 0.08));

        // Out-of-bounds values clamp rather than error
        assert!(approx_eq!(f64, clamp_and_step(-3., 0., 0.10, 0.01), 0.));
        assert!(approx_eq!(f64, clamp_and_step(12., 0., 0.10, 0.01), 0.10));

        // Steps are measured from min, not from zero
        assert!(approx_eq!(f64, clamp_and_step(4.03, 2.5, 40., 0.1), 4.));
        assert!(approx_eq!(f64, clamp_and_step(4.08, 2.5, 40., 0.1), 4.1));

        // A non-positive step means the value is continuous
        assert!(approx_eq!(f64, clamp_and_step(0.073, 0., 0.10, 0.), 0.073));
    }

    #[test]
    fn conform_test() {
        let wave_speed = Parameter::number("waveSpeed", "Wave Speed", 0.05, 0., 0.10, 0.01);
        assert_eq!(
            wave_speed.conform(Value::Number(0.42)),
            Ok(Value::Number(0.10))
        );
        assert_eq!(
            wave_speed.conform(Value::Bool(true)),
            Err(ConfigError::InvalidValue {
                name: "waveSpeed".to_owned(),
                value: Value::Bool(true),
                reason: "the value's type doesn't match the declared parameter kind",
            })
        );

        let wave_color = Parameter::color("waveColor", "Colors", [0.5, 0.5, 0.5]);
        assert_eq!(
            wave_color.conform(Value::Color([-0.25, 0.5, 1.75])),
            Ok(Value::Color([0., 0.5, 1.]))
        );

        let ease = Parameter::choice("easeType", "Ease", "elastic", &["elastic", "bounce"]);
        assert_eq!(
            ease.conform(Value::Choice("bounce".to_owned())),
            Ok(Value::Choice("bounce".to_owned()))
        );
        assert_eq!(
            ease.conform(Value::Choice("linear".to_owned())),
            Err(ConfigError::InvalidValue {
                name: "easeType".to_owned(),
                value: Value::Choice("linear".to_owned()),
                reason: "not one of the declared options",
            })
        );
    }

    #[test]
    fn value_approx_eq_test() {
        // 7 * 0.01 is not exactly 0.07 in floating point
        assert!(Value::Number(7. * 0.01).approx_eq(&Value::Number(0.07)));
        assert!(!Value::Number(0.07).approx_eq(&Value::Number(0.08)));
        assert!(!Value::Number(1.).approx_eq(&Value::Bool(true)));
        assert!(Value::Choice("a".to_owned()).approx_eq(&Value::Choice("a".to_owned())));
    }
}
