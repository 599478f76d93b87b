//! This module handles the errors that a [`Configuration`](crate::Configuration) can produce.

use crate::Value;
use thiserror::Error;

/// An error caused by violating a configuration's declared contract.
///
/// Both variants indicate an authoring bug rather than a recoverable runtime condition: widgets
/// are built from the same declarations as the store, so a correctly assembled control panel can
/// never trigger either of them.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The given name has no corresponding [`Parameter`](crate::Parameter) declaration.
    #[error("no parameter named {0:?} has been declared")]
    UnknownParameter(String),

    /// The given value is outside the declared set for a boolean, colour, or enumerated
    /// parameter, or doesn't match the parameter's kind at all.
    ///
    /// Out-of-bounds *numeric* values are never an error; they get clamped instead, because
    /// slider gestures can transiently overshoot their bounds mid-drag.
    #[error("invalid value {value:?} for parameter {name:?}: {reason}")]
    InvalidValue {
        /// The name of the parameter being set.
        name: String,

        /// The rejected value.
        value: Value,

        /// Why the value was rejected.
        reason: &'static str,
    },
}
