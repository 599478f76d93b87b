//! This module handles the [`Configuration`] store itself.

use crate::{ConfigError, Parameter, Value};
use std::{fmt, mem};
use tracing::{debug, trace};

/// A callback which gets run synchronously with the full configuration whenever a value changes.
pub type Listener = Box<dyn FnMut(&Configuration)>;

/// The single source of truth for the current values of one demo instance's parameters.
///
/// A configuration is created with its declared defaults when a demo mounts and dropped when the
/// demo unmounts; nothing is persisted across sessions. All mutation goes through [`set`]
/// (or [`reset`]), which enforces the declared bounds before storing anything, so every value in
/// the store satisfies its parameter's declaration at all times.
///
/// There is no history and no batching: the last write wins, and a single logical writer (the
/// control panel) mutates the store on UI event callbacks.
///
/// [`set`]: Configuration::set
/// [`reset`]: Configuration::reset
pub struct Configuration {
    /// The parameter declarations, in the order they were authored.
    params: Vec<Parameter>,

    /// The current value of each parameter, parallel to `params`.
    values: Vec<Value>,

    /// The subscribed observers, notified synchronously on every change.
    listeners: Vec<Listener>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("params", &self.params)
            .field("values", &self.values)
            .finish()
    }
}

impl Configuration {
    /// Create a new configuration holding the default value of every given parameter.
    ///
    /// # Panics
    ///
    /// Panics if a declared default doesn't satisfy its own parameter's declaration, or if two
    /// parameters share a name. Both are authoring bugs and should never survive development.
    pub fn new(params: Vec<Parameter>) -> Self {
        for (idx, param) in params.iter().enumerate() {
            assert!(
                !params[..idx].iter().any(|other| other.name == param.name),
                "Parameter names should be unique but {:?} is declared twice",
                param.name
            );
        }

        let values = params
            .iter()
            .map(|param| {
                param
                    .conform(param.default.clone())
                    .expect("Declared defaults should satisfy their own parameter declarations")
            })
            .collect();

        Self {
            params,
            values,
            listeners: Vec::new(),
        }
    }

    /// Get the parameter declarations, in authored order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Get the current value of the named parameter.
    pub fn get(&self, name: &str) -> Result<&Value, ConfigError> {
        self.index_of(name)
            .map(|idx| &self.values[idx])
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_owned()))
    }

    /// Set the named parameter to the given raw value and notify every listener.
    ///
    /// The raw value is passed through [`Parameter::conform`] first, so numeric gesture values
    /// are clamped and stepped here rather than by the widget that produced them. Listeners are
    /// only notified when the stored value actually changes; setting a parameter to its current
    /// value is a no-op. Returns whether the value changed.
    pub fn set(&mut self, name: &str, raw: Value) -> Result<bool, ConfigError> {
        let idx = self
            .index_of(name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_owned()))?;

        let conformed = self.params[idx].conform(raw)?;
        if self.values[idx].approx_eq(&conformed) {
            trace!(name, "Value unchanged, not notifying");
            return Ok(false);
        }

        trace!(name, %conformed, "Storing new value");
        self.values[idx] = conformed;
        self.notify();
        Ok(true)
    }

    /// Restore every parameter to its declared default.
    ///
    /// Listeners are notified once if anything changed at all. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let mut changed = false;

        for idx in 0..self.params.len() {
            let default = self.params[idx]
                .conform(self.params[idx].default.clone())
                .expect("Declared defaults should satisfy their own parameter declarations");

            if !self.values[idx].approx_eq(&default) {
                self.values[idx] = default;
                changed = true;
            }
        }

        if changed {
            debug!("Configuration reset to defaults");
            self.notify();
        }

        changed
    }

    /// Whether the named parameter's widget should currently accept gestures.
    ///
    /// A parameter with no [`Gate`](crate::Gate) is always enabled.
    pub fn enabled(&self, name: &str) -> Result<bool, ConfigError> {
        let idx = self
            .index_of(name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_owned()))?;

        Ok(self.params[idx]
            .gate
            .as_ref()
            .map_or(true, |gate| gate.admits(self)))
    }

    /// Flatten the configuration into the set of named arguments that gets handed to an effect
    /// renderer on every change.
    pub fn flatten(&self) -> Vec<(&str, Value)> {
        self.params
            .iter()
            .zip(&self.values)
            .map(|(param, value)| (param.name.as_str(), value.clone()))
            .collect()
    }

    /// Subscribe a listener which gets called synchronously, before the mutating call returns,
    /// every time a value changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&Configuration) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Run every listener with the current state of the configuration.
    fn notify(&mut self) {
        // The listeners only get a shared reference, so they can't re-enter `set`
        let mut listeners = mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener(&*self);
        }
        self.listeners = listeners;
    }

    /// Find the index of the named parameter.
    fn index_of(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param.name == name)
    }
}
