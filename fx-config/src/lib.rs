//! This crate provides the parameter declarations and the configuration store that every demo in
//! the gallery is built on.
//!
//! A demo declares its tunable parameters as a list of [`Parameter`]s and builds a
//! [`Configuration`] from them. The configuration is the single source of truth for the current
//! values: the control panel mutates it through [`Configuration::set`], and anything that needs to
//! react to a change (the effect renderer, the preview pane) subscribes to it and is notified
//! synchronously.

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod param;

pub use self::{
    config::Configuration,
    error::ConfigError,
    param::{Gate, ParamKind, Parameter, Value},
};
