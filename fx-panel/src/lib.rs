//! This crate provides the egui control panel for demo configurations, along with the static
//! prop table renderer.
//!
//! The panel owns one [`ControlBinding`] per parameter. Widgets push *raw* gesture values
//! through [`ControlBinding::apply`] into the configuration store, which does all the clamping
//! and validation itself; the panel never duplicates that logic.

pub(crate) mod binding;
pub(crate) mod panel;
pub(crate) mod prop_table;

pub use self::{
    binding::{ControlBinding, WidgetKind},
    panel::ControlPanel,
    prop_table::{render_prop_table, PropRow},
};
