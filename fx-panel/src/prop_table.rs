//! This module handles the read-only prop documentation table shown under each demo.

use egui::{RichText, Ui};

/// One row of a demo's prop documentation.
///
/// Prop rows are authored alongside each demo, not derived from its configuration at runtime, so
/// the documented default can legitimately differ from the interactive one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PropRow {
    /// The prop name.
    pub name: &'static str,

    /// The prop's type, written the way the consuming code sees it.
    pub ty: &'static str,

    /// The documented default value.
    pub default: &'static str,

    /// A one-line description of the prop.
    pub description: &'static str,
}

/// Render a read-only documentation table for the given prop rows.
///
/// Purely presentational: no mutation, no validation.
pub fn render_prop_table(ui: &mut Ui, id: &str, rows: &[PropRow]) {
    egui::Grid::new(id).striped(true).show(ui, |ui| {
        ui.label(RichText::new("Name").strong());
        ui.label(RichText::new("Type").strong());
        ui.label(RichText::new("Default").strong());
        ui.label(RichText::new("Description").strong());
        ui.end_row();

        for row in rows {
            ui.monospace(row.name);
            ui.monospace(row.ty);
            ui.monospace(row.default);
            ui.label(row.description);
            ui.end_row();
        }
    });
}
