//! This module handles rendering the whole control panel for a configuration.

use crate::ControlBinding;
use egui::Ui;
use fx_config::{Configuration, ParamKind, Value};
use tracing::error;

/// The set of bindings which edits one demo's configuration.
///
/// Exactly one widget is rendered per parameter, reflecting its current stored value. Gated
/// widgets are shown disabled (but still displayed) while their gate evaluates false.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControlPanel {
    /// One binding per parameter, in declaration order.
    bindings: Vec<ControlBinding>,
}

impl ControlPanel {
    /// Create a panel with one binding for each of the configuration's parameters.
    pub fn for_configuration(config: &Configuration) -> Self {
        Self {
            bindings: config
                .params()
                .iter()
                .map(ControlBinding::for_parameter)
                .collect(),
        }
    }

    /// The bindings of this panel, in declaration order.
    pub fn bindings(&self) -> &[ControlBinding] {
        &self.bindings
    }

    /// Render every widget plus a "Reset to defaults" button, pushing any gesture values into
    /// the configuration. Returns whether the configuration changed.
    pub fn render(&self, config: &mut Configuration, ui: &mut Ui) -> bool {
        let mut config_changed = false;

        for binding in &self.bindings {
            let Some(param) = config
                .params()
                .iter()
                .find(|param| param.name == binding.name())
                .cloned()
            else {
                debug_assert!(false, "Binding {:?} has no declaration", binding.name());
                continue;
            };

            let enabled = binding.is_enabled(config);
            let current = config
                .get(binding.name())
                .expect("Every binding comes from a declared parameter")
                .clone();

            match (&param.kind, current) {
                (&ParamKind::Number { min, max, step }, Value::Number(n)) => {
                    let mut value = n;
                    let slider = egui::Slider::new(&mut value, min..=max).text(&param.label);
                    let slider = if step > 0. { slider.step_by(step) } else { slider };

                    if ui.add_enabled(enabled, slider).changed() {
                        config_changed |= apply_gesture(binding, config, Value::Number(value));
                    }
                }
                (ParamKind::Bool, Value::Bool(b)) => {
                    let mut value = b;
                    let checkbox = egui::Checkbox::new(&mut value, &param.label);

                    if ui.add_enabled(enabled, checkbox).changed() {
                        config_changed |= apply_gesture(binding, config, Value::Bool(value));
                    }
                }
                (ParamKind::Color, Value::Color(c)) => {
                    let mut rgb = c;
                    let mut picked = false;

                    ui.add_enabled_ui(enabled, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(&param.label);
                            picked = ui.color_edit_button_rgb(&mut rgb).changed();
                        });
                    });

                    if picked {
                        config_changed |= apply_gesture(binding, config, Value::Color(rgb));
                    }
                }
                (ParamKind::Choice { options }, Value::Choice(current)) => {
                    let mut selected = current.clone();

                    ui.add_enabled_ui(enabled, |ui| {
                        egui::ComboBox::from_label(&param.label)
                            .selected_text(selected.clone())
                            .show_ui(ui, |ui| {
                                for option in options {
                                    ui.selectable_value(&mut selected, option.clone(), option);
                                }
                            });
                    });

                    if selected != current {
                        config_changed |= apply_gesture(binding, config, Value::Choice(selected));
                    }
                }
                (kind, value) => {
                    debug_assert!(
                        false,
                        "Stored value {value:?} doesn't match declared kind {kind:?}"
                    );
                }
            }
        }

        if ui.button("Reset to defaults").clicked() {
            config_changed |= config.reset();
        }

        config_changed
    }
}

/// Push a raw gesture value through the binding, logging the (authoring-bug) failure cases.
fn apply_gesture(binding: &ControlBinding, config: &mut Configuration, raw: Value) -> bool {
    match binding.apply(config, raw) {
        Ok(changed) => changed,
        Err(error) => {
            error!(%error, "Widget produced a value its own declaration rejects");
            debug_assert!(false, "Widget produced a rejected value: {error}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_config::{Gate, Parameter};

    #[test]
    fn one_binding_per_parameter_test() {
        let config = Configuration::new(vec![
            Parameter::boolean("enableHover", "Enable Hover Effect", false),
            Parameter::number("animationDelay", "Animation Delay", 1., 0.1, 2., 0.1),
            Parameter::number("animationStagger", "Animation Stagger", 0.08, 0., 0.3, 0.01),
        ]);
        let panel = ControlPanel::for_configuration(&config);

        assert_eq!(panel.bindings().len(), 3);
        assert_eq!(panel.bindings()[0].name(), "enableHover");
        assert_eq!(panel.bindings()[2].name(), "animationStagger");
    }

    #[test]
    fn bindings_preserve_gates_test() {
        let config = Configuration::new(vec![
            Parameter::boolean("disableAnimation", "Disable Animation", true),
            Parameter::number("waveSpeed", "Wave Speed", 0.05, 0., 0.10, 0.01)
                .gated(Gate::RequiresFalse("disableAnimation".to_owned())),
        ]);
        let panel = ControlPanel::for_configuration(&config);

        assert!(panel.bindings()[0].is_enabled(&config));
        assert!(!panel.bindings()[1].is_enabled(&config));
    }
}
