//! This module handles the binding between one parameter and one widget.

use fx_config::{ConfigError, Configuration, ParamKind, Parameter, Value};
use tracing::debug;

/// The widget used to edit one parameter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WidgetKind {
    /// A draggable slider for numeric parameters.
    Slider,

    /// A checkbox for boolean parameters.
    Checkbox,

    /// A colour picker button for colour parameters.
    ColorButton,

    /// A combo box for enumerated parameters.
    ComboBox,
}

/// The association between one parameter and the widget that edits it.
///
/// All gesture-to-mutation translation goes through [`apply`](ControlBinding::apply), so the
/// gating rule (a disabled widget swallows gestures without touching the configuration) holds
/// for every widget type and is testable without a GUI harness.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControlBinding {
    /// The name of the bound parameter.
    name: String,

    /// The widget used to edit the bound parameter.
    widget: WidgetKind,
}

impl ControlBinding {
    /// Bind the appropriate widget kind for the given parameter declaration.
    pub fn for_parameter(param: &Parameter) -> Self {
        let widget = match param.kind {
            ParamKind::Number { .. } => WidgetKind::Slider,
            ParamKind::Bool => WidgetKind::Checkbox,
            ParamKind::Color => WidgetKind::ColorButton,
            ParamKind::Choice { .. } => WidgetKind::ComboBox,
        };

        Self {
            name: param.name.clone(),
            widget,
        }
    }

    /// The name of the bound parameter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The widget kind bound to the parameter.
    pub fn widget(&self) -> WidgetKind {
        self.widget
    }

    /// Whether this binding's widget should currently accept gestures.
    pub fn is_enabled(&self, config: &Configuration) -> bool {
        match config.enabled(&self.name) {
            Ok(enabled) => enabled,
            Err(error) => {
                debug_assert!(false, "Binding references an undeclared parameter: {error}");
                false
            }
        }
    }

    /// Translate a gesture on this binding's widget into a configuration mutation.
    ///
    /// While the binding is disabled by its parameter's gate, the gesture is swallowed and the
    /// configuration is untouched. Returns whether the stored value changed.
    pub fn apply(&self, config: &mut Configuration, raw: Value) -> Result<bool, ConfigError> {
        if !self.is_enabled(config) {
            debug!(name = %self.name, "Gesture on a disabled binding, ignoring");
            return Ok(false);
        }

        config.set(&self.name, raw)
    }

    /// Toggle a boolean parameter, the gesture a checkbox activation produces.
    pub fn toggle(&self, config: &mut Configuration) -> Result<bool, ConfigError> {
        let current = match config.get(&self.name)? {
            &Value::Bool(b) => b,
            other => {
                return Err(ConfigError::InvalidValue {
                    name: self.name.clone(),
                    value: other.clone(),
                    reason: "only boolean parameters can be toggled",
                })
            }
        };

        self.apply(config, Value::Bool(!current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use fx_config::Gate;

    fn mouse_params() -> Vec<Parameter> {
        vec![
            Parameter::boolean("enableMouseInteraction", "Mouse Interaction", false),
            Parameter::number("mouseRadius", "Mouse Radius", 0.3, 0., 2., 0.1)
                .gated(Gate::RequiresTrue("enableMouseInteraction".to_owned())),
        ]
    }

    fn get_number(config: &Configuration, name: &str) -> f64 {
        match config.get(name) {
            Ok(&Value::Number(n)) => n,
            other => panic!("Expected a number for {name:?}, got {other:?}"),
        }
    }

    #[test]
    fn widget_kind_test() {
        let params = mouse_params();
        assert_eq!(
            ControlBinding::for_parameter(&params[0]).widget(),
            WidgetKind::Checkbox
        );
        assert_eq!(
            ControlBinding::for_parameter(&params[1]).widget(),
            WidgetKind::Slider
        );
    }

    #[test]
    fn disabled_binding_swallows_gestures_test() {
        let params = mouse_params();
        let radius_binding = ControlBinding::for_parameter(&params[1]);
        let mut config = Configuration::new(params);

        // Mouse interaction starts disabled, so a simulated drag does nothing
        assert!(!radius_binding.is_enabled(&config));
        assert_eq!(radius_binding.apply(&mut config, Value::Number(1.7)), Ok(false));
        assert!(approx_eq!(f64, get_number(&config, "mouseRadius"), 0.3));

        // Once the gate opens, the same drag lands (and still gets clamped by the store)
        config
            .set("enableMouseInteraction", Value::Bool(true))
            .expect("enableMouseInteraction is declared");
        assert!(radius_binding.is_enabled(&config));
        assert_eq!(radius_binding.apply(&mut config, Value::Number(2.5)), Ok(true));
        assert!(approx_eq!(f64, get_number(&config, "mouseRadius"), 2.));
    }

    #[test]
    fn toggle_test() {
        let params = mouse_params();
        let toggle_binding = ControlBinding::for_parameter(&params[0]);
        let mut config = Configuration::new(params);

        assert_eq!(toggle_binding.toggle(&mut config), Ok(true));
        assert_eq!(config.get("enableMouseInteraction"), Ok(&Value::Bool(true)));
        assert_eq!(toggle_binding.toggle(&mut config), Ok(true));
        assert_eq!(config.get("enableMouseInteraction"), Ok(&Value::Bool(false)));
    }

    #[test]
    fn toggle_non_boolean_test() {
        let params = mouse_params();
        let radius_binding = ControlBinding::for_parameter(&params[1]);
        let mut config = Configuration::new(params);
        config
            .set("enableMouseInteraction", Value::Bool(true))
            .expect("enableMouseInteraction is declared");

        assert!(radius_binding.toggle(&mut config).is_err());
    }
}
