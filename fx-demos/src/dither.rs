//! This module contains the dithered waves background demo.

use crate::{traits::private::Sealed, Demo};
use fx_config::{Gate, Parameter};
use fx_export::Snippet;
use fx_panel::PropRow;

/// The dithered waves background: a retro wave shader with optional mouse interaction.
///
/// The shader itself lives outside the gallery; this is the declaration of everything a user can
/// tune about it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Dither;

impl Sealed for Dither {}

impl Demo for Dither {
    fn demo_name() -> &'static str {
        "Dither"
    }

    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::color("waveColor", "Colors", [0.5, 0.5, 0.5]),
            Parameter::number("colorNum", "Color Intensity", 4., 2.5, 40., 0.1),
            Parameter::number("waveAmplitude", "Wave Amplitude", 0.3, 0., 1., 0.01),
            Parameter::number("waveFrequency", "Wave Frequency", 3., 0., 10., 0.1),
            Parameter::boolean("disableAnimation", "Disable Animation", false),
            Parameter::number("waveSpeed", "Wave Speed", 0.05, 0., 0.10, 0.01)
                .gated(Gate::RequiresFalse("disableAnimation".to_owned())),
            Parameter::boolean("enableMouseInteraction", "Mouse Interaction", true),
            Parameter::number("mouseRadius", "Mouse Radius", 0.3, 0., 2., 0.1)
                .gated(Gate::RequiresTrue("enableMouseInteraction".to_owned())),
        ]
    }

    fn prop_rows() -> &'static [PropRow] {
        &[
            PropRow {
                name: "waveSpeed",
                ty: "number",
                default: "0.05",
                description: "Speed of the wave animation.",
            },
            PropRow {
                name: "waveFrequency",
                ty: "number",
                default: "3",
                description: "Frequency of the wave pattern.",
            },
            PropRow {
                name: "waveAmplitude",
                ty: "number",
                default: "0.3",
                description: "Amplitude of the wave pattern.",
            },
            PropRow {
                name: "waveColor",
                ty: "[number, number, number]",
                default: "[0.5, 0.5, 0.5]",
                description: "Color of the wave, defined as an RGB array.",
            },
            PropRow {
                name: "colorNum",
                ty: "number",
                default: "4",
                description: "Number of colors to use in the dithering effect.",
            },
            PropRow {
                name: "pixelSize",
                ty: "number",
                default: "2",
                description: "Size of the pixels for the dithering effect.",
            },
            PropRow {
                name: "disableAnimation",
                ty: "boolean",
                default: "false",
                description: "Disable the wave animation when true.",
            },
            PropRow {
                name: "enableMouseInteraction",
                ty: "boolean",
                default: "true",
                description: "Enables mouse interaction to influence the wave effect.",
            },
            // The documented default diverges from the interactive default of 0.3. That's how
            // the demo was authored, so it's preserved as-is
            PropRow {
                name: "mouseRadius",
                ty: "number",
                default: "1",
                description: "Radius for the mouse interaction effect.",
            },
        ]
    }

    fn snippet() -> Snippet {
        Snippet {
            cli_command: "npx jsrepo add ui/Backgrounds/Dither",
            dependencies: &[
                "three",
                "postprocessing",
                "@react-three/fiber",
                "@react-three/postprocessing",
            ],
            usage: r#"<Dither
  waveColor={[0.5, 0.5, 0.5]}
  disableAnimation={false}
  enableMouseInteraction={true}
  mouseRadius={0.3}
  colorNum={4}
  waveAmplitude={0.3}
  waveFrequency={3}
  waveSpeed={0.05}
/>"#,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use fx_config::Value;
    use fx_panel::ControlBinding;

    #[test]
    fn wave_speed_scenario_test() {
        let mut config = Dither::configuration();

        config
            .set("waveSpeed", Value::Number(0.073))
            .expect("waveSpeed is declared");
        match config.get("waveSpeed") {
            Ok(&Value::Number(n)) => assert!(approx_eq!(f64, n, 0.07)),
            other => panic!("Expected a number, got {other:?}"),
        }
    }

    #[test]
    fn mouse_radius_gating_scenario_test() {
        let params = Dither::parameters();
        let radius_binding = ControlBinding::for_parameter(
            params
                .iter()
                .find(|param| param.name == "mouseRadius")
                .expect("mouseRadius is declared"),
        );
        let mut config = Dither::configuration();

        config
            .set("enableMouseInteraction", Value::Bool(false))
            .expect("enableMouseInteraction is declared");

        // A simulated drag on the disabled slider must not touch the configuration
        assert_eq!(radius_binding.apply(&mut config, Value::Number(1.7)), Ok(false));
        match config.get("mouseRadius") {
            Ok(&Value::Number(n)) => assert!(approx_eq!(f64, n, 0.3)),
            other => panic!("Expected a number, got {other:?}"),
        }
    }

    #[test]
    fn defaults_test() {
        let config = Dither::configuration();
        assert_eq!(config.get("waveColor"), Ok(&Value::Color([0.5, 0.5, 0.5])));
        assert_eq!(config.get("disableAnimation"), Ok(&Value::Bool(false)));
        assert_eq!(config.get("enableMouseInteraction"), Ok(&Value::Bool(true)));
        assert_eq!(config.params().len(), 8);
    }
}
