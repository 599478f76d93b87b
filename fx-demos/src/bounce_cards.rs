//! This module contains the bouncing cards component demo.

use crate::{traits::private::Sealed, Demo};
use fx_config::Parameter;
use fx_export::Snippet;
use fx_panel::PropRow;

/// A stack of cards that springs into place with an elastic ease, optionally reacting to hover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BounceCards;

impl Sealed for BounceCards {}

impl Demo for BounceCards {
    fn demo_name() -> &'static str {
        "Bounce Cards"
    }

    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::boolean("enableHover", "Enable Hover Effect", false),
            Parameter::number("animationDelay", "Animation Delay", 1., 0.1, 2., 0.1),
            Parameter::number("animationStagger", "Animation Stagger", 0.08, 0., 0.3, 0.01),
        ]
    }

    fn prop_rows() -> &'static [PropRow] {
        &[
            PropRow {
                name: "className",
                ty: "string",
                default: "",
                description: "Additional CSS classes for the container.",
            },
            PropRow {
                name: "images",
                ty: "string[]",
                default: "[]",
                description: "Array of image URLs to display.",
            },
            PropRow {
                name: "containerWidth",
                ty: "number",
                default: "400",
                description: "Width of the container (px).",
            },
            PropRow {
                name: "containerHeight",
                ty: "number",
                default: "400",
                description: "Height of the container (px).",
            },
            PropRow {
                name: "animationDelay",
                ty: "number",
                default: "0.5",
                description: "Delay (in seconds) before the animation starts.",
            },
            PropRow {
                name: "animationStagger",
                ty: "number",
                default: "0.06",
                description: "Time (in seconds) between each card's animation.",
            },
            PropRow {
                name: "easeType",
                ty: "string",
                default: "elastic.out(1, 0.8)",
                description: "Easing function for the bounce.",
            },
            PropRow {
                name: "transformStyles",
                ty: "string[]",
                default: "various rotations/translations",
                description: "Custom transforms for each card position.",
            },
            PropRow {
                name: "enableHover",
                ty: "boolean",
                default: "false",
                description: "If true, hovering pushes siblings aside and flattens the hovered \
                              card's rotation.",
            },
        ]
    }

    fn snippet() -> Snippet {
        Snippet {
            cli_command: "npx jsrepo add ui/Components/BounceCards",
            dependencies: &["gsap"],
            usage: r#"<BounceCards
  className="custom-bounceCards"
  images={images}
  containerWidth={500}
  containerHeight={250}
  animationDelay={1}
  animationStagger={0.08}
  easeType="elastic.out(1, 0.5)"
  transformStyles={transformStyles}
  enableHover={false}
/>"#,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_config::{Configuration, Value};
    use fx_panel::ControlBinding;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn enable_hover_scenario_test() {
        let params = BounceCards::parameters();
        let hover_binding = ControlBinding::for_parameter(
            params
                .iter()
                .find(|param| param.name == "enableHover")
                .expect("enableHover is declared"),
        );
        let mut config = Configuration::new(params);

        let notifications = Rc::new(Cell::new(0_u32));
        config.subscribe({
            let notifications = Rc::clone(&notifications);
            move |_config| notifications.set(notifications.get() + 1)
        });

        // Toggling the hover switch updates the value and notifies exactly once
        assert_eq!(hover_binding.toggle(&mut config), Ok(true));
        assert_eq!(config.get("enableHover"), Ok(&Value::Bool(true)));
        assert_eq!(notifications.get(), 1);
    }

    #[test]
    fn defaults_test() {
        let config = BounceCards::configuration();
        assert_eq!(config.get("enableHover"), Ok(&Value::Bool(false)));
        assert_eq!(config.params().len(), 3);
    }
}
