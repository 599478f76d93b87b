//! This crate provides the copyable install/usage snippets shown in each demo's Code and CLI
//! tabs.
//!
//! Snippets are fixed text authored alongside each demo. They are deliberately *not* derived
//! from the live configuration: the exported code shows the demo's documented defaults.

/// The static export material of one demo.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snippet {
    /// The one-line CLI command that vendors the component into a project.
    pub cli_command: &'static str,

    /// The package names the component depends on.
    pub dependencies: &'static [&'static str],

    /// A usage example showing the component with its documented defaults.
    pub usage: &'static str,
}

impl Snippet {
    /// Render the install command for this snippet's dependency list.
    pub fn install_command(&self) -> String {
        if self.dependencies.is_empty() {
            "No dependencies required".to_owned()
        } else {
            format!("npm install {}", self.dependencies.join(" "))
        }
    }

    /// Render the full CLI tab: vendor the component, then install its dependencies.
    pub fn cli_tab(&self) -> String {
        if self.dependencies.is_empty() {
            self.cli_command.to_owned()
        } else {
            format!("{}\n{}", self.cli_command, self.install_command())
        }
    }
}
