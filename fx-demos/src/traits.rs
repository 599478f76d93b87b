//! This module contains the trait that every demo definition implements.

use fx_config::{Configuration, Parameter};
use fx_export::Snippet;
use fx_panel::PropRow;

/// This module contains the [`Sealed`](self::private::Sealed) trait.
pub(crate) mod private {
    /// This trait restricts implementors of [`Demo`](super::Demo) to this crate, so that
    /// [`DemoList`](crate::DemoList) is guaranteed to have a variant for every demo.
    pub trait Sealed {}
}

/// The trait implemented by every demo definition.
///
/// A demo is pure data: the declarations of its tunable parameters, its authored prop
/// documentation, and its export snippet. The effect renderer the parameters feed is external to
/// this crate.
pub trait Demo: private::Sealed {
    /// The name of the demo, matching its entry in the sidebar catalog.
    fn demo_name() -> &'static str;

    /// The declarations of the demo's tunable parameters, in control panel order.
    fn parameters() -> Vec<Parameter>;

    /// The authored prop documentation rows.
    ///
    /// These are not derived from [`parameters`](Demo::parameters): a documented default can
    /// differ from the interactive one, and documented props need not be interactive at all.
    fn prop_rows() -> &'static [PropRow];

    /// The demo's export snippet for the Code and CLI tabs.
    fn snippet() -> Snippet;

    /// Build a fresh configuration holding this demo's defaults.
    fn configuration() -> Configuration {
        Configuration::new(Self::parameters())
    }
}
