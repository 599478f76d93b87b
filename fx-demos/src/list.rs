//! This module handles the [`DemoList`], which contains an entry for each implemented demo.

use crate::{BounceCards, Demo, Dither};
use fx_config::Configuration;
use fx_export::Snippet;
use fx_panel::PropRow;
use serde::{Deserialize, Serialize};

/// An enum to list all the implemented demos. If a demo is not accessible via this enum, then the
/// gallery can't show it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::EnumIter, Serialize, Deserialize)]
pub enum DemoList {
    /// See [`Dither`].
    Dither,

    /// See [`BounceCards`].
    BounceCards,
}

macro_rules! do_thing_on_demos {
    ( $thing:ident ) => {
        $thing!(Dither, BounceCards)
    };
}

// NOTE: For these macros to work, we need a demo in scope with the same name as its
// corresponding entry in the enum.
impl DemoList {
    /// Return the name of the selected demo.
    ///
    /// See [`Demo::demo_name()`].
    pub fn name(&self) -> &'static str {
        /// A simple macro to call `demo_name()` for the given demo.
        macro_rules! match_return_names {
            ( $( $name:ident ),* ) => {
                match *self {
                    $( DemoList::$name => $name::demo_name(), )*
                }
            };
        }

        do_thing_on_demos!(match_return_names)
    }

    /// Build a fresh configuration holding the selected demo's defaults.
    ///
    /// See [`Demo::configuration()`].
    pub fn configuration(&self) -> Configuration {
        /// A simple macro to call `configuration()` for the given demo.
        macro_rules! match_return_configurations {
            ( $( $name:ident ),* ) => {
                match *self {
                    $( DemoList::$name => $name::configuration(), )*
                }
            };
        }

        do_thing_on_demos!(match_return_configurations)
    }

    /// Return the selected demo's authored prop documentation.
    ///
    /// See [`Demo::prop_rows()`].
    pub fn prop_rows(&self) -> &'static [PropRow] {
        /// A simple macro to call `prop_rows()` for the given demo.
        macro_rules! match_return_prop_rows {
            ( $( $name:ident ),* ) => {
                match *self {
                    $( DemoList::$name => $name::prop_rows(), )*
                }
            };
        }

        do_thing_on_demos!(match_return_prop_rows)
    }

    /// Return the selected demo's export snippet.
    ///
    /// See [`Demo::snippet()`].
    pub fn snippet(&self) -> Snippet {
        /// A simple macro to call `snippet()` for the given demo.
        macro_rules! match_return_snippets {
            ( $( $name:ident ),* ) => {
                match *self {
                    $( DemoList::$name => $name::snippet(), )*
                }
            };
        }

        do_thing_on_demos!(match_return_snippets)
    }

    /// Find the demo with the given catalog name, if it's implemented.
    pub fn from_name(name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|demo| demo.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn from_name_test() {
        assert_eq!(DemoList::from_name("Dither"), Some(DemoList::Dither));
        assert_eq!(DemoList::from_name("Bounce Cards"), Some(DemoList::BounceCards));
        assert_eq!(DemoList::from_name("Aurora"), None);
    }

    #[test]
    fn every_demo_is_catalogued_test() {
        for demo in DemoList::iter() {
            assert!(
                fx_catalog::category_of(demo.name()).is_some(),
                "Demo {:?} should appear in the sidebar catalog",
                demo.name()
            );
        }
    }

    #[test]
    fn every_demo_has_export_material_test() {
        for demo in DemoList::iter() {
            assert!(!demo.prop_rows().is_empty());
            assert!(!demo.snippet().cli_command.is_empty());
            assert!(!demo.snippet().usage.is_empty());
        }
    }
}
