//! This crate holds the hand-authored navigation data consumed by the gallery's sidebar.
//!
//! The data is static and unvalidated: it's a catalog of names, nothing more.

use lazy_static::lazy_static;

/// One sidebar category with its entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Category {
    /// The category name shown as the sidebar heading.
    pub name: &'static str,

    /// The demo names under this category, in display order.
    pub subcategories: &'static [&'static str],
}

/// Demos highlighted as new in the sidebar.
pub const NEW: &[&str] = &[
    "Dither",
    "Animated List",
    "Gooey Nav",
    "Threads",
    "Lightning",
    "Folder",
    "Text Cursor",
];

/// Demos highlighted as recently updated in the sidebar.
pub const UPDATED: &[&str] = &[];

lazy_static! {
    /// The main sidebar navigation, in display order.
    pub static ref CATEGORIES: Vec<Category> = vec![
        Category {
            name: "Text Animations",
            subcategories: &[
                "Split Text",
                "Blur Text",
                "Circular Text",
                "Shiny Text",
                "Text Pressure",
                "Fuzzy Text",
                "Gradient Text",
                "Falling Text",
                "Text Cursor",
                "Decrypted Text",
                "True Focus",
                "Scroll Float",
                "Scroll Reveal",
                "ASCII Text",
                "Rotating Text",
                "Glitch Text",
                "Scroll Velocity",
                "Variable Proximity",
                "Count Up",
            ],
        },
        Category {
            name: "Animations",
            subcategories: &[
                "Animated Content",
                "Fade Content",
                "Pixel Transition",
                "Magnet Lines",
                "Click Spark",
                "Magnet",
                "Pixel Trail",
                "Metallic Paint",
                "Noise",
                "Crosshair",
                "Image Trail",
                "Ribbons",
                "Splash Cursor",
                "Meta Balls",
                "Follow Cursor",
                "Blob Cursor",
                "Star Border",
            ],
        },
        Category {
            name: "Components",
            subcategories: &[
                "Animated List",
                "Stack",
                "Tilted Card",
                "Folder",
                "Lanyard",
                "Dock",
                "Gooey Nav",
                "Masonry",
                "Pixel Card",
                "Circular Gallery",
                "Carousel",
                "Spotlight Card",
                "Flying Posters",
                "Infinite Scroll",
                "Glass Icons",
                "Decay Card",
                "Flowing Menu",
                "Elastic Slider",
                "Counter",
                "Infinite Menu",
                "Rolling Gallery",
                "Stepper",
                "Bounce Cards",
            ],
        },
        Category {
            name: "Backgrounds",
            subcategories: &[
                "Aurora",
                "Lightning",
                "Balatro",
                "Dither",
                "Shape Blur",
                "Threads",
                "Hyperspeed",
                "Iridescence",
                "Grid Distortion",
                "Ballpit",
                "Orb",
                "Grid Motion",
                "Liquid Chrome",
                "Squares",
                "Letter Glitch",
                "Particles",
                "Waves",
            ],
        },
    ];
}

/// Whether the named demo is highlighted as new.
pub fn is_new(name: &str) -> bool {
    NEW.contains(&name)
}

/// Whether the named demo is highlighted as recently updated.
pub fn is_updated(name: &str) -> bool {
    UPDATED.contains(&name)
}

/// Find the name of the category containing the named demo.
pub fn category_of(name: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|category| category.subcategories.contains(&name))
        .map(|category| category.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_of_test() {
        assert_eq!(category_of("Dither"), Some("Backgrounds"));
        assert_eq!(category_of("Bounce Cards"), Some("Components"));
        assert_eq!(category_of("Split Text"), Some("Text Animations"));
        assert_eq!(category_of("Nonexistent"), None);
    }

    #[test]
    fn highlight_test() {
        assert!(is_new("Dither"));
        assert!(!is_new("Bounce Cards"));
        assert!(!is_updated("Dither"));
    }

    #[test]
    fn highlighted_demos_exist_test() {
        for name in NEW.iter().chain(UPDATED) {
            assert!(
                category_of(name).is_some(),
                "Highlighted demo {name:?} should appear in a category"
            );
        }
    }
}
