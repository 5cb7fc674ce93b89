//! Category glyphs.
//!
//! Icons are a presentation concern, so they live here as a static lookup
//! keyed by the category label rather than on the species records.

use bdwild_core::Category;
use phf::phf_map;

static CATEGORY_ICONS: phf::Map<&'static str, &'static str> = phf_map! {
    "Mammal" => "🐅",
    "Bird" => "🐦",
    "Reptile" => "🐊",
    "Amphibian" => "🐸",
    "Fish" => "🐟",
    "Invertebrate" => "🦀",
};

const FALLBACK_ICON: &str = "•";

pub fn category_icon(category: Category) -> &'static str {
    CATEGORY_ICONS.get(category.as_str()).copied().unwrap_or(FALLBACK_ICON)
}
