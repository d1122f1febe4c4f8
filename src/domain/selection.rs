//! Animation selection from page identity
//!
//! The host page decides which family runs by its file name and title.
//! In-place wins only when nothing marks the page as radiating.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationMode {
    Radiating = 0,
    InPlace = 1,
}

/// What the page name and title hint at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageHints {
    pub in_place: bool,
    pub radiating: bool,
}

impl PageHints {
    pub fn detect(filename: &str, title: &str) -> Self {
        let in_place = filename.contains("index2")
            || filename.contains("in-place")
            || title.contains("In-Place")
            || title.contains("Firework");
        let radiating = filename.contains("index.html")
            || filename.contains("radiating")
            || title.contains("Radiating")
            || title.contains("Arc");
        Self { in_place, radiating }
    }

    pub fn mode(&self) -> AnimationMode {
        if self.in_place && !self.radiating {
            AnimationMode::InPlace
        } else {
            AnimationMode::Radiating
        }
    }

    /// Human readable line for the startup log
    pub fn label(&self) -> &'static str {
        match (self.mode(), self.radiating) {
            (AnimationMode::InPlace, _) => "In-Place Firework Explosions",
            (AnimationMode::Radiating, true) => "Radiating Arc Explosions",
            (AnimationMode::Radiating, false) => "Default Radiating Arc Explosions",
        }
    }
}

/// Last path segment, `index.html` for a bare directory path
pub fn page_filename(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "index.html",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_for(pathname: &str, title: &str) -> AnimationMode {
        PageHints::detect(page_filename(pathname), title).mode()
    }

    #[test]
    fn filename_of_directory_is_index() {
        assert_eq!(page_filename("/"), "index.html");
        assert_eq!(page_filename(""), "index.html");
        assert_eq!(page_filename("/demo/index2.html"), "index2.html");
    }

    #[test]
    fn in_place_pages() {
        assert_eq!(mode_for("/index2.html", ""), AnimationMode::InPlace);
        assert_eq!(mode_for("/in-place.html", ""), AnimationMode::InPlace);
        assert_eq!(mode_for("/page.html", "Firework Demo"), AnimationMode::InPlace);
    }

    #[test]
    fn radiating_markers_win_over_in_place() {
        assert_eq!(mode_for("/index2.html", "Arc Explosions"), AnimationMode::Radiating);
        assert_eq!(mode_for("/", "In-Place"), AnimationMode::Radiating);
    }

    #[test]
    fn unknown_pages_default_to_radiating() {
        let hints = PageHints::detect("about.html", "About");
        assert_eq!(hints.mode(), AnimationMode::Radiating);
        assert_eq!(hints.label(), "Default Radiating Arc Explosions");
    }
}
