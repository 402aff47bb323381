//! GUI font lookup.

use std::path::Path;

use glint_engine::text::FontId;
use glint_imgui::Context;

/// Tried in order. The first entry is relative to the working directory.
pub const FONT_PATHS: &[&str] = &[
    "data/ProggyClean.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Cantarell Regular (SIL OFL 1.1), used when no file of [`FONT_PATHS`] loads.
pub const EMBEDDED_FONT: &[u8] = include_bytes!("../data/Cantarell-Regular.ttf");

/// Loads the first readable font of [`FONT_PATHS`] into `gui`, falling back
/// to [`EMBEDDED_FONT`].
///
/// Returns `None` only if the embedded font fails to parse. The GUI then
/// still draws its windows and widgets, only the labels are missing.
pub fn load_gui_font(gui: &mut Context) -> Option<FontId> {
    log::info!("Load GUI fonts");
    load_first(gui, FONT_PATHS.iter().map(Path::new)).or_else(|| load_embedded(gui))
}

fn load_embedded(gui: &mut Context) -> Option<FontId> {
    match gui.load_font(EMBEDDED_FONT) {
        Ok(id) => {
            log::info!("GUI font: embedded Cantarell");
            Some(id)
        }
        Err(e) => {
            log::warn!("embedded GUI font: {e}, labels will not be drawn");
            None
        }
    }
}

fn load_first<'p>(gui: &mut Context, paths: impl IntoIterator<Item = &'p Path>) -> Option<FontId> {
    for path in paths {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match gui.load_font(&bytes) {
            Ok(id) => {
                log::info!("GUI font: {}", path.display());
                return Some(id);
            }
            Err(e) => log::warn!("{}: {e}", path.display()),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_are_skipped() {
        let mut gui = Context::new();
        let paths = [Path::new("/definitely/not/here.ttf"), Path::new("")];
        assert_eq!(load_first(&mut gui, paths), None);
        assert_eq!(gui.font(), None);
    }

    #[test]
    fn unparsable_files_are_skipped() {
        let dir = std::env::temp_dir().join("glint-demos-font-test");
        std::fs::create_dir_all(&dir).unwrap();
        let bogus = dir.join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        let mut gui = Context::new();
        assert_eq!(load_first(&mut gui, [bogus.as_path()]), None);
        assert!(gui.fonts.is_empty());
    }

    #[test]
    fn embedded_font_loads_and_measures_text() {
        let mut gui = Context::new();
        let id = load_embedded(&mut gui).expect("embedded font parses");
        assert_eq!(gui.font(), Some(id));
        assert!(gui.fonts.measure_text("Draw Rect", id, 13.0).x > 0.0);
    }

    #[test]
    fn gui_always_ends_up_with_a_font() {
        let mut gui = Context::new();
        assert!(load_gui_font(&mut gui).is_some());
        assert!(gui.font().is_some());
    }

    #[test]
    fn bundled_font_is_tried_first() {
        assert_eq!(FONT_PATHS[0], "data/ProggyClean.ttf");
    }
}
