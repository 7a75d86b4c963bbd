//! Font registration for chart text.
//!
//! plotters draws text through ab_glyph with fonts registered at runtime.
//! Each configured font path is registered under its own family name, so
//! tools configured with different fonts can share one process. Without a
//! configured path the first loadable system font is used.
//!
//! A configured path is authoritative: if it does not hold a usable font,
//! charts are drawn without text rather than with a system font.

use plotters::style::{register_font, FontStyle};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::{debug, warn};

/// Family name of the system font.
pub const FONT_FAMILY: &str = "chartify-sans";

const SYSTEM_FONTS: [&str; 7] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Registration outcome per configured path (`None` = system fonts).
type Registry = HashMap<Option<PathBuf>, Option<&'static str>>;

fn registry() -> &'static Mutex<Registry> {
    static FONTS: OnceLock<Mutex<Registry>> = OnceLock::new();
    FONTS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Font family to draw chart text with, registering it on first use.
///
/// Returns `None` when no usable font was found; charts are then drawn
/// without text. The outcome is remembered per path.
pub fn ensure_font(configured: Option<&Path>) -> Option<&'static str> {
    let mut fonts = registry().lock().unwrap_or_else(PoisonError::into_inner);
    let key = configured.map(Path::to_path_buf);
    if let Some(family) = fonts.get(&key) {
        return *family;
    }

    let family = match configured {
        Some(path) => {
            let family = format!("{}-{}", FONT_FAMILY, fonts.len());
            register_path(path, &family).then(|| leak_str(family))
        }
        None => SYSTEM_FONTS
            .iter()
            .any(|path| register_path(Path::new(path), FONT_FAMILY))
            .then_some(FONT_FAMILY),
    };
    if family.is_none() {
        warn!(
            configured = ?configured,
            "no TrueType font found, charts will be drawn without text"
        );
    }

    fonts.insert(key, family);
    family
}

fn register_path(path: &Path, family: &str) -> bool {
    let Ok(bytes) = fs::read(path) else {
        return false;
    };
    if ab_glyph::FontRef::try_from_slice(&bytes).is_err() {
        warn!(path = %path.display(), "not a usable TrueType font");
        return false;
    }

    // Registered fonts live for the rest of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    match register_font(family, FontStyle::Normal, bytes) {
        Ok(()) => {
            debug!(path = %path.display(), family, "registered chart font");
            true
        }
        Err(_) => false,
    }
}

fn leak_str(family: String) -> &'static str {
    Box::leak(family.into_boxed_str())
}
