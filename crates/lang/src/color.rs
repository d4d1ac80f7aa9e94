//! Post-processing applied to resolved strings.
//!
//! The default pass rewrites `&`-prefixed color codes (`&a`, `&l`, ...) into the
//! client's `§` formatting marker.

use std::fmt;
use std::rc::Rc;

/// Formatting marker understood by the game client.
pub const COLOR_CHAR: char = '§';

/// Alternate color prefix conventionally used in config files.
pub const DEFAULT_ALT_COLOR_CHAR: char = '&';

const CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replace `alt` followed by a recognised code with [`COLOR_CHAR`] and the
/// lowercased code. Other occurrences of `alt` are left alone.
pub fn translate_alternate_color_codes(alt: char, text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == alt && CODES.contains(chars[i + 1]) {
            chars[i] = COLOR_CHAR;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Hook run on every resolved bundle string after substitution.
#[derive(Clone)]
pub struct TextProcessor {
    apply: Rc<dyn Fn(String) -> String>,
}

impl TextProcessor {
    /// Wrap an arbitrary transformation.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(String) -> String + 'static,
    {
        Self { apply: Rc::new(f) }
    }

    /// Leave strings untouched.
    pub fn identity() -> Self {
        Self::new(|s| s)
    }

    /// Translate color codes prefixed with `alt`.
    pub fn color_codes(alt: char) -> Self {
        Self::new(move |s| translate_alternate_color_codes(alt, &s))
    }

    /// Run the hook.
    pub fn apply(&self, text: String) -> String {
        (self.apply)(text)
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::color_codes(DEFAULT_ALT_COLOR_CHAR)
    }
}

impl fmt::Debug for TextProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextProcessor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_codes() {
        assert_eq!(translate_alternate_color_codes('&', "&aGreen &LBold"), "§aGreen §lBold");
        assert_eq!(translate_alternate_color_codes('&', "&x&F"), "§x§f");
    }

    #[test]
    fn leaves_unknown_codes_and_trailing_prefix() {
        assert_eq!(translate_alternate_color_codes('&', "Tom & Jerry"), "Tom & Jerry");
        assert_eq!(translate_alternate_color_codes('&', "&zfoo&"), "&zfoo&");
        assert_eq!(translate_alternate_color_codes('&', ""), "");
    }

    #[test]
    fn custom_prefix() {
        assert_eq!(translate_alternate_color_codes('$', "$c&cRed"), "§c&cRed");
    }

    #[test]
    fn processors_compose_with_bundles() {
        assert_eq!(TextProcessor::identity().apply("&a".into()), "&a");
        assert_eq!(TextProcessor::default().apply("&a".into()), "§a");
        let upper = TextProcessor::new(|s| s.to_uppercase());
        assert_eq!(upper.apply("hi".into()), "HI");
    }
}
