//! Style configuration shared by every block builder.
//!
//! A [`StyleConfig`] is immutable for the duration of one document build and
//! is read by reference wherever text is produced, so changing a single value
//! changes the appearance of every block built afterward, uniformly.  Colors
//! are hex strings without a leading `#`; sizes are in half-points, matching
//! the units `docx-rs` expects.  Values are passed through to the serializer
//! uninspected.

/// Color palette for a document build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    /// Title text color.
    pub primary: String,
    /// Level-1 heading color.
    pub secondary: String,
    /// Level-2 heading color.
    pub accent: String,
    /// Body text color.
    pub text: String,
    /// De-emphasized text (italics, page chrome).
    pub muted: String,
    /// Table header row fill.
    pub table_header: String,
    /// Table border color.
    pub table_border: String,
    /// Hyperlink color.
    pub link: String,
}

/// Font names for the three text tiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSet {
    /// Font used by the document title.
    pub title: String,
    /// Font used by headings.
    pub heading: String,
    /// Font used by body text, lists and tables.
    pub body: String,
}

/// Text sizes in half-points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeSet {
    /// Title size.
    pub title: usize,
    /// Level-1 heading size.
    pub h1: usize,
    /// Level-2 heading size.
    pub h2: usize,
    /// Body text size.
    pub body: usize,
}

/// Complete style configuration: colors, fonts and sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleConfig {
    /// Active color palette.
    pub colors: ColorPalette,
    /// Active font set.
    pub fonts: FontSet,
    /// Active size set.
    pub sizes: SizeSet,
}

impl StyleConfig {
    /// Restrained monochrome look built on Calibri.  This is the default.
    pub fn professional() -> Self {
        Self {
            colors: ColorPalette {
                primary: "000000".to_owned(),
                secondary: "000000".to_owned(),
                accent: "333333".to_owned(),
                text: "000000".to_owned(),
                muted: "666666".to_owned(),
                table_header: "f5f5f5".to_owned(),
                table_border: "cccccc".to_owned(),
                link: "000000".to_owned(),
            },
            fonts: FontSet {
                title: "Calibri Light".to_owned(),
                heading: "Calibri Light".to_owned(),
                body: "Calibri".to_owned(),
            },
            sizes: SizeSet {
                title: 56,
                h1: 32,
                h2: 26,
                body: 22,
            },
        }
    }

    /// Bright palette with rounded fonts, for informal documents.
    pub fn fun() -> Self {
        Self {
            colors: ColorPalette {
                primary: "e91e63".to_owned(),
                secondary: "673ab7".to_owned(),
                accent: "009688".to_owned(),
                text: "212121".to_owned(),
                muted: "757575".to_owned(),
                table_header: "fce4ec".to_owned(),
                table_border: "f48fb1".to_owned(),
                link: "1e88e5".to_owned(),
            },
            fonts: FontSet {
                title: "Comic Sans MS".to_owned(),
                heading: "Comic Sans MS".to_owned(),
                body: "Segoe UI".to_owned(),
            },
            sizes: SizeSet {
                title: 60,
                h1: 34,
                h2: 28,
                body: 22,
            },
        }
    }

    /// Relaxed blue-grey palette sitting between the other two presets.
    pub fn casual() -> Self {
        Self {
            colors: ColorPalette {
                primary: "2c3e50".to_owned(),
                secondary: "34495e".to_owned(),
                accent: "16a085".to_owned(),
                text: "2c3e50".to_owned(),
                muted: "7f8c8d".to_owned(),
                table_header: "ecf0f1".to_owned(),
                table_border: "bdc3c7".to_owned(),
                link: "2980b9".to_owned(),
            },
            fonts: FontSet {
                title: "Georgia".to_owned(),
                heading: "Georgia".to_owned(),
                body: "Verdana".to_owned(),
            },
            sizes: SizeSet {
                title: 52,
                h1: 30,
                h2: 25,
                body: 21,
            },
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::professional()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_professional() {
        assert_eq!(StyleConfig::default(), StyleConfig::professional());
    }

    #[test]
    fn presets_are_distinct() {
        let professional = StyleConfig::professional();
        let fun = StyleConfig::fun();
        let casual = StyleConfig::casual();
        assert_ne!(professional, fun);
        assert_ne!(professional, casual);
        assert_ne!(fun, casual);
    }

    #[test]
    fn colors_carry_no_hash_prefix() {
        let config = StyleConfig::professional();
        for color in [
            &config.colors.primary,
            &config.colors.muted,
            &config.colors.table_header,
            &config.colors.link,
        ] {
            assert!(!color.starts_with('#'));
        }
    }
}
