//! Typed board model shared by the live view and the export rasterizer.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::consts::{
    CHALK_DEFAULT_INK, CHALK_PLACEHOLDER, CHALK_SURFACE, CHALK_SWATCHES, WHITE_DEFAULT_INK,
    WHITE_PLACEHOLDER, WHITE_SURFACE, WHITE_SWATCHES,
};

/// Which physical board is simulated. Selects the surface color, default ink,
/// swatch palette, placeholder text, and decorative texture layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardKind {
    /// Green chalkboard written with chalk.
    #[default]
    Chalk,
    /// White marker board written with pens.
    White,
}

impl BoardKind {
    /// The other kind — toggling is the only transition between kinds.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Chalk => Self::White,
            Self::White => Self::Chalk,
        }
    }

    /// Canonical surface color, also the export background fill.
    #[must_use]
    pub fn surface_color(self) -> &'static str {
        match self {
            Self::Chalk => CHALK_SURFACE,
            Self::White => WHITE_SURFACE,
        }
    }

    /// Canonical ink color applied whenever this kind becomes active.
    #[must_use]
    pub fn default_ink(self) -> &'static str {
        match self {
            Self::Chalk => CHALK_DEFAULT_INK,
            Self::White => WHITE_DEFAULT_INK,
        }
    }

    /// Placeholder text shown (and exported) when the board text is empty.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Chalk => CHALK_PLACEHOLDER,
            Self::White => WHITE_PLACEHOLDER,
        }
    }

    /// Swatch palette offered for this kind.
    #[must_use]
    pub fn swatches(self) -> [&'static str; 6] {
        match self {
            Self::Chalk => CHALK_SWATCHES,
            Self::White => WHITE_SWATCHES,
        }
    }
}

/// One entry of the fixed Arabic font catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontFace {
    /// Arabic display label shown in the picker.
    pub label: &'static str,
    /// CSS font-family name, as hosted on Google Fonts.
    pub family: &'static str,
    /// Stylesheet class that previews the face in the picker.
    pub css_class: &'static str,
}

/// The fixed catalog of selectable Arabic faces.
pub const FONT_CATALOG: [FontFace; 6] = [
    FontFace { label: "رقعة (تقليدي)", family: "Aref Ruqaa", css_class: "f-arefruqaa" },
    FontFace { label: "أميري (كلاسيكي)", family: "Amiri", css_class: "f-amiri" },
    FontFace { label: "كايرو (عصري)", family: "Cairo", css_class: "f-cairo" },
    FontFace { label: "تجول (احترافي)", family: "Tajawal", css_class: "f-tajawal" },
    FontFace { label: "المسيري (فني)", family: "El Messiri", css_class: "f-elmessiri" },
    FontFace { label: "ليمونادة (مرح)", family: "Lemonada", css_class: "f-lemonada" },
];

/// Look up a catalog entry by its CSS family name.
#[must_use]
pub fn font_face(family: &str) -> Option<&'static FontFace> {
    FONT_CATALOG.iter().find(|face| face.family == family)
}

/// An uploaded background overlay: a revocable blob URL plus its mime type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlaySource {
    pub url: String,
    pub mime: String,
}

impl OverlaySource {
    /// True for raster/vector image uploads that can be drawn during export.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// True for PDF uploads, which preview via an embedded viewer only.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.mime.contains("pdf")
    }
}

/// A point-in-time copy of everything the rasterizer needs to redraw the
/// board. Width and height come from the live layout, not the requested
/// dimensions, so the export is a scaled replica of what is on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSnapshot {
    pub kind: BoardKind,
    pub text: String,
    pub ink: String,
    pub font_px: f64,
    pub line_height: f64,
    pub font_family: String,
    pub width_px: f64,
    pub height_px: f64,
    pub overlay: Option<OverlaySource>,
}
