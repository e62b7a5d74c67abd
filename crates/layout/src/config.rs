use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Page size and margins in points, origin at the top-left corner.
///
/// The page footer occupies the top `footer_height` points of the bottom
/// margin, directly under the content area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub footer_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    pub fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            top_margin: 50.0,
            bottom_margin: 56.0,
            left_margin: 50.0,
            right_margin: 50.0,
            footer_height: 32.0,
        }
    }

    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            ..Self::a4()
        }
    }

    pub fn with_margins(mut self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        self.top_margin = top;
        self.right_margin = right;
        self.bottom_margin = bottom;
        self.left_margin = left;
        self
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.left_margin - self.right_margin
    }

    /// Vertical space between the margins of one page.
    pub fn usable_height(&self) -> f32 {
        self.height - self.top_margin - self.bottom_margin
    }

    /// The Y position content may not extend past.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.bottom_margin
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("topMargin", self.top_margin),
            ("bottomMargin", self.bottom_margin),
            ("leftMargin", self.left_margin),
            ("rightMargin", self.right_margin),
            ("footerHeight", self.footer_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidGeometry(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        if self.content_width() <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "horizontal margins leave no content width on a {}pt wide page",
                self.width
            )));
        }
        if self.usable_height() <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "vertical margins leave no usable height on a {}pt tall page",
                self.height
            )));
        }
        if self.footer_height > self.bottom_margin {
            return Err(LayoutError::InvalidGeometry(format!(
                "footer height {} does not fit in the {}pt bottom margin",
                self.footer_height, self.bottom_margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let page = PageGeometry::a4();
        assert!(page.validate().is_ok());
        assert!((page.content_width() - 495.28).abs() < 1e-3);
        assert!((page.usable_height() - 735.89).abs() < 1e-3);
        assert!((page.content_bottom() - 785.89).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        let squeezed = PageGeometry::a4().with_margins(400.0, 50.0, 450.0, 50.0);
        assert!(matches!(squeezed.validate(), Err(LayoutError::InvalidGeometry(_))));

        let tall_footer = PageGeometry {
            footer_height: 80.0,
            ..PageGeometry::a4()
        };
        assert!(tall_footer.validate().is_err());

        let nan = PageGeometry {
            width: f32::NAN,
            ..PageGeometry::letter()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_a4_defaults() {
        let page: PageGeometry = serde_json::from_str(r#"{ "topMargin": 72 }"#).unwrap();
        assert_eq!(page.top_margin, 72.0);
        assert_eq!(page.width, PageGeometry::a4().width);
    }
}
