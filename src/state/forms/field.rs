//! Form field value objects

/// Glyph used in place of each character of a masked field
const MASK_CHAR: char = '•';

/// A single-line text input
#[derive(Debug, Clone)]
pub struct FormField {
    value: String,
    /// Whether the value is hidden when rendered
    pub is_masked: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text() -> Self {
        Self {
            value: String::new(),
            is_masked: false,
        }
    }

    /// Create a new field whose value is rendered masked
    pub fn secret() -> Self {
        Self {
            is_masked: true,
            ..Self::text()
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value. Control characters are ignored.
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Flip between masked and plain rendering
    pub fn toggle_mask(&mut self) {
        self.is_masked = !self.is_masked;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
