use crate::defaults::Defaults;
use crate::ui::components::TextField;

/// The free-text prompt. No validation: an empty prompt is sent as-is.
#[derive(Debug, Clone, Default)]
pub struct PromptCapture {
    field: TextField,
}

impl PromptCapture {
    pub fn text(&self) -> &str {
        &self.field.text
    }

    pub fn set(&mut self, text: &str) {
        self.field = TextField::with(text);
    }

    /// Overwrite with the fixed example prompt.
    pub fn auto_generate(&mut self) {
        self.set(Defaults::AUTO_PROMPT);
    }

    pub fn presets() -> &'static [&'static str] {
        &Defaults::PRESET_PROMPTS
    }

    /// Overwrite with preset `idx`; out-of-range indexes are ignored.
    pub fn apply_preset(&mut self, idx: usize) {
        if let Some(p) = Self::presets().get(idx) {
            self.set(p);
        }
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut TextField {
        &mut self.field
    }
}
