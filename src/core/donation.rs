use serde::Serialize;

/// Preset tiers offered on the donation page, in rupees.
pub const PRESET_AMOUNTS: [u32; 4] = [500, 1000, 2500, 5000];

/// Amount picker state: either a preset tier or free-form custom text.
///
/// Typing a custom amount unselects the preset (`None`, never `0`), and
/// picking a preset clears the custom text, so at most one input is live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AmountSelection {
    preset: Option<u32>,
    custom: String,
}

impl AmountSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(&self) -> Option<u32> {
        self.preset
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }

    pub fn select_preset(&mut self, amount: u32) {
        self.preset = Some(amount);
        self.custom.clear();
    }

    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.custom = text.into();
        self.preset = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Effective amount, or `None` when nothing usable has been entered.
    pub fn amount(&self) -> Option<u32> {
        match self.preset {
            Some(amount) => Some(amount),
            None => self
                .custom
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|amount| *amount > 0),
        }
    }

    pub fn is_preset_selected(&self, amount: u32) -> bool {
        self.preset == Some(amount)
    }
}
