const PLACEHOLDER: &str = "Search location...";
/// Corner of the map surface the control is pinned to.
pub const CONTROL_POSITION: &str = "topleft";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

/// The text box overlaid on the map. Owns only its input text.
#[derive(Debug, Clone)]
pub struct SearchControl {
    text: String,
}

impl SearchControl {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn position(&self) -> &'static str {
        CONTROL_POSITION
    }

    pub fn placeholder(&self) -> &'static str {
        PLACEHOLDER
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Returns the query to submit when `key` completes a search.
    /// Enter on blank input submits nothing; Escape clears the box.
    pub fn key_press(&mut self, key: &Key) -> Option<String> {
        match key {
            Key::Enter => {
                let query = self.text.trim();
                if query.is_empty() {
                    None
                } else {
                    Some(query.to_string())
                }
            }
            Key::Char(c) => {
                self.text.push(*c);
                None
            }
            Key::Escape => {
                self.text.clear();
                None
            }
        }
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::new()
    }
}
