//! Search input bridge.
//!
//! The [`SearchBar`] is the host surface: it owns the editable text and the
//! focus, and turns keystrokes into [`SearchEvent`]s. A [`SearchBinding`]
//! holds the query a screen filters with and only ever changes in response
//! to those events. The binding never writes back into the bar except for
//! the placeholder handed over when the bar is configured.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events emitted by the search host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Text changed; carries the full new text
    TextChanged(String),
    /// The user pressed the search/submit key
    Submitted(String),
    /// The user dismissed the search
    Cancelled,
}

/// Local query state for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBinding {
    placeholder: &'static str,
    query: String,
}

impl SearchBinding {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            query: String::new(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// The raw query, exactly as last reported by the host.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::TextChanged(text) | SearchEvent::Submitted(text) => self.query = text,
            SearchEvent::Cancelled => self.query.clear(),
        }
    }
}

/// Terminal search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    text: String,
    placeholder: &'static str,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the bar at a screen's binding: adopt its placeholder and
    /// current query.
    pub fn configure(&mut self, binding: &SearchBinding) {
        self.placeholder = binding.placeholder();
        self.text = binding.query().to_string();
        self.focused = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Handle a key while focused.
    ///
    /// Returns the event to forward to the binding, if the key produced one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchEvent> {
        if !self.focused {
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.text.clear();
                self.focused = false;
                Some(SearchEvent::Cancelled)
            }
            KeyCode::Enter => {
                self.focused = false;
                Some(SearchEvent::Submitted(self.text.clone()))
            }
            KeyCode::Backspace => {
                if key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL) {
                    delete_word(&mut self.text);
                } else {
                    self.text.pop()?;
                }
                Some(SearchEvent::TextChanged(self.text.clone()))
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.text.is_empty() {
                    return None;
                }
                self.text.clear();
                Some(SearchEvent::TextChanged(String::new()))
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.push(c);
                Some(SearchEvent::TextChanged(self.text.clone()))
            }
            _ => None,
        }
    }
}

/// Remove the last word and any whitespace after it.
fn delete_word(text: &mut String) {
    let trimmed_len = text.trim_end().len();
    let cut = text[..trimmed_len]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    text.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(bar: &mut SearchBar, binding: &mut SearchBinding, text: &str) {
        for c in text.chars() {
            if let Some(event) = bar.handle_key(key(KeyCode::Char(c))) {
                binding.apply(event);
            }
        }
    }

    #[test]
    fn test_binding_takes_raw_text() {
        let mut binding = SearchBinding::new("Search sessions...");
        binding.apply(SearchEvent::TextChanged("  Hooks ".to_string()));
        assert_eq!(binding.query(), "  Hooks ");

        binding.apply(SearchEvent::Submitted("final".to_string()));
        assert_eq!(binding.query(), "final");

        binding.apply(SearchEvent::Cancelled);
        assert_eq!(binding.query(), "");
    }

    #[test]
    fn test_every_keystroke_updates_binding() {
        let mut bar = SearchBar::new();
        let mut binding = SearchBinding::new("Search sessions...");
        bar.configure(&binding);
        bar.focus();

        if let Some(event) = bar.handle_key(key(KeyCode::Char('r'))) {
            binding.apply(event);
        }
        assert_eq!(binding.query(), "r");
        type_text(&mut bar, &mut binding, "ea");
        assert_eq!(binding.query(), "rea");

        let event = bar.handle_key(key(KeyCode::Backspace));
        assert_eq!(event, Some(SearchEvent::TextChanged("re".to_string())));
    }

    #[test]
    fn test_unfocused_bar_ignores_keys() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_key(key(KeyCode::Char('x'))), None);
        assert_eq!(bar.text(), "");
    }

    #[test]
    fn test_enter_submits_and_blurs() {
        let mut bar = SearchBar::new();
        let mut binding = SearchBinding::new("p");
        bar.focus();
        type_text(&mut bar, &mut binding, "ada");

        assert_eq!(
            bar.handle_key(key(KeyCode::Enter)),
            Some(SearchEvent::Submitted("ada".to_string()))
        );
        assert!(!bar.is_focused());
        assert_eq!(bar.text(), "ada");
    }

    #[test]
    fn test_escape_cancels_and_clears() {
        let mut bar = SearchBar::new();
        let mut binding = SearchBinding::new("p");
        bar.focus();
        type_text(&mut bar, &mut binding, "ada");

        let event = bar.handle_key(key(KeyCode::Esc)).unwrap();
        binding.apply(event);
        assert_eq!(binding.query(), "");
        assert_eq!(bar.text(), "");
        assert!(!bar.is_focused());
    }

    #[test]
    fn test_backspace_on_empty_emits_nothing() {
        let mut bar = SearchBar::new();
        bar.focus();
        assert_eq!(bar.handle_key(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_configure_adopts_binding() {
        let mut binding = SearchBinding::new("Search speakers...");
        binding.apply(SearchEvent::TextChanged("grace".to_string()));

        let mut bar = SearchBar::new();
        bar.configure(&binding);
        assert_eq!(bar.placeholder(), "Search speakers...");
        assert_eq!(bar.text(), "grace");
    }

    #[test]
    fn test_delete_word() {
        let mut text = "hello big world  ".to_string();
        delete_word(&mut text);
        assert_eq!(text, "hello big ");
        delete_word(&mut text);
        assert_eq!(text, "hello ");
        delete_word(&mut text);
        assert_eq!(text, "");
    }

    #[test]
    fn test_delete_word_after_multibyte_space() {
        let mut text = "caf\u{a0}bar".to_string();
        delete_word(&mut text);
        assert_eq!(text, "caf\u{a0}");

        let mut text = "東京\u{3000}会場".to_string();
        delete_word(&mut text);
        assert_eq!(text, "東京\u{3000}");
    }

    #[test]
    fn test_ctrl_backspace_with_nbsp_emits_change() {
        let mut bar = SearchBar::new();
        let mut binding = SearchBinding::new("p");
        bar.focus();
        type_text(&mut bar, &mut binding, "caf\u{a0}bar");

        let event = bar.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL));
        assert_eq!(event, Some(SearchEvent::TextChanged("caf\u{a0}".to_string())));
    }
}
