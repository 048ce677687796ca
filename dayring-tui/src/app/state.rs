use crate::config::DayringConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Clock,
    Schedule,
    Settings,
    ThemePicker,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Move cursor one char to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    /// Move cursor one char to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }
    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Bedtime,
    EndpointUrl,
    AccessToken,
}

/// Editable copy of the persisted settings, shown in the settings view.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub bedtime: TextInput,
    pub endpoint_url: TextInput,
    pub access_token: TextInput,
    pub focused_field: SettingsField,
    pub error: Option<String>,
}

impl SettingsForm {
    pub fn from_config(config: &DayringConfig) -> Self {
        Self {
            bedtime: TextInput::from_str(&config.bedtime),
            endpoint_url: TextInput::from_str(&config.endpoint_url),
            access_token: TextInput::from_str(&config.access_token),
            focused_field: SettingsField::Bedtime,
            error: None,
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            SettingsField::Bedtime => &mut self.bedtime,
            SettingsField::EndpointUrl => &mut self.endpoint_url,
            SettingsField::AccessToken => &mut self.access_token,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            SettingsField::Bedtime => SettingsField::EndpointUrl,
            SettingsField::EndpointUrl => SettingsField::AccessToken,
            SettingsField::AccessToken => SettingsField::Bedtime,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused_field = match self.focused_field {
            SettingsField::Bedtime => SettingsField::AccessToken,
            SettingsField::EndpointUrl => SettingsField::Bedtime,
            SettingsField::AccessToken => SettingsField::EndpointUrl,
        };
    }
}

/// State for the task-description overlay shown while a focus session is
/// awaiting its task text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskOverlay {
    pub input: TextInput,
    pub error: Option<String>,
}
