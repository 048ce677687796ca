use super::*;

impl App {
    /// Navigate to a different view
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();

        match view {
            View::Settings => {
                self.settings_form = Some(SettingsForm::from_config(&self.config));
            }
            View::ThemePicker => {
                self.theme_index = crate::theme::THEMES
                    .iter()
                    .position(|t| t.name == self.theme.name)
                    .unwrap_or(0);
            }
            View::Clock | View::Schedule => {
                self.settings_form = None;
            }
        }
    }

    /// Select next item in current list
    pub fn select_next(&mut self) {
        if self.current_view == View::ThemePicker {
            self.theme_index = (self.theme_index + 1) % crate::theme::THEMES.len();
        }
    }

    /// Select previous item in current list
    pub fn select_previous(&mut self) {
        if self.current_view == View::ThemePicker {
            self.theme_index = if self.theme_index == 0 {
                crate::theme::THEMES.len() - 1
            } else {
                self.theme_index - 1
            };
        }
    }
}
