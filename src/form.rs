//! The form used to rename an umbrella

/// Title of the rename dialog
pub const DIALOG_TITLE: &str = "Veranstaltungstitel anpassen";
/// Help text shown under the title field
pub const DESCRIPTION: &str = "Unter diesem Titel werden später viele Unterveranstaltungen gelistet.";
/// Inline message shown when the title is empty
pub const EMPTY_TITLE_MESSAGE: &str = "Bitte gib einen Veranstaltungstitel an.";

/// A form with a single, required `title` field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TitleForm {
    default_value: String,
    value: String,
    error: Option<String>,
}

impl TitleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the form, using `title` as its new default value
    pub fn reset<S: ToString>(&mut self, title: S) {
        self.default_value = title.to_string();
        self.value = self.default_value.clone();
        self.error = None;
    }

    pub fn default_value(&self) -> &str { &self.default_value }
    pub fn value(&self) -> &str { &self.value }
    /// The inline validation message, if the last validation failed
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    pub fn set_value<S: ToString>(&mut self, value: S) {
        self.value = value.to_string();
    }

    /// Check the current value, and store the inline message in case it is invalid
    pub fn validate(&mut self) -> Result<String, String> {
        match check_title(&self.value) {
            Ok(()) => {
                self.error = None;
                Ok(self.value.clone())
            },
            Err(message) => {
                self.error = Some(message.clone());
                Err(message)
            },
        }
    }

    /// The example title shown in the empty field
    pub fn placeholder(year: i32) -> String {
        format!("Vorkurs {}", year)
    }
}

/// A title is valid as soon as it has at least one character
pub fn check_title(title: &str) -> Result<(), String> {
    if title.chars().count() < 1 {
        return Err(EMPTY_TITLE_MESSAGE.to_string());
    }
    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reset_sets_default_and_value() {
        let mut form = TitleForm::new();
        assert_eq!(form.default_value(), "");

        form.set_value("");
        let _ = form.validate();
        assert!(form.error().is_some());

        form.reset("Vorkurs 2024");
        assert_eq!(form.default_value(), "Vorkurs 2024");
        assert_eq!(form.value(), "Vorkurs 2024");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn validation() {
        let mut form = TitleForm::new();

        for title in &["S", "Sommerkurs", " ", "Über 2024"] {
            form.set_value(title);
            assert_eq!(form.validate(), Ok(title.to_string()));
            assert_eq!(form.error(), None);
        }

        form.set_value("");
        assert_eq!(form.validate(), Err(EMPTY_TITLE_MESSAGE.to_string()));
        assert_eq!(form.error(), Some(EMPTY_TITLE_MESSAGE));
    }

    #[test]
    fn placeholder() {
        assert_eq!(TitleForm::placeholder(2026), "Vorkurs 2026");
    }
}
