//! Modal content payloads

use crate::records::{Condition, Listing};
use serde::{Deserialize, Serialize};

/// A labelled value shown in a details modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A drop-down style field on a tool panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    pub label: String,
    pub options: Vec<String>,
}

impl SelectField {
    pub fn new(label: impl Into<String>, options: &[&str]) -> Self {
        Self {
            label: label.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Content of a quick-action tool dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolPanel {
    pub intro: Vec<String>,
    pub checklist: Vec<String>,
    pub selects: Vec<SelectField>,
    pub button: String,
}

/// Fields of the edit-listing form.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Price,
    Condition,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Price,
            FormField::Price => FormField::Condition,
            FormField::Condition => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Price => FormField::Title,
            FormField::Condition => FormField::Price,
            FormField::Description => FormField::Condition,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Price => "Price ($)",
            FormField::Condition => "Condition",
            FormField::Description => "Description",
        }
    }
}

pub const DESCRIPTION_PLACEHOLDER: &str =
    "Original cartridge in great condition. Tested and working.";

/// Saved values of an edit-listing form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub listing_id: String,
    pub title: String,
    pub price: String,
    pub condition: Condition,
    pub description: String,
}

/// The editable form shown by the Edit listing action.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub listing_id: String,
    pub title: String,
    pub price: String,
    pub condition: Condition,
    pub description: String,
    pub focus: FormField,
}

impl ListingForm {
    /// Pre-populates the form from a listing's current fields.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            listing_id: listing.id.clone(),
            title: listing.item.clone(),
            price: format!("{:.2}", listing.price),
            condition: listing.condition,
            description: DESCRIPTION_PLACEHOLDER.to_string(),
            focus: FormField::Title,
        }
    }

    pub fn apply_draft(&mut self, draft: ListingDraft) {
        self.title = draft.title;
        self.price = draft.price;
        self.condition = draft.condition;
        self.description = draft.description;
    }

    pub fn to_draft(&self) -> ListingDraft {
        ListingDraft {
            listing_id: self.listing_id.clone(),
            title: self.title.clone(),
            price: self.price.clone(),
            condition: self.condition,
            description: self.description.clone(),
        }
    }

    /// Types a character into the focused field. Returns `true` if a value changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Price if c.is_ascii_digit() || (c == '.' && !self.price.contains('.')) => {
                self.price.push(c)
            }
            FormField::Price | FormField::Condition => return false,
        }
        true
    }

    pub fn backspace(&mut self) -> bool {
        let field = match self.focus {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
            FormField::Condition => return false,
        };
        field.pop().is_some()
    }

    /// Steps the condition selector when it has focus.
    pub fn cycle_condition(&mut self, forward: bool) -> bool {
        if self.focus != FormField::Condition {
            return false;
        }
        self.condition = if forward {
            self.condition.next()
        } else {
            self.condition.prev()
        };
        true
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Price => self.price.clone(),
            FormField::Condition => self.condition.label().to_string(),
            FormField::Description => self.description.clone(),
        }
    }
}

/// Everything a modal can display.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    /// Read-only label/value pairs.
    Details(Vec<DetailRow>),
    /// A question answered with Confirm or Cancel.
    Confirm { message: String },
    /// The edit-listing form.
    ListingForm(ListingForm),
    /// A quick-action tool panel.
    Tool(ToolPanel),
}

impl ModalContent {
    /// Plain-text rendering used by the console transcript.
    pub fn text_lines(&self) -> Vec<String> {
        match self {
            ModalContent::Details(rows) => rows
                .iter()
                .map(|row| format!("{}: {}", row.label, row.value))
                .collect(),
            ModalContent::Confirm { message } => {
                vec![message.clone(), "[Confirm] [Cancel]".to_string()]
            }
            ModalContent::ListingForm(form) => {
                let mut lines: Vec<String> = [
                    FormField::Title,
                    FormField::Price,
                    FormField::Condition,
                    FormField::Description,
                ]
                .into_iter()
                .map(|field| format!("{}: {}", field.label(), form.value(field)))
                .collect();
                lines.push("[Save Changes]".to_string());
                lines
            }
            ModalContent::Tool(panel) => {
                let mut lines = panel.intro.clone();
                lines.extend(panel.checklist.iter().map(|item| format!("[ ] {}", item)));
                lines.extend(
                    panel
                        .selects
                        .iter()
                        .map(|select| format!("{}: {}", select.label, select.options.join(" | "))),
                );
                lines.push(format!("[{}]", panel.button));
                lines
            }
        }
    }

    pub fn listing_form(&self) -> Option<&ListingForm> {
        match self {
            ModalContent::ListingForm(form) => Some(form),
            _ => None,
        }
    }

    pub fn listing_form_mut(&mut self) -> Option<&mut ListingForm> {
        match self {
            ModalContent::ListingForm(form) => Some(form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing() -> Listing {
        Listing {
            id: "LST-001".to_string(),
            item: "Mega Man 2 (NES)".to_string(),
            price: 79.99,
            condition: Condition::Mint,
            views: 234,
            watchers: 12,
            listed_date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        }
    }

    #[test]
    fn test_form_prepopulated_from_listing() {
        let form = ListingForm::from_listing(&listing());
        assert_eq!(form.title, "Mega Man 2 (NES)");
        assert_eq!(form.price, "79.99");
        assert_eq!(form.condition, Condition::Mint);
        assert_eq!(form.description, DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    // The price field only accepts a decimal number.
    fn test_price_field_filters_input() {
        let mut form = ListingForm::from_listing(&listing());
        form.focus = FormField::Price;
        form.price.clear();
        assert!(form.insert_char('4'));
        assert!(form.insert_char('.'));
        assert!(!form.insert_char('.'));
        assert!(!form.insert_char('x'));
        assert!(form.insert_char('5'));
        assert_eq!(form.price, "4.5");
    }

    #[test]
    fn test_condition_only_cycles_when_focused() {
        let mut form = ListingForm::from_listing(&listing());
        assert!(!form.cycle_condition(true));
        form.focus = FormField::Condition;
        assert!(form.cycle_condition(true));
        assert_eq!(form.condition, Condition::Good);
        assert!(!form.insert_char('a'));
        assert!(!form.backspace());
    }

    #[test]
    fn test_draft_round_trip_through_form() {
        let mut form = ListingForm::from_listing(&listing());
        form.title.push_str(" - boxed");
        let draft = form.to_draft();

        let mut fresh = ListingForm::from_listing(&listing());
        fresh.apply_draft(draft);
        assert_eq!(fresh.title, "Mega Man 2 (NES) - boxed");
    }

    #[test]
    fn test_confirm_text_lines() {
        let content = ModalContent::Confirm {
            message: "Delete?".to_string(),
        };
        assert_eq!(content.text_lines(), vec!["Delete?", "[Confirm] [Cancel]"]);
    }
}
