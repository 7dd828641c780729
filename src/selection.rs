//! The user's current choices across every field.

use tracing::debug;

use crate::labels::{clean_label, extract_aspect_ratio, extract_number, REFERENCE_LABEL};
use crate::options::{Field, OptionList, CHAR_COUNT, NO_HUMANS, REFERENCE_SENTINEL};

/// What a single field currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Index into the field's option list.
    Listed(usize),
    /// Derive the attribute from an attached reference image.
    Reference,
    /// Free text typed instead of picking from the list.
    Custom(String),
}

impl Choice {
    /// Classify a raw picker value against `list`.
    pub fn from_raw(list: OptionList, value: &str) -> Choice {
        if let Some(index) = list.position(value) {
            Choice::Listed(index)
        } else if value == REFERENCE_SENTINEL && list.accepts_reference() {
            Choice::Reference
        } else {
            Choice::Custom(value.to_string())
        }
    }

    pub fn custom(text: impl Into<String>) -> Choice {
        Choice::Custom(text.into())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Choice::Custom(_))
    }
}

/// A choice resolved against its option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Concrete(&'a str),
    UseReference,
}

impl<'a> Value<'a> {
    pub fn is_reference(self) -> bool {
        matches!(self, Value::UseReference)
    }

    /// The value as a picker would show it.
    pub fn raw(self) -> &'a str {
        match self {
            Value::Concrete(text) => text,
            Value::UseReference => REFERENCE_SENTINEL,
        }
    }

    pub fn label(self) -> &'a str {
        match self {
            Value::Concrete(text) => clean_label(text),
            Value::UseReference => REFERENCE_LABEL,
        }
    }

    pub fn number(self) -> Option<f64> {
        match self {
            Value::Concrete(text) => extract_number(text),
            Value::UseReference => None,
        }
    }

    pub fn aspect_ratio(self) -> &'a str {
        extract_aspect_ratio(self.raw())
    }
}

/// Full selection state. Every field always holds a [`Choice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    choices: Vec<Choice>,
    notes: String,
}

impl Default for Selections {
    fn default() -> Self {
        Self::new()
    }
}

impl Selections {
    /// State a fresh session starts with.
    pub fn new() -> Self {
        let choices = Field::ALL
            .iter()
            .map(|field| Choice::Listed(field.default_index()))
            .collect();
        Self {
            choices,
            notes: String::new(),
        }
    }

    /// Whether the cast size describes people rather than an object.
    pub fn is_human(&self) -> bool {
        match &self.choices[Field::CharCount as usize] {
            Choice::Listed(index) => CHAR_COUNT.get(*index) != Some(NO_HUMANS),
            Choice::Reference => true,
            Choice::Custom(text) => text.as_str() != NO_HUMANS,
        }
    }

    pub fn choice(&self, field: Field) -> &Choice {
        &self.choices[field as usize]
    }

    /// Resolve `field` against the list that matches the current subject.
    pub fn value(&self, field: Field) -> Value<'_> {
        self.value_as(field, self.is_human())
    }

    /// Resolve `field` against the human or non-human list explicitly.
    pub fn value_as(&self, field: Field, is_human: bool) -> Value<'_> {
        match &self.choices[field as usize] {
            Choice::Listed(index) => {
                Value::Concrete(field.options(is_human).get(*index).unwrap_or(""))
            }
            Choice::Reference => Value::UseReference,
            Choice::Custom(text) => Value::Concrete(text.as_str()),
        }
    }

    pub fn raw(&self, field: Field) -> &str {
        self.value(field).raw()
    }

    pub fn is_custom(&self, field: Field) -> bool {
        self.choice(field).is_custom()
    }

    /// Store `choice` for `field`.
    ///
    /// Changing the cast size between human and non-human resets
    /// `characters` and `action` to the first entry of the new lists in the
    /// same call.
    pub fn set(&mut self, field: Field, choice: Choice) {
        let was_human = self.is_human();
        debug!(%field, ?choice, "Updating selection");
        self.choices[field as usize] = choice;

        if field == Field::CharCount {
            let is_human = self.is_human();
            if is_human != was_human {
                debug!(is_human, "Subject class changed, resetting subject and action");
                self.choices[Field::Characters as usize] = Choice::Listed(0);
                self.choices[Field::Action as usize] = Choice::Listed(0);
            }
        }
    }

    /// Store a raw picker value or typed text for `field`.
    pub fn select(&mut self, field: Field, value: &str) {
        let list = field.options(self.is_human());
        self.set(field, Choice::from_raw(list, value));
    }

    /// Put `field` back on the first entry of its list.
    pub fn reset(&mut self, field: Field) {
        self.set(field, Choice::Listed(0));
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Field names paired with their picker values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Value<'_>)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.value(field)))
    }
}
