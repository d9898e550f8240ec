//! Field declarations of the console dialogs.

use std::collections::BTreeMap;

use iced::widget::text_input;

use anonix_ui::component::form;

/// Flat `name -> value` view of a form, handed to the submit action.
pub type Payload = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Password,
    Select(&'static [Choice]),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub value: form::Value<String>,
    pub visible: bool,
    pub id: text_input::Id,
    default: String,
    /// Shown only while the select field `.0` holds the value `.1`.
    shown_when: Option<(&'static str, &'static str)>,
}

impl Field {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind,
            value: form::Value::default(),
            visible: true,
            id: text_input::Id::unique(),
            default: String::new(),
            shown_when: None,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn select(name: &'static str, label: &'static str, choices: &'static [Choice]) -> Self {
        let mut field = Self::new(name, label, FieldKind::Select(choices));
        if let Some(first) = choices.first() {
            field.default = first.value.to_string();
            field.value.value = field.default.clone();
        }
        field
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn shown_when(mut self, select: &'static str, value: &'static str) -> Self {
        self.shown_when = Some((select, value));
        self
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Password)
    }

    pub fn selected(&self) -> Option<Choice> {
        match &self.kind {
            FieldKind::Select(choices) => choices
                .iter()
                .find(|c| c.value == self.value.value)
                .copied(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    required: &'static str,
}

impl Form {
    /// `required` names the text field that must not be blank on submit.
    pub fn new(fields: Vec<Field>, required: &'static str) -> Self {
        let mut form = Self { fields, required };
        form.reset();
        form
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required(&self) -> Option<&Field> {
        self.field(self.required)
    }

    /// Restores every default value and visibility.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = form::Value {
                value: field.default.clone(),
                valid: true,
            };
        }
        self.update_visibility();
    }

    /// Sets a field value. Returns the id of the field revealed by this
    /// change, if any.
    pub fn set(&mut self, name: &str, value: String) -> Option<text_input::Id> {
        let field = self.fields.iter_mut().find(|f| f.name == name)?;
        field.value.value = value;
        field.value.valid = true;
        self.update_visibility()
    }

    fn update_visibility(&mut self) -> Option<text_input::Id> {
        let values: BTreeMap<&'static str, String> = self
            .fields
            .iter()
            .map(|f| (f.name, f.value.value.clone()))
            .collect();
        let mut revealed = None;
        for field in &mut self.fields {
            let Some((select, expected)) = field.shown_when else {
                continue;
            };
            let visible = values.get(select).map(String::as_str) == Some(expected);
            if visible && !field.visible {
                revealed = Some(field.id.clone());
            }
            if !visible {
                field.value = form::Value::default();
            }
            field.visible = visible;
        }
        revealed
    }

    pub fn invalidate(&mut self, name: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value.valid = false;
        }
    }

    /// The visible text inputs, in declaration order.
    pub fn focus_ring(&self) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| f.visible && f.is_text_input())
            .collect()
    }

    pub fn payload(&self) -> Payload {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.value.value.clone()))
            .collect()
    }
}
