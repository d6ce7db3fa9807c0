/// Validation predicate for a form field.
pub type Validator<T> = fn(&T) -> bool;

/// Actions a field can receive. Closed set: every state change a form
/// makes goes through one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction<T> {
    /// The user entered or selected a value.
    Input(T),
    /// The field lost focus.
    Blur,
    /// Restore the initial value and clear the touched flag.
    Reset,
}

/// State of a single form field: current value, whether the user has
/// interacted with it, and the predicate deciding validity.
///
/// ```
/// use billable::forms::{FieldAction, FormField, validators};
///
/// let mut email = FormField::new(String::new(), validators::is_email);
/// assert!(!email.has_error()); // invalid but untouched
///
/// email.apply(FieldAction::Input("billing@client".to_string()));
/// email.apply(FieldAction::Blur);
/// assert!(email.has_error());
///
/// email.apply(FieldAction::Input("billing@client.com".to_string()));
/// assert!(email.is_valid() && !email.has_error());
/// ```
#[derive(Debug, Clone)]
pub struct FormField<T: Clone> {
    initial: T,
    value: T,
    touched: bool,
    validate: Validator<T>,
}

impl<T: Clone> FormField<T> {
    pub fn new(initial: T, validate: Validator<T>) -> Self {
        Self {
            value: initial.clone(),
            initial,
            touched: false,
            validate,
        }
    }

    /// The single reducer for all field state changes.
    pub fn apply(&mut self, action: FieldAction<T>) {
        match action {
            FieldAction::Input(value) => self.value = value,
            FieldAction::Blur => self.touched = true,
            FieldAction::Reset => {
                self.value = self.initial.clone();
                self.touched = false;
            }
        }
    }

    /// Shorthand for applying [`FieldAction::Input`].
    pub fn set(&mut self, value: T) {
        self.apply(FieldAction::Input(value));
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn is_valid(&self) -> bool {
        (self.validate)(&self.value)
    }

    /// A field shows its error only after the user has touched it.
    pub fn has_error(&self) -> bool {
        !self.is_valid() && self.touched
    }
}
