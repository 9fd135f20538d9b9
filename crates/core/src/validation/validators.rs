// Field Validators - Reusable validation components
use serde_json::Value;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator with emptiness constraints
#[derive(Debug, Clone, Copy)]
pub struct StringValidator {
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub const fn new() -> Self {
        Self { not_empty: false, trim: false }
    }

    /// Require non-empty string
    pub const fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set whether to trim before validation
    pub const fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Accepts JSON objects with at least one key
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyObjectValidator;

impl FieldValidator<Value> for NonEmptyObjectValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Object(map) if !map.is_empty() => Ok(()),
            Value::Object(_) => Err("Object cannot be empty".to_string()),
            _ => Err("Value must be an object".to_string()),
        }
    }
}

/// Non-empty, untrimmed. Used for scope identifiers.
pub const IDENTIFIER: StringValidator = StringValidator::new().not_empty();

/// Non-blank after trimming. Used for ids and messages.
pub const NON_BLANK: StringValidator = StringValidator::new().not_empty().trim(true);
