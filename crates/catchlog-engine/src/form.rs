use catchlog_types::{FishType, NewCatch};
use std::collections::BTreeMap;

/// A field of the entry form, used as the key of the error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FishType,
    Size,
    Lure,
    Location,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FishType, Field::Size, Field::Lure, Field::Location];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FishType => "Fish Type",
            Field::Size => "Size (inches)",
            Field::Lure => "Lure Used",
            Field::Location => "Location",
        }
    }
}

/// Per-field validation messages produced by a submit attempt.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// The entry form: a draft catch plus its error map.
///
/// The flow is clear-on-edit, validate-all-on-submit: editing a field clears
/// only that field's error, and a submit checks every field independently
/// (no short-circuiting) so all messages surface at once. Size is kept as
/// the raw input string until a successful submit coerces it to f64.
#[derive(Debug, Clone, Default)]
pub struct CatchForm {
    fish_type: Option<FishType>,
    size: String,
    lure: String,
    location: String,
    errors: FieldErrors,
}

impl CatchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fish_type(&mut self, fish_type: Option<FishType>) {
        self.fish_type = fish_type;
        self.errors.remove(&Field::FishType);
    }

    pub fn set_size(&mut self, size: impl Into<String>) {
        self.size = size.into();
        self.errors.remove(&Field::Size);
    }

    pub fn set_lure(&mut self, lure: impl Into<String>) {
        self.lure = lure.into();
        self.errors.remove(&Field::Lure);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.errors.remove(&Field::Location);
    }

    pub fn fish_type(&self) -> Option<FishType> {
        self.fish_type
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn lure(&self) -> &str {
        &self.lure
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Check every field and return the full error map. Pure: the form's own
    /// error state is untouched.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.fish_type.is_none() {
            errors.insert(Field::FishType, "Please select a fish type");
        }

        if self.size.trim().is_empty() {
            errors.insert(Field::Size, "Please enter the size");
        } else {
            match self.size.trim().parse::<f64>() {
                Ok(size) if size.is_finite() && size > 0.0 => {}
                _ => {
                    errors.insert(Field::Size, "Please enter a valid size greater than 0");
                }
            }
        }

        if self.lure.trim().is_empty() {
            errors.insert(Field::Lure, "Please enter the lure used");
        }

        if self.location.trim().is_empty() {
            errors.insert(Field::Location, "Please enter the location");
        }

        errors
    }

    /// Attempt to submit the draft. On success the validated candidate is
    /// returned and the error map is cleared; on failure the messages are
    /// stored for display and the draft stays intact.
    pub fn submit(&mut self) -> Option<NewCatch> {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }

        Some(NewCatch {
            // Both unwraps are guarded by the validation pass above.
            fish_type: self.fish_type.unwrap(),
            size: self.size.trim().parse().unwrap(),
            lure: self.lure.clone(),
            location: self.location.clone(),
        })
    }
}
