use thiserror::Error;

/// Persistence-layer validation failure listing every invalid entity
#[derive(Debug, Clone, Error)]
#[error("Validation failed for one or more entities.")]
pub struct EntityValidationError {
    pub entities: Vec<EntityValidationResult>,
}

/// Validation outcome of a single tracked entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityValidationResult {
    /// Type name of the entity, e.g. `JobPosting`
    pub entity_type: String,
    /// Tracking state at save time, e.g. `Added` or `Modified`
    pub state: String,
    pub errors: Vec<PropertyValidationError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValidationError {
    pub property: String,
    pub message: String,
}

impl EntityValidationError {
    pub fn new(entities: Vec<EntityValidationResult>) -> Self {
        Self { entities }
    }

    /// Log lines describing every violation: one header per entity followed
    /// by one line per property error.
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for entity in &self.entities {
            lines.push(format!(
                "Entity of type \"{}\" in state \"{}\" has the following validation errors:",
                entity.entity_type, entity.state
            ));
            for error in &entity.errors {
                lines.push(format!(
                    "- Property: \"{}\", Error: \"{}\"",
                    error.property, error.message
                ));
            }
        }
        lines
    }
}

impl EntityValidationResult {
    pub fn new(entity_type: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            state: state.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_error(mut self, property: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.push(PropertyValidationError {
            property: property.into(),
            message: message.into(),
        });
        self
    }
}
