use crate::models::JobPosting;

/// Two independent equality predicates. `None` and `Some("")` both mean
/// "match all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub seniority_level: Option<String>,
    pub field: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seniority_level(mut self, level: impl Into<String>) -> Self {
        self.seniority_level = Some(level.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn seniority_level(&self) -> Option<&str> {
        active(&self.seniority_level)
    }

    pub fn field(&self) -> Option<&str> {
        active(&self.field)
    }

    pub fn is_active(&self) -> bool {
        self.seniority_level().is_some() || self.field().is_some()
    }

    pub fn clear(&mut self) {
        self.seniority_level = None;
        self.field = None;
    }

    /// A job lacking an attribute never matches a non-empty filter on it.
    pub fn matches(&self, job: &JobPosting) -> bool {
        let seniority_ok = self
            .seniority_level()
            .map_or(true, |want| job.seniority_level.as_deref() == Some(want));
        let field_ok = self
            .field()
            .map_or(true, |want| job.field.as_deref() == Some(want));
        seniority_ok && field_ok
    }
}
