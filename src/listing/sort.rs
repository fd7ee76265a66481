use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::models::JobPosting;
use crate::utils::time::parse_instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    PublishedDate,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Which date drives the order, and which way. Defaults to newest
/// publications first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSelection {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSelection {
    /// Every selectable order with its label, in menu order.
    pub const OPTIONS: [(SortSelection, &'static str); 4] = [
        (
            SortSelection::new(SortField::PublishedDate, SortDirection::Descending),
            "Mais recentes (publicação)",
        ),
        (
            SortSelection::new(SortField::PublishedDate, SortDirection::Ascending),
            "Mais antigas (publicação)",
        ),
        (
            SortSelection::new(SortField::UpdatedAt, SortDirection::Descending),
            "Atualizadas recentemente",
        ),
        (
            SortSelection::new(SortField::UpdatedAt, SortDirection::Ascending),
            "Atualizadas há mais tempo",
        ),
    ];

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn label(&self) -> &'static str {
        Self::OPTIONS
            .iter()
            .find(|(option, _)| option == self)
            .map(|(_, label)| *label)
            .unwrap_or("")
    }

    /// Missing or unparseable dates sort as the earliest instant.
    pub fn sort_key(&self, job: &JobPosting) -> DateTime<Utc> {
        let raw = match self.field {
            SortField::PublishedDate => job.published_date.as_deref(),
            SortField::UpdatedAt => job.updated_at.as_deref(),
        };
        raw.and_then(parse_instant).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn compare(&self, a: &JobPosting, b: &JobPosting) -> Ordering {
        let ordering = self.sort_key(a).cmp(&self.sort_key(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::PublishedDate => "publishedDate",
            SortField::UpdatedAt => "updatedAt",
        };
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}-{}", field, direction)
    }
}

impl FromStr for SortSelection {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (field, direction) = raw
            .split_once('-')
            .ok_or_else(|| Error::Validation(format!("Ordenação inválida: {}", raw)))?;
        let field = match field {
            "publishedDate" => SortField::PublishedDate,
            "updatedAt" => SortField::UpdatedAt,
            _ => return Err(Error::Validation(format!("Ordenação inválida: {}", raw))),
        };
        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return Err(Error::Validation(format!("Ordenação inválida: {}", raw))),
        };
        Ok(Self { field, direction })
    }
}
