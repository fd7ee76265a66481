use crate::models::JobPosting;
use crate::utils::time::format_date_br;

use super::PREMIUM_ONLY;

pub const ANALYZE_LABEL: &str = "Analisar com IA";
pub const APPLY_LABEL: &str = "Ver vaga";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisAccess {
    Enabled,
    Locked(&'static str),
}

/// One posting as shown on the board.
#[derive(Debug, Clone, Copy)]
pub struct JobCard<'a> {
    job: &'a JobPosting,
    premium: bool,
}

impl<'a> JobCard<'a> {
    pub fn new(job: &'a JobPosting, premium: bool) -> Self {
        Self { job, premium }
    }

    pub fn job(&self) -> &'a JobPosting {
        self.job
    }

    /// Seniority, field, employment and workplace, skipping the absent ones.
    pub fn badges(&self) -> Vec<&'a str> {
        [
            &self.job.seniority_level,
            &self.job.field,
            &self.job.employment_type,
            &self.job.workplace_type,
        ]
        .into_iter()
        .filter_map(|badge| badge.as_deref())
        .filter(|badge| !badge.is_empty())
        .collect()
    }

    /// Labelled `dd/mm/yyyy` dates. Missing or unreadable dates are omitted.
    pub fn dates(&self) -> Vec<(&'static str, String)> {
        [
            ("Publicado em:", &self.job.published_date),
            ("Atualizada em:", &self.job.updated_at),
            ("Prazo:", &self.job.application_deadline),
        ]
        .into_iter()
        .filter_map(|(label, raw)| {
            raw.as_deref()
                .and_then(format_date_br)
                .map(|date| (label, date))
        })
        .collect()
    }

    pub fn analysis_access(&self) -> AnalysisAccess {
        if self.premium {
            AnalysisAccess::Enabled
        } else {
            AnalysisAccess::Locked(PREMIUM_ONLY)
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} · {}\n", self.job.title, self.job.company));

        let badges = self.badges();
        if !badges.is_empty() {
            let tags: Vec<String> = badges.iter().map(|b| format!("[{}]", b)).collect();
            out.push_str(&format!("  {}\n", tags.join(" ")));
        }
        for (label, date) in self.dates() {
            out.push_str(&format!("  {} {}\n", label, date));
        }
        if !self.job.url.is_empty() {
            out.push_str(&format!("  {}: {}\n", APPLY_LABEL, self.job.url));
        }
        match self.analysis_access() {
            AnalysisAccess::Enabled => {
                out.push_str(&format!("  {}: jboard analyze {}\n", ANALYZE_LABEL, self.job.url))
            }
            AnalysisAccess::Locked(reason) => {
                out.push_str(&format!("  {} (bloqueado): {}\n", ANALYZE_LABEL, reason))
            }
        }
        out
    }
}
