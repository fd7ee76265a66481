use tracing::debug;

use crate::listing::{
    derive_jobs, distinct_fields, distinct_seniority_levels, FilterSelection, ListingStats,
    SortSelection,
};
use crate::models::JobPosting;
use crate::services::JobsService;
use crate::session::Session;

use super::job_card::JobCard;

pub const EMPTY_TITLE: &str = "Nenhuma vaga encontrada";
pub const EMPTY_HINT: &str = "Tente ajustar os filtros para encontrar mais oportunidades.";
pub const RETRY_LABEL: &str = "Tentar novamente";

/// The `/home` screen: raw job list plus the user's filter and sort.
pub struct JobBoardView {
    jobs: JobsService,
    session: Session,
    raw: Vec<JobPosting>,
    filter: FilterSelection,
    sort: SortSelection,
    error: Option<String>,
    is_loading: bool,
    loaded: bool,
}

impl JobBoardView {
    pub fn new(jobs: JobsService, session: Session) -> Self {
        Self {
            jobs,
            session,
            raw: Vec::new(),
            filter: FilterSelection::default(),
            sort: SortSelection::default(),
            error: None,
            is_loading: false,
            loaded: false,
        }
    }

    /// First fetch. Later calls are no-ops; use `retry` to refetch.
    pub async fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.fetch().await;
    }

    pub async fn retry(&mut self) {
        self.fetch().await;
    }

    async fn fetch(&mut self) {
        self.is_loading = true;
        self.error = None;
        let result = self.jobs.get_jobs().await;
        self.is_loading = false;

        match result {
            Ok(jobs) => {
                self.loaded = true;
                self.replace_jobs(jobs);
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Swaps in a new raw list. Filter values the new list no longer
    /// offers are cleared.
    pub fn replace_jobs(&mut self, jobs: Vec<JobPosting>) {
        self.raw = jobs;

        if let Some(level) = self.filter.seniority_level() {
            if !distinct_seniority_levels(&self.raw).iter().any(|l| l == level) {
                debug!(seniority_level = level, "Clearing seniority filter absent from new list");
                self.filter.seniority_level = None;
            }
        }
        if let Some(field) = self.filter.field() {
            if !distinct_fields(&self.raw).iter().any(|f| f == field) {
                debug!(field, "Clearing field filter absent from new list");
                self.filter.field = None;
            }
        }
    }

    pub fn raw(&self) -> &[JobPosting] {
        &self.raw
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn sort(&self) -> SortSelection {
        self.sort
    }

    pub fn set_seniority_filter(&mut self, level: Option<&str>) {
        self.filter.seniority_level = level.map(str::to_string);
    }

    pub fn set_field_filter(&mut self, field: Option<&str>) {
        self.filter.field = field.map(str::to_string);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn set_sort(&mut self, sort: SortSelection) {
        self.sort = sort;
    }

    pub fn visible(&self) -> Vec<&JobPosting> {
        derive_jobs(&self.raw, &self.filter, &self.sort)
    }

    pub fn seniority_levels(&self) -> Vec<String> {
        distinct_seniority_levels(&self.raw)
    }

    pub fn fields(&self) -> Vec<String> {
        distinct_fields(&self.raw)
    }

    pub fn stats(&self) -> ListingStats {
        ListingStats::new(self.raw.len(), self.visible().len())
    }

    pub fn cards(&self) -> Vec<JobCard<'_>> {
        let premium = self.session.role().is_premium();
        self.visible()
            .into_iter()
            .map(|job| JobCard::new(job, premium))
            .collect()
    }

    pub fn render(&self) -> String {
        if let Some(error) = &self.error {
            return format!("{}\n[{}] jboard jobs\n", error, RETRY_LABEL);
        }

        let stats = self.stats();
        let mut out = stats.available_label();
        if let Some(found) = stats.found_label() {
            out.push_str(&format!(" · {}", found));
        }
        out.push_str(&format!(" · {}\n\n", self.sort.label()));

        let cards = self.cards();
        if cards.is_empty() {
            out.push_str(&format!("{}\n{}\n", EMPTY_TITLE, EMPTY_HINT));
            return out;
        }
        for card in cards {
            out.push_str(&card.render());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::ApiClient;
    use crate::views::AnalysisAccess;

    fn board() -> JobBoardView {
        let session = Session::in_memory();
        let config = Config::new("http://127.0.0.1:9").unwrap();
        let api = ApiClient::new(&config, session.clone()).unwrap();
        JobBoardView::new(JobsService::new(api), session)
    }

    fn job(id: &str, level: &str, field: &str) -> JobPosting {
        JobPosting {
            id: id.into(),
            title: format!("Vaga {}", id),
            seniority_level: Some(level.into()),
            field: Some(field.into()),
            ..Default::default()
        }
    }

    #[test]
    fn stale_filters_are_cleared_on_replace() {
        let mut board = board();
        board.replace_jobs(vec![job("1", "Junior", "Dados"), job("2", "Senior", "Backend")]);
        board.set_seniority_filter(Some("Senior"));
        board.set_field_filter(Some("Dados"));

        board.replace_jobs(vec![job("3", "Senior", "Frontend")]);
        assert_eq!(board.filter().seniority_level(), Some("Senior"));
        assert_eq!(board.filter().field(), None);
    }

    #[test]
    fn empty_state_when_filter_matches_nothing() {
        let mut board = board();
        board.replace_jobs(vec![job("1", "Junior", "Dados"), job("2", "Senior", "Dados")]);
        board.set_seniority_filter(Some("Pleno"));

        assert!(board.visible().is_empty());
        assert_eq!(board.stats(), ListingStats::new(2, 0));
        let text = board.render();
        assert!(text.contains(EMPTY_TITLE));
        assert!(text.contains(EMPTY_HINT));
        assert!(text.starts_with("2 vagas disponíveis · 0 vagas encontradas"));
    }

    #[test]
    fn free_users_get_locked_cards() {
        let mut board = board();
        board.replace_jobs(vec![job("1", "Junior", "Dados")]);
        assert!(board
            .cards()
            .iter()
            .all(|card| card.analysis_access() != AnalysisAccess::Enabled));
    }

    #[tokio::test]
    async fn failed_load_offers_retry() {
        let mut board = board();
        board.load().await;
        assert_eq!(board.error(), Some(crate::services::jobs_service::LOAD_JOBS_FAILED));
        assert!(board.render().contains(RETRY_LABEL));
        assert!(!board.is_loading());
    }
}
