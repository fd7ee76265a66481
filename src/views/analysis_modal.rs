use tracing::debug;

use crate::dto::analysis_dto::AnalysisResponse;
use crate::error::Result;
use crate::routes::Route;
use crate::services::AnalysisService;
use crate::utils::sequence::{RequestSequencer, Ticket};

pub const LOADING_TEXT: &str = "Analisando vaga com IA...";
pub const ERROR_TITLE: &str = "Erro na Análise";
pub const DONE_TITLE: &str = "Análise Concluída";
pub const PROFILE_SHORTCUT: &str = "Cadastrar Habilidades";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Closed,
    Loading,
    Failed {
        message: String,
        status: Option<u16>,
    },
    Done {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisLine {
    Bullet(String),
    Text(String),
    Blank,
}

/// Splits the analysis text into lines; a leading `—`, `–` or `-` marks a
/// bullet.
pub fn format_message(message: &str) -> Vec<AnalysisLine> {
    message
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return AnalysisLine::Blank;
            }
            match trimmed.strip_prefix(['—', '–', '-']) {
                Some(rest) => AnalysisLine::Bullet(rest.trim_start().to_string()),
                None => AnalysisLine::Text(trimmed.to_string()),
            }
        })
        .collect()
}

/// The AI analysis dialog opened from a job card.
pub struct AnalysisModal {
    service: AnalysisService,
    sequencer: RequestSequencer,
    state: AnalysisState,
    job_url: Option<String>,
}

impl AnalysisModal {
    pub fn new(service: AnalysisService) -> Self {
        Self {
            service,
            sequencer: RequestSequencer::new(),
            state: AnalysisState::Closed,
            job_url: None,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn job_url(&self) -> Option<&str> {
        self.job_url.as_deref()
    }

    pub fn service(&self) -> &AnalysisService {
        &self.service
    }

    /// Opens the dialog in its loading state and hands out the ticket the
    /// matching completion must present.
    pub fn begin(&mut self, job_url: &str) -> Ticket {
        self.job_url = Some(job_url.to_string());
        self.state = AnalysisState::Loading;
        self.sequencer.issue()
    }

    /// Applies a finished analysis unless a newer one was started or the
    /// dialog was closed since. Returns whether it was applied.
    pub fn complete(&mut self, ticket: Ticket, result: Result<AnalysisResponse>) -> bool {
        if !self.sequencer.is_current(ticket) {
            debug!(?ticket, "Dropping stale analysis result");
            return false;
        }
        self.state = match result {
            Ok(response) => AnalysisState::Done {
                message: response.message,
            },
            Err(err) => AnalysisState::Failed {
                status: err.status_code(),
                message: err.to_string(),
            },
        };
        true
    }

    pub async fn open(&mut self, job_url: &str) {
        let ticket = self.begin(job_url);
        let result = self.service.analyze_job(job_url).await;
        self.complete(ticket, result);
    }

    pub fn close(&mut self) {
        // Invalidates whatever is still in flight.
        self.sequencer.issue();
        self.state = AnalysisState::Closed;
        self.job_url = None;
    }

    pub fn title(&self) -> Option<&'static str> {
        match self.state {
            AnalysisState::Closed => None,
            AnalysisState::Loading => Some(LOADING_TEXT),
            AnalysisState::Failed { .. } => Some(ERROR_TITLE),
            AnalysisState::Done { .. } => Some(DONE_TITLE),
        }
    }

    pub fn lines(&self) -> Vec<AnalysisLine> {
        match &self.state {
            AnalysisState::Done { message } => format_message(message),
            AnalysisState::Failed { message, .. } => vec![AnalysisLine::Text(message.clone())],
            _ => Vec::new(),
        }
    }

    /// Offered only when the server said the skills profile is missing.
    pub fn profile_shortcut(&self) -> Option<Route> {
        match self.state {
            AnalysisState::Failed {
                status: Some(400), ..
            } => Some(Route::Profile),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let Some(title) = self.title() else {
            return String::new();
        };
        let mut out = format!("{}\n", title);
        for line in self.lines() {
            match line {
                AnalysisLine::Bullet(text) => out.push_str(&format!("  • {}\n", text)),
                AnalysisLine::Text(text) => out.push_str(&format!("{}\n", text)),
                AnalysisLine::Blank => out.push('\n'),
            }
        }
        if let Some(route) = self.profile_shortcut() {
            out.push_str(&format!("{} → {}\n", PROFILE_SHORTCUT, route));
        }
        out
    }
}
