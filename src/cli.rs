use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tokio::sync::broadcast::{error::TryRecvError, Receiver};
use tracing::{info, warn};

use crate::listing::SortSelection;
use crate::routes::{guard, Route};
use crate::session::SessionEvent;
use crate::views::{PasswordChangeForm, PREMIUM_ONLY};
use crate::JobBoardApp;

#[derive(Debug, Parser)]
#[command(name = "jboard")]
#[command(about = "Job board client: browse postings, manage your account and skills")]
pub struct Cli {
    /// Overrides JBOARD_API_URL for this run.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session token
    Login { username: String, password: String },
    /// Create an account
    Register { username: String, password: String },
    /// Drop the stored session
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// List job postings
    Jobs {
        #[arg(long)]
        seniority: Option<String>,
        #[arg(long)]
        field: Option<String>,
        /// publishedDate-desc, publishedDate-asc, updatedAt-desc or updatedAt-asc
        #[arg(long, default_value = "publishedDate-desc")]
        sort: SortSelection,
        /// Print the available filter values instead of the postings
        #[arg(long)]
        categories: bool,
    },
    /// Change the account password
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Permanently delete the account
    DeleteAccount {
        #[arg(long)]
        yes: bool,
    },
    /// Manage the skills profile (premium)
    Skills {
        #[command(subcommand)]
        action: SkillsCommand,
    },
    /// AI analysis of a posting against your skills (premium)
    Analyze { url: String },
}

#[derive(Debug, Subcommand)]
pub enum SkillsCommand {
    List,
    Add { skill: String },
    Remove { skill: String },
    Clear,
}

impl Command {
    /// Screen the command belongs to.
    pub fn route(&self) -> Route {
        match self {
            Command::Login { .. } | Command::Register { .. } | Command::Logout => Route::Login,
            Command::Whoami | Command::Jobs { .. } | Command::Analyze { .. } => Route::Home,
            Command::Password { .. } | Command::DeleteAccount { .. } | Command::Skills { .. } => {
                Route::Profile
            }
        }
    }
}

fn print_redirect() {
    println!("Sessão não encontrada. Redirecionando para {}", Route::Login);
}

pub async fn handle_command(command: Command, app: &JobBoardApp) -> Result<()> {
    let wanted = command.route();
    if guard(wanted, &app.session) != wanted {
        print_redirect();
        return Err(anyhow!("sessão necessária para {}", wanted));
    }

    match command {
        Command::Login { username, password } => {
            let mut view = app.login_view();
            view.set_username(&username);
            view.set_password(&password);
            match view.submit().await {
                Ok(Some(route)) => println!("Login realizado. Indo para {}", route),
                Ok(None) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Command::Register { username, password } => {
            let mut view = app.login_view();
            view.show_register();
            view.set_username(&username);
            view.set_password(&password);
            match view.submit().await {
                Ok(_) => {
                    if let Some(notice) = view.notice() {
                        println!("✅ {}", notice);
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        Command::Logout => {
            app.auth_service.logout()?;
            println!("Sessão encerrada.");
        }

        Command::Whoami => {
            let claims = app.auth_service.get_user_data();
            let user = claims
                .and_then(|c| c.sub)
                .unwrap_or_else(|| "desconhecido".to_string());
            println!("Usuário: {}", user);
            println!("Plano: {}", app.auth_service.get_user_role());
        }

        Command::Jobs {
            seniority,
            field,
            sort,
            categories,
        } => {
            let mut board = app.job_board_view();
            board.load().await;
            if let Some(error) = board.error() {
                return Err(anyhow!("{}", error));
            }

            if categories {
                println!("Senioridade: {}", board.seniority_levels().join(", "));
                println!("Área: {}", board.fields().join(", "));
                println!("Ordenação:");
                for (option, label) in SortSelection::OPTIONS {
                    println!("  {:<20} {}", option.to_string(), label);
                }
                return Ok(());
            }

            board.set_seniority_filter(seniority.as_deref());
            board.set_field_filter(field.as_deref());
            board.set_sort(sort);
            print!("{}", board.render());
        }

        Command::Password { old, new, confirm } => {
            let mut profile = app.profile_view();
            profile.password_form = PasswordChangeForm::new(&old, &new, &confirm);
            match profile.change_password().await {
                Ok(()) => println!("✅ {}", profile.success().unwrap_or_default()),
                Err(e) => return Err(e.into()),
            }
        }

        Command::DeleteAccount { yes } => {
            if !yes {
                println!("Esta ação é permanente. Repita com --yes para confirmar.");
                return Ok(());
            }
            let mut profile = app.profile_view();
            match profile.delete_account().await {
                Ok(route) => println!("Conta excluída. Indo para {}", route),
                Err(e) => return Err(e.into()),
            }
        }

        Command::Skills { action } => handle_skills(action, app).await?,

        Command::Analyze { url } => {
            let premium = app.session.role().is_premium();
            if !premium {
                return Err(anyhow!(PREMIUM_ONLY));
            }
            let mut modal = app.analysis_modal();
            modal.open(&url).await;
            print!("{}", modal.render());
        }
    }

    Ok(())
}

async fn handle_skills(action: SkillsCommand, app: &JobBoardApp) -> Result<()> {
    let mut profile = app.profile_view();
    let result = match &action {
        SkillsCommand::List => profile.load_skills().await,
        SkillsCommand::Add { skill } => profile.add_skill(skill).await,
        SkillsCommand::Remove { skill } => profile.remove_skill(skill).await,
        SkillsCommand::Clear => profile.clear_skills().await,
    };

    result?;
    if profile.skills().is_empty() {
        println!("Nenhuma habilidade cadastrada.");
    } else {
        println!("Habilidades: {}", profile.skills().join(", "));
    }
    Ok(())
}

/// Reports what happened to the session while the command ran.
pub fn report_session_events(events: &mut Receiver<SessionEvent>) {
    loop {
        match events.try_recv() {
            Ok(SessionEvent::Unauthorized) => {
                warn!("Session expired during command");
                println!(
                    "Sua sessão expirou. Faça login novamente. Redirecionando para {}",
                    Route::Login
                );
            }
            Ok(event) => info!(?event, "Session event"),
            Err(TryRecvError::Lagged(skipped)) => warn!(skipped, "Missed session events"),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}
