//! Deployment pipeline: create repository, upload files, request deploy.
//!
//! A [`Pipeline`] owns everything one run needs and drives an explicit
//! [`PipelineState`] machine:
//!
//! ```text
//! Idle -> CreatingRepo -> UploadingFiles(i, n) ... -> Deploying -> Complete
//!                \______________________\_______________\______-> Failed
//! ```
//!
//! Observers receive a [`PipelineEvent`] for every transition. Terminal
//! states stay put until [`Pipeline::reset`]; a run requested in any state
//! other than `Idle` is rejected with [`ShipfolderError::PipelineBusy`].
use derive_builder::Builder;
use log::*;
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    deployer::DeployTrigger,
    error::{Result, ShipfolderError},
    publisher::Publisher,
    types::{DeployResult, FileEntry, RepoConfig, RepoIdentity},
};


/// Characters the repository host accepts in a repository name.
static REPO_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

/// Longest repository name the host accepts.
pub const MAX_REPO_NAME_LEN: usize = 100;

pub const CREATING_REPO_PERCENT: f64 = 10.0;
pub const UPLOAD_START_PERCENT: f64 = 30.0;
pub const DEPLOYING_PERCENT: f64 = 70.0;
pub const COMPLETE_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Idle,
    CreatingRepo,
    UploadingFiles { index: usize, total: usize },
    Deploying,
    Complete { repo_url: String, deploy_url: String },
    Failed { message: String },
}

impl PipelineState {
    /// Progress percentage for the state. `Failed` has none of its own and
    /// keeps whatever was last reported.
    pub fn percent(&self) -> Option<f64> {
        match self {
            PipelineState::Idle => Some(0.0),
            PipelineState::CreatingRepo => Some(CREATING_REPO_PERCENT),
            PipelineState::UploadingFiles { index, total } => {
                let span = DEPLOYING_PERCENT - UPLOAD_START_PERCENT;
                let fraction = *index as f64 / *total as f64;
                Some(UPLOAD_START_PERCENT + span * fraction)
            }
            PipelineState::Deploying => Some(DEPLOYING_PERCENT),
            PipelineState::Complete { .. } => Some(COMPLETE_PERCENT),
            PipelineState::Failed { .. } => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PipelineState::Idle => "Ready",
            PipelineState::CreatingRepo => "Creating GitHub repository...",
            PipelineState::UploadingFiles { .. } => {
                "Uploading files to GitHub..."
            }
            PipelineState::Deploying => "Deploying to Vercel...",
            PipelineState::Complete { .. } => "Deployment complete!",
            PipelineState::Failed { .. } => "Deployment failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PipelineState::Complete { .. } | PipelineState::Failed { .. }
        )
    }
}

/// Emitted on every state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineEvent {
    pub state: PipelineState,
    pub percent: f64,
    pub title: &'static str,
    pub message: String,
}

/// Callback receiving pipeline events.
pub type Observer = Box<dyn FnMut(&PipelineEvent)>;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub repository: RepoIdentity,
    pub deployment: DeployResult,
}

/// Reject a run before any network call is made.
///
/// The name is checked exactly as it will be sent; surrounding whitespace
/// is not trimmed away and makes the name illegal.
pub fn validate(config: &RepoConfig, files: &[FileEntry]) -> Result<()> {
    let name = config.name.as_str();

    if name.trim().is_empty() {
        return Err(ShipfolderError::validation(
            "Please enter a repository name",
        ));
    }

    if files.is_empty() {
        return Err(ShipfolderError::validation(
            "Please select a folder with at least one file",
        ));
    }

    if name.len() > MAX_REPO_NAME_LEN
        || name == "."
        || name == ".."
        || !REPO_NAME_REGEX.is_match(name)
    {
        return Err(ShipfolderError::validation(format!(
            "Invalid repository name '{name}': use letters, digits, '.', \
             '-' or '_' (max {MAX_REPO_NAME_LEN} characters)"
        )));
    }

    Ok(())
}

struct StateMachine {
    state: PipelineState,
    percent: f64,
    observers: Vec<Observer>,
}

impl StateMachine {
    fn transition(&mut self, state: PipelineState, message: impl Into<String>) {
        if let Some(percent) = state.percent() {
            self.percent = percent;
        }

        let event = PipelineEvent {
            title: state.title(),
            percent: self.percent,
            message: message.into(),
            state: state.clone(),
        };

        debug!("pipeline transition: {:?} ({:.0}%)", state, self.percent);

        self.state = state;

        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

#[derive(Builder)]
#[builder(pattern = "owned", build_fn(private, name = "_build"))]
pub struct PipelineParams {
    pub publisher: Publisher,
    pub trigger: DeployTrigger,
}

impl PipelineParamsBuilder {
    pub fn build(self) -> Result<Pipeline> {
        let params = self._build().map_err(|e| {
            ShipfolderError::invalid_config(format!(
                "Failed to build pipeline: {}",
                e
            ))
        })?;
        Ok(Pipeline::new(params))
    }
}

/// One deployment run context: the remote clients plus the state machine.
pub struct Pipeline {
    publisher: Publisher,
    trigger: DeployTrigger,
    machine: StateMachine,
}

impl Pipeline {
    pub fn builder() -> PipelineParamsBuilder {
        PipelineParamsBuilder::default()
    }

    pub fn new(params: PipelineParams) -> Self {
        Self {
            publisher: params.publisher,
            trigger: params.trigger,
            machine: StateMachine {
                state: PipelineState::Idle,
                percent: 0.0,
                observers: vec![],
            },
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.machine.state
    }

    /// Register a callback invoked on every transition.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&PipelineEvent) + 'static,
    ) {
        self.machine.observers.push(Box::new(observer));
    }

    /// Return a finished pipeline to `Idle` so it can run again.
    pub fn reset(&mut self) {
        if self.machine.state.is_terminal() {
            self.machine.percent = 0.0;
            self.machine.transition(PipelineState::Idle, "Ready");
        }
    }

    /// Publish `files` as a new repository described by `config`, then
    /// request a deployment of it.
    ///
    /// Validation failures and busy rejections leave the state untouched.
    /// Any other failure moves the machine to `Failed` with the error's
    /// message; remote resources already created are left in place.
    pub async fn run(
        &mut self,
        config: &RepoConfig,
        files: &[FileEntry],
    ) -> Result<DeployOutcome> {
        if self.machine.state != PipelineState::Idle {
            warn!("rejecting deployment: pipeline is {:?}", self.machine.state);
            return Err(ShipfolderError::PipelineBusy);
        }

        validate(config, files)?;

        match self.execute(config, files).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                error!("deployment failed: {err}");
                self.machine.transition(
                    PipelineState::Failed {
                        message: err.to_string(),
                    },
                    err.to_string(),
                );
                Err(err)
            }
        }
    }

    async fn execute(
        &mut self,
        config: &RepoConfig,
        files: &[FileEntry],
    ) -> Result<DeployOutcome> {
        let Self {
            publisher,
            trigger,
            machine,
        } = self;

        machine
            .transition(PipelineState::CreatingRepo, "Creating repository...");
        let repository = publisher.create_repository(config).await?;

        publisher
            .upload_all(
                &repository.owner,
                repository.name(),
                files,
                &mut |progress| {
                    machine.transition(
                        PipelineState::UploadingFiles {
                            index: progress.index,
                            total: progress.total,
                        },
                        format!("Uploading {}...", progress.path),
                    )
                },
            )
            .await?;

        machine.transition(PipelineState::Deploying, "Deploying...");
        let deployment = trigger.deploy(&repository.full_name).await?;

        machine.transition(
            PipelineState::Complete {
                repo_url: repository.html_url.clone(),
                deploy_url: deployment.url.clone(),
            },
            "All done!",
        );

        Ok(DeployOutcome {
            repository,
            deployment,
        })
    }
}
