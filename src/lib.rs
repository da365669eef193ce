pub mod classifier;
pub mod cli;
pub mod command;
pub mod config;
pub mod credentials;
pub mod deployer;
pub mod error;
pub mod pipeline;
pub mod publisher;
pub mod remote;
pub mod types;
pub mod walker;

pub use error::{Result, ShipfolderError};
pub use pipeline::{Pipeline, PipelineEvent, PipelineState};

#[cfg(test)]
pub mod test_helpers;
