//! Clients for the two remote services a deployment talks to: the
//! repository host (GitHub) and the deploy platform (Vercel).
//!
//! Both sit behind traits so the publisher and deploy trigger can be driven
//! by mocks in tests.

/// Connection settings and shared constants.
pub mod config;

/// GitHub REST client used to create and populate repositories.
pub mod github;

/// Common traits for the remote services.
pub mod traits;

/// Request and response types shared across clients.
pub mod types;

/// Vercel REST client used to request deployments.
pub mod vercel;
