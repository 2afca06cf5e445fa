//! Unified error types surfaced by the runtime API.
//!
//! Simulation outcomes (crashes, leaving the grid) are events, not errors.
//! These variants cover rejected input and broken worker plumbing only.
use rover_core::{GridError, PlanError};
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("command plan rejected: {0}")]
    InvalidPlan(#[from] PlanError),

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(#[source] GridError),

    #[error("plan provider not set")]
    ProviderNotSet,

    #[error("plan provider failed: {0}")]
    Provider(String),

    #[error("engine controller command channel closed")]
    CommandChannelClosed,

    #[error("engine controller reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("engine worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
