use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::KnowledgeBaseStatus,
};

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<KnowledgeBaseStatus, CoreError>> + Send;
    /// Seconds since the service was created.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
