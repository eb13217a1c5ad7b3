mod di;
mod errors;
mod metrics;

pub use self::di::DependenciesInject;
pub use self::errors::AppError;
pub use self::metrics::{Method, Metrics, RequestLabels, Status};
