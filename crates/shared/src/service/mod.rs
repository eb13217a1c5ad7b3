mod auth;
mod dashboard;
mod ledger;
mod notification;
mod ranking;
mod user;
mod withdrawal;

pub use self::auth::AuthService;
pub use self::dashboard::DashboardService;
pub use self::ledger::LedgerService;
pub use self::notification::NotificationService;
pub use self::ranking::{NoopRankingUpdate, RankingService, RecomputeRankingUpdate};
pub use self::user::UserService;
pub use self::withdrawal::WithdrawalService;
