pub mod auth;
pub mod dashboard;
pub mod hashing;
pub mod invite;
pub mod jwt;
pub mod ledger;
pub mod notification;
pub mod ranking;
pub mod user;
pub mod withdrawal;

pub use self::auth::{AdminUserRepositoryTrait, AuthServiceTrait, DynAdminUserRepository, DynAuthService};
pub use self::dashboard::{DashboardServiceTrait, DynDashboardService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::invite::{DynInviteRepository, InviteRepositoryTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::ledger::{
    DynLedgerRepository, DynLedgerService, LedgerRepositoryTrait, LedgerServiceTrait,
};
pub use self::notification::{
    DynNotificationRepository, DynNotificationService, NotificationRepositoryTrait,
    NotificationServiceTrait,
};
pub use self::ranking::{
    DynRankingRepository, DynRankingService, DynRankingUpdateStrategy, RankingRepositoryTrait,
    RankingServiceTrait, RankingUpdateStrategyTrait,
};
pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
pub use self::withdrawal::{
    DynWithdrawalRepository, DynWithdrawalService, WithdrawalRepositoryTrait,
    WithdrawalServiceTrait,
};
