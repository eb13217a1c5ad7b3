pub mod auth;
pub mod notification;
pub mod ranking;
pub mod transaction;
pub mod user;
pub mod withdrawal;

pub use self::auth::LoginRequest;
pub use self::notification::{CreateNotificationRequest, FindAllNotificationRequest};
pub use self::ranking::TopRankingRequest;
pub use self::transaction::FindAllTransactionRequest;
pub use self::user::{FindAllUserRequest, PointsMutationRequest};
pub use self::withdrawal::FindAllWithdrawalRequest;
