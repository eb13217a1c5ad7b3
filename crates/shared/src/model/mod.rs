pub mod admin_user;
pub mod invite;
pub mod notification;
pub mod ranking;
pub mod transaction;
pub mod user;
pub mod withdrawal;
