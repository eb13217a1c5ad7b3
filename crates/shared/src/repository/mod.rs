pub mod admin_user;
pub mod invite;
pub mod ledger;
pub mod notification;
pub mod ranking;
pub mod user;
pub mod withdrawal;
