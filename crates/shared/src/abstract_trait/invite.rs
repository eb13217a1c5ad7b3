use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::{model::invite::Invite, utils::AppError};

pub type DynInviteRepository = Arc<dyn InviteRepositoryTrait + Send + Sync>;

/// Referral pairs are written by the mobile app; the admin surface only
/// reads them.
#[async_trait]
pub trait InviteRepositoryTrait {
    async fn find_by_inviter(&self, user_id: i32) -> Result<Vec<Invite>, AppError>;
}
