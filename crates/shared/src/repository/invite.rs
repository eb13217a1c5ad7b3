use crate::model::invite::Invite;
use crate::schema::invite::Invites;
use crate::utils::AppError;
use crate::{abstract_trait::InviteRepositoryTrait, config::ConnectionPool};
use async_trait::async_trait;
use sea_query::{Expr, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::error;

pub struct InviteRepository {
    db_pool: ConnectionPool,
}

impl InviteRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl InviteRepositoryTrait for InviteRepository {
    async fn find_by_inviter(&self, user_id: i32) -> Result<Vec<Invite>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Invites::InviteId,
                Invites::InviterId,
                Invites::InvitedId,
                Invites::CreatedAt,
            ])
            .from(Invites::Table)
            .and_where(Expr::col(Invites::InviterId).eq(user_id))
            .order_by(Invites::CreatedAt, Order::Desc)
            .build_sqlx(PostgresQueryBuilder);

        let invites = sqlx::query_as_with::<_, Invite, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch invites for user_id={user_id}: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(invites)
    }
}
