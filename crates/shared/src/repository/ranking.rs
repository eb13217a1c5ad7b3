use crate::model::ranking::RankingWithUser;
use crate::schema::ranking::Ranking;
use crate::schema::user::Users;
use crate::utils::AppError;
use crate::{abstract_trait::RankingRepositoryTrait, config::ConnectionPool};
use async_trait::async_trait;
use sea_query::{Alias, Expr, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

pub struct RankingRepository {
    db_pool: ConnectionPool,
}

impl RankingRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RankingRepositoryTrait for RankingRepository {
    async fn find_top(&self, limit: i32) -> Result<Vec<RankingWithUser>, AppError> {
        info!("🏆 [Ranking] Fetching top {limit} ranking entries");

        let limit = if limit > 0 { limit } else { 20 };

        let (sql, values) = Query::select()
            .columns([
                (Ranking::Table, Ranking::RankingId),
                (Ranking::Table, Ranking::UserId),
                (Ranking::Table, Ranking::DailyRank),
                (Ranking::Table, Ranking::TotalRank),
                (Ranking::Table, Ranking::LastUpdated),
            ])
            .expr_as(
                Expr::col((Users::Table, Users::Name)),
                Alias::new("user_name"),
            )
            .expr_as(
                Expr::col((Users::Table, Users::Email)),
                Alias::new("user_email"),
            )
            .expr_as(
                Expr::col((Users::Table, Users::Points)),
                Alias::new("user_points"),
            )
            .from(Ranking::Table)
            .left_join(
                Users::Table,
                Expr::col((Ranking::Table, Ranking::UserId)).equals((Users::Table, Users::UserId)),
            )
            .order_by((Ranking::Table, Ranking::TotalRank), Order::Asc)
            .limit(limit as u64)
            .build_sqlx(PostgresQueryBuilder);

        let rows = sqlx::query_as_with::<_, RankingWithUser, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Ranking] Failed to fetch top ranking: {e}");
                AppError::SqlxError(e)
            })?;

        info!("✅ [Ranking] Retrieved {} ranking entries", rows.len());

        Ok(rows)
    }

    async fn recompute_total_ranks(&self) -> Result<u64, AppError> {
        info!("🔄 [Ranking] Recomputing total ranks from user balances");

        // Dense rank over the live balances, upserted through the UNIQUE
        // user_id constraint so every user ends up with exactly one row.
        let result = sqlx::query(
            r#"
            INSERT INTO ranking (user_id, total_rank, last_updated)
            SELECT user_id, DENSE_RANK() OVER (ORDER BY points DESC), now()
            FROM users
            ON CONFLICT (user_id) DO UPDATE
            SET total_rank = EXCLUDED.total_rank,
                last_updated = EXCLUDED.last_updated
            "#,
        )
        .execute(&self.db_pool)
        .await
        .map_err(|e| {
            error!("❌ [Ranking] Failed to recompute total ranks: {e}");
            AppError::SqlxError(e)
        })?;

        let affected = result.rows_affected();
        info!("✅ [Ranking] Recomputed ranks for {affected} users");

        Ok(affected)
    }
}
