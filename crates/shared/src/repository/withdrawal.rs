use crate::model::transaction::{PointTransaction, TransactionType};
use crate::model::withdrawal::{Withdrawal, WithdrawalStatus, WithdrawalWithUser};
use crate::repository::ledger::apply_entry;
use crate::schema::user::Users;
use crate::schema::withdrawal::Withdrawals;
use crate::utils::AppError;
use crate::{abstract_trait::WithdrawalRepositoryTrait, config::ConnectionPool};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sea_query::{Alias, Expr, Func, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

pub struct WithdrawalRepository {
    db_pool: ConnectionPool,
}

impl WithdrawalRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }

    /// Distinguishes a missing row from a lost compare-and-set race after a
    /// pending-only update matched nothing.
    async fn classify_failed_transition(&self, withdrawal_id: i32) -> AppError {
        let (sql, values) = Query::select()
            .column(Withdrawals::Status)
            .from(Withdrawals::Table)
            .and_where(Expr::col(Withdrawals::WithdrawalId).eq(withdrawal_id))
            .build_sqlx(PostgresQueryBuilder);

        match sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
        {
            Ok(Some(status)) => AppError::Conflict(format!(
                "Withdrawal with id {withdrawal_id} is already {status}"
            )),
            Ok(None) => AppError::NotFound(format!(
                "Withdrawal with id {withdrawal_id} not found"
            )),
            Err(e) => AppError::SqlxError(e),
        }
    }
}

#[async_trait]
impl WithdrawalRepositoryTrait for WithdrawalRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        status: Option<WithdrawalStatus>,
    ) -> Result<(Vec<WithdrawalWithUser>, i64), AppError> {
        info!(
            "📄 [Withdrawal] Fetching withdrawals - page: {page}, page_size: {page_size}, status: {:?}",
            status
        );

        let page = if page > 0 { page } else { 1 };
        let page_size = if page_size > 0 { page_size } else { 10 };
        let offset = (page - 1) * page_size;

        let mut select_query = Query::select();
        select_query
            .columns([
                (Withdrawals::Table, Withdrawals::WithdrawalId),
                (Withdrawals::Table, Withdrawals::UserId),
                (Withdrawals::Table, Withdrawals::Amount),
                (Withdrawals::Table, Withdrawals::PixType),
                (Withdrawals::Table, Withdrawals::PixKey),
                (Withdrawals::Table, Withdrawals::Status),
                (Withdrawals::Table, Withdrawals::CreatedAt),
                (Withdrawals::Table, Withdrawals::UpdatedAt),
            ])
            .expr_as(
                Expr::col((Users::Table, Users::Name)),
                Alias::new("user_name"),
            )
            .expr_as(
                Expr::col((Users::Table, Users::Email)),
                Alias::new("user_email"),
            )
            .from(Withdrawals::Table)
            .left_join(
                Users::Table,
                Expr::col((Withdrawals::Table, Withdrawals::UserId))
                    .equals((Users::Table, Users::UserId)),
            )
            .order_by((Withdrawals::Table, Withdrawals::CreatedAt), Order::Desc)
            .limit(page_size as u64)
            .offset(offset as u64);

        if let Some(ref status) = status {
            select_query
                .and_where(Expr::col((Withdrawals::Table, Withdrawals::Status)).eq(status.as_str()));
        }

        let (sql, values) = select_query.build_sqlx(PostgresQueryBuilder);

        let withdrawals = sqlx::query_as_with::<_, WithdrawalWithUser, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Withdrawal] Failed to fetch withdrawals: {e}");
                AppError::SqlxError(e)
            })?;

        let mut count_query = Query::select();
        count_query
            .expr(Func::count(Expr::col(Withdrawals::WithdrawalId)))
            .from(Withdrawals::Table);

        if let Some(ref status) = status {
            count_query.and_where(Expr::col(Withdrawals::Status).eq(status.as_str()));
        }

        let (count_sql, count_values) = count_query.build_sqlx(PostgresQueryBuilder);

        let total: i64 = sqlx::query_scalar_with(&count_sql, count_values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Withdrawal] Failed to count withdrawals: {e}");
                AppError::SqlxError(e)
            })?;

        info!(
            "✅ [Withdrawal] Fetched {} of {total} withdrawals",
            withdrawals.len()
        );

        Ok((withdrawals, total))
    }

    async fn find_by_id(&self, withdrawal_id: i32) -> Result<Option<Withdrawal>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Withdrawals::WithdrawalId,
                Withdrawals::UserId,
                Withdrawals::Amount,
                Withdrawals::PixType,
                Withdrawals::PixKey,
                Withdrawals::Status,
                Withdrawals::CreatedAt,
                Withdrawals::UpdatedAt,
            ])
            .from(Withdrawals::Table)
            .and_where(Expr::col(Withdrawals::WithdrawalId).eq(withdrawal_id))
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_as_with::<_, Withdrawal, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Withdrawal] Failed to fetch withdrawal id={withdrawal_id}: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(row)
    }

    async fn approve(&self, withdrawal_id: i32) -> Result<Withdrawal, AppError> {
        info!("✔️ [Withdrawal] Approving withdrawal id={withdrawal_id}");

        // Pending-only compare-and-set, so two admins racing on the same
        // request cannot both win.
        let (sql, values) = Query::update()
            .table(Withdrawals::Table)
            .value(Withdrawals::Status, WithdrawalStatus::Approved.as_str())
            .value(Withdrawals::UpdatedAt, Expr::current_timestamp())
            .and_where(Expr::col(Withdrawals::WithdrawalId).eq(withdrawal_id))
            .and_where(Expr::col(Withdrawals::Status).eq(WithdrawalStatus::Pending.as_str()))
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_as_with::<_, Withdrawal, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Withdrawal] Failed to approve withdrawal id={withdrawal_id}: {e}");
                AppError::SqlxError(e)
            })?;

        match row {
            Some(withdrawal) => {
                info!(
                    "✅ [Withdrawal] Approved withdrawal id={withdrawal_id} for user_id={}",
                    withdrawal.user_id
                );
                Ok(withdrawal)
            }
            None => Err(self.classify_failed_transition(withdrawal_id).await),
        }
    }

    async fn reject(
        &self,
        withdrawal_id: i32,
        refund_points_per_unit: i64,
    ) -> Result<(Withdrawal, PointTransaction), AppError> {
        info!("🚫 [Withdrawal] Rejecting withdrawal id={withdrawal_id}");

        let mut tx = self.db_pool.begin().await?;

        let (sql, values) = Query::update()
            .table(Withdrawals::Table)
            .value(Withdrawals::Status, WithdrawalStatus::Rejected.as_str())
            .value(Withdrawals::UpdatedAt, Expr::current_timestamp())
            .and_where(Expr::col(Withdrawals::WithdrawalId).eq(withdrawal_id))
            .and_where(Expr::col(Withdrawals::Status).eq(WithdrawalStatus::Pending.as_str()))
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_as_with::<_, Withdrawal, _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ [Withdrawal] Failed to reject withdrawal id={withdrawal_id}: {e}");
                AppError::SqlxError(e)
            })?;

        let Some(withdrawal) = row else {
            return Err(self.classify_failed_transition(withdrawal_id).await);
        };

        let refund = (withdrawal.amount * Decimal::from(refund_points_per_unit))
            .floor()
            .to_i64()
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Refund amount out of range for withdrawal id={withdrawal_id}"
                ))
            })?;

        let description = format!("Saque rejeitado - devolução de {refund} pontos");

        // Status flip and refund commit or roll back together.
        let entry = apply_entry(
            &mut tx,
            withdrawal.user_id,
            refund,
            TransactionType::Credit,
            &description,
        )
        .await?;

        tx.commit().await?;

        info!(
            "✅ [Withdrawal] Rejected withdrawal id={withdrawal_id}, refunded {refund} points to user_id={}",
            withdrawal.user_id
        );

        Ok((withdrawal, entry))
    }

    async fn count_by_status(&self, status: WithdrawalStatus) -> Result<i64, AppError> {
        let (sql, values) = Query::select()
            .expr(Func::count(Expr::col(Withdrawals::WithdrawalId)))
            .from(Withdrawals::Table)
            .and_where(Expr::col(Withdrawals::Status).eq(status.as_str()))
            .build_sqlx(PostgresQueryBuilder);

        let total: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Withdrawal] Failed to count {status} withdrawals: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(total)
    }

    async fn sum_amount_by_status(&self, status: WithdrawalStatus) -> Result<Decimal, AppError> {
        let (sql, values) = Query::select()
            .expr(Func::coalesce([
                Func::sum(Expr::col(Withdrawals::Amount)).into(),
                Expr::val(Decimal::ZERO).into(),
            ]))
            .from(Withdrawals::Table)
            .and_where(Expr::col(Withdrawals::Status).eq(status.as_str()))
            .build_sqlx(PostgresQueryBuilder);

        let total: Decimal = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Withdrawal] Failed to sum {status} withdrawal amounts: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(total)
    }
}
