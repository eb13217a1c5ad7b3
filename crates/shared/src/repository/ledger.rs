use crate::model::transaction::{PointTransaction, TransactionType, TransactionWithUser};
use crate::schema::notification::Notifications;
use crate::schema::transaction::PointTransactions;
use crate::schema::user::Users;
use crate::utils::AppError;
use crate::{abstract_trait::LedgerRepositoryTrait, config::ConnectionPool};
use async_trait::async_trait;
use sea_query::{Alias, Expr, Func, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

pub struct LedgerRepository {
    db_pool: ConnectionPool,
}

impl LedgerRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

/// Applies one ledger entry inside the caller's transaction: balance update
/// first (zero affected rows aborts with NotFound before anything else is
/// written), then the append-only log row, then the paired notification.
/// Used by the credit/debit mutations here and by the withdrawal-rejection
/// refund, so a crash can never leave the log and the balance disagreeing.
pub(crate) async fn apply_entry(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i32,
    points: i64,
    kind: TransactionType,
    description: &str,
) -> Result<PointTransaction, AppError> {
    let delta = points * kind.signum();

    let (sql, values) = Query::update()
        .table(Users::Table)
        .value(Users::Points, Expr::col(Users::Points).add(delta))
        .value(Users::UpdatedAt, Expr::current_timestamp())
        .and_where(Expr::col(Users::UserId).eq(user_id))
        .build_sqlx(PostgresQueryBuilder);

    let updated = sqlx::query_with(&sql, values).execute(&mut **tx).await?;

    if updated.rows_affected() == 0 {
        error!("🟡 [Ledger] User with id {user_id} not found, aborting entry");
        return Err(AppError::NotFound(format!(
            "User with id {user_id} not found"
        )));
    }

    let (sql, values) = Query::insert()
        .into_table(PointTransactions::Table)
        .columns([
            PointTransactions::UserId,
            PointTransactions::Points,
            PointTransactions::TransactionType,
            PointTransactions::Description,
        ])
        .values([
            user_id.into(),
            points.into(),
            kind.as_str().into(),
            description.into(),
        ])
        .unwrap()
        .returning_all()
        .build_sqlx(PostgresQueryBuilder);

    let entry = sqlx::query_as_with::<_, PointTransaction, _>(&sql, values)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            error!("❌ [Ledger] Failed to append {kind} entry for user_id={user_id}: {e}");
            AppError::SqlxError(e)
        })?;

    let (title, message) = match kind {
        TransactionType::Credit => (
            "Pontos Adicionados! 🎉",
            format!("Você recebeu {points} pontos! {description}"),
        ),
        TransactionType::Debit => (
            "Pontos Removidos",
            format!("{points} pontos foram removidos da sua conta. {description}"),
        ),
    };

    let (sql, values) = Query::insert()
        .into_table(Notifications::Table)
        .columns([
            Notifications::UserId,
            Notifications::Title,
            Notifications::Message,
        ])
        .values([user_id.into(), title.into(), message.into()])
        .unwrap()
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_with(&sql, values)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            error!("❌ [Ledger] Failed to create notification for user_id={user_id}: {e}");
            AppError::SqlxError(e)
        })?;

    Ok(entry)
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        user_id: Option<i32>,
    ) -> Result<(Vec<PointTransaction>, i64), AppError> {
        info!(
            "📄 [Ledger] Fetching transactions - page: {page}, page_size: {page_size}, user_id: {:?}",
            user_id
        );

        let page = if page > 0 { page } else { 1 };
        let page_size = if page_size > 0 { page_size } else { 10 };
        let offset = (page - 1) * page_size;

        let mut select_query = Query::select();
        select_query
            .columns([
                PointTransactions::TransactionId,
                PointTransactions::UserId,
                PointTransactions::Points,
                PointTransactions::TransactionType,
                PointTransactions::Description,
                PointTransactions::CreatedAt,
            ])
            .from(PointTransactions::Table)
            .order_by(PointTransactions::CreatedAt, Order::Desc)
            .limit(page_size as u64)
            .offset(offset as u64);

        if let Some(id) = user_id {
            select_query.and_where(Expr::col(PointTransactions::UserId).eq(id));
        }

        let (sql, values) = select_query.build_sqlx(PostgresQueryBuilder);

        let transactions = sqlx::query_as_with::<_, PointTransaction, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Ledger] Failed to fetch transactions: {e}");
                AppError::SqlxError(e)
            })?;

        let mut count_query = Query::select();
        count_query
            .expr(Func::count(Expr::col(PointTransactions::TransactionId)))
            .from(PointTransactions::Table);

        if let Some(id) = user_id {
            count_query.and_where(Expr::col(PointTransactions::UserId).eq(id));
        }

        let (count_sql, count_values) = count_query.build_sqlx(PostgresQueryBuilder);

        let total: i64 = sqlx::query_scalar_with(&count_sql, count_values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Ledger] Failed to count transactions: {e}");
                AppError::SqlxError(e)
            })?;

        info!(
            "✅ [Ledger] Fetched {} of {total} transactions",
            transactions.len()
        );

        Ok((transactions, total))
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<PointTransaction>, AppError> {
        info!("👤 [Ledger] Fetching transaction history for user_id: {user_id}");

        let (sql, values) = Query::select()
            .columns([
                PointTransactions::TransactionId,
                PointTransactions::UserId,
                PointTransactions::Points,
                PointTransactions::TransactionType,
                PointTransactions::Description,
                PointTransactions::CreatedAt,
            ])
            .from(PointTransactions::Table)
            .and_where(Expr::col(PointTransactions::UserId).eq(user_id))
            .order_by(PointTransactions::CreatedAt, Order::Desc)
            .build_sqlx(PostgresQueryBuilder);

        let rows = sqlx::query_as_with::<_, PointTransaction, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Ledger] Failed to fetch history for user_id={user_id}: {e}");
                AppError::SqlxError(e)
            })?;

        info!(
            "✅ [Ledger] Retrieved {} entries for user_id={user_id}",
            rows.len()
        );

        Ok(rows)
    }

    async fn find_recent(&self, limit: i32) -> Result<Vec<TransactionWithUser>, AppError> {
        info!("🕒 [Ledger] Fetching {limit} most recent transactions");

        let limit = if limit > 0 { limit } else { 10 };

        let (sql, values) = Query::select()
            .columns([
                (PointTransactions::Table, PointTransactions::TransactionId),
                (PointTransactions::Table, PointTransactions::UserId),
                (PointTransactions::Table, PointTransactions::Points),
                (PointTransactions::Table, PointTransactions::TransactionType),
                (PointTransactions::Table, PointTransactions::Description),
                (PointTransactions::Table, PointTransactions::CreatedAt),
            ])
            .expr_as(
                Expr::col((Users::Table, Users::Name)),
                Alias::new("user_name"),
            )
            .from(PointTransactions::Table)
            .left_join(
                Users::Table,
                Expr::col((PointTransactions::Table, PointTransactions::UserId))
                    .equals((Users::Table, Users::UserId)),
            )
            .order_by(
                (PointTransactions::Table, PointTransactions::CreatedAt),
                Order::Desc,
            )
            .limit(limit as u64)
            .build_sqlx(PostgresQueryBuilder);

        let rows = sqlx::query_as_with::<_, TransactionWithUser, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("❌ [Ledger] Failed to fetch recent transactions: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(rows)
    }

    async fn credit(
        &self,
        user_id: i32,
        points: i64,
        description: &str,
    ) -> Result<PointTransaction, AppError> {
        info!("💰 [Ledger] Crediting {points} points to user_id={user_id}");

        let mut tx = self.db_pool.begin().await?;

        let entry = apply_entry(&mut tx, user_id, points, TransactionType::Credit, description)
            .await?;

        tx.commit().await?;

        info!(
            "✅ [Ledger] Credit committed: transaction_id={} user_id={user_id} points={points}",
            entry.transaction_id
        );

        Ok(entry)
    }

    async fn debit(
        &self,
        user_id: i32,
        points: i64,
        description: &str,
    ) -> Result<PointTransaction, AppError> {
        info!("💸 [Ledger] Debiting {points} points from user_id={user_id}");

        let mut tx = self.db_pool.begin().await?;

        // No floor-at-zero: the balance is allowed to go negative.
        let entry = apply_entry(&mut tx, user_id, points, TransactionType::Debit, description)
            .await?;

        tx.commit().await?;

        info!(
            "✅ [Ledger] Debit committed: transaction_id={} user_id={user_id} points={points}",
            entry.transaction_id
        );

        Ok(entry)
    }
}
