use crate::model::notification::Notification;
use crate::schema::notification::Notifications;
use crate::utils::AppError;
use crate::{abstract_trait::NotificationRepositoryTrait, config::ConnectionPool};
use async_trait::async_trait;
use sea_query::{Expr, Func, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

pub struct NotificationRepository {
    db_pool: ConnectionPool,
}

impl NotificationRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

const NOTIFICATION_COLUMNS: [Notifications; 6] = [
    Notifications::NotificationId,
    Notifications::UserId,
    Notifications::Title,
    Notifications::Message,
    Notifications::IsRead,
    Notifications::CreatedAt,
];

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        user_id: Option<i32>,
    ) -> Result<(Vec<Notification>, i64), AppError> {
        info!("Fetching notifications - page: {page}, page_size: {page_size}, user_id: {user_id:?}");

        let page = if page > 0 { page } else { 1 };
        let page_size = if page_size > 0 { page_size } else { 10 };
        let offset = (page - 1) * page_size;

        let mut select_query = Query::select();
        select_query
            .columns(NOTIFICATION_COLUMNS)
            .from(Notifications::Table)
            .order_by(Notifications::CreatedAt, Order::Desc)
            .limit(page_size as u64)
            .offset(offset as u64);

        if let Some(id) = user_id {
            select_query.and_where(Expr::col(Notifications::UserId).eq(id));
        }

        let (sql, values) = select_query.build_sqlx(PostgresQueryBuilder);

        let notifications = sqlx::query_as_with::<_, Notification, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch notifications: {e}");
                AppError::SqlxError(e)
            })?;

        let mut count_query = Query::select();
        count_query
            .expr(Func::count(Expr::col(Notifications::NotificationId)))
            .from(Notifications::Table);

        if let Some(id) = user_id {
            count_query.and_where(Expr::col(Notifications::UserId).eq(id));
        }

        let (count_sql, count_values) = count_query.build_sqlx(PostgresQueryBuilder);

        let total: i64 = sqlx::query_scalar_with(&count_sql, count_values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to count notifications: {e}");
                AppError::SqlxError(e)
            })?;

        Ok((notifications, total))
    }

    async fn create(
        &self,
        user_id: Option<i32>,
        title: &str,
        message: &str,
    ) -> Result<Notification, AppError> {
        info!(
            "Creating {} notification: {title}",
            if user_id.is_some() { "targeted" } else { "broadcast" }
        );

        // A broadcast is a single row with NULL user_id, not one row per user.
        let (sql, values) = Query::insert()
            .into_table(Notifications::Table)
            .columns([
                Notifications::UserId,
                Notifications::Title,
                Notifications::Message,
            ])
            .values([user_id.into(), title.into(), message.into()])
            .unwrap()
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let notification = sqlx::query_as_with::<_, Notification, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to create notification: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(notification)
    }
}
