use crate::model::admin_user::AdminUser;
use crate::schema::admin_user::AdminUsers;
use crate::utils::AppError;
use crate::{abstract_trait::AdminUserRepositoryTrait, config::ConnectionPool};
use async_trait::async_trait;
use sea_query::{Expr, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

pub struct AdminUserRepository {
    db_pool: ConnectionPool,
}

impl AdminUserRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

const ADMIN_COLUMNS: [AdminUsers; 8] = [
    AdminUsers::AdminId,
    AdminUsers::Email,
    AdminUsers::Password,
    AdminUsers::Name,
    AdminUsers::Role,
    AdminUsers::CreatedAt,
    AdminUsers::UpdatedAt,
    AdminUsers::LastSignIn,
];

#[async_trait]
impl AdminUserRepositoryTrait for AdminUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        info!("Looking up admin by email: {email}");

        let (sql, values) = Query::select()
            .columns(ADMIN_COLUMNS)
            .from(AdminUsers::Table)
            .and_where(Expr::col(AdminUsers::Email).eq(email))
            .build_sqlx(PostgresQueryBuilder);

        let admin = sqlx::query_as_with::<_, AdminUser, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch admin by email: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(admin)
    }

    async fn find_by_id(&self, admin_id: i32) -> Result<Option<AdminUser>, AppError> {
        let (sql, values) = Query::select()
            .columns(ADMIN_COLUMNS)
            .from(AdminUsers::Table)
            .and_where(Expr::col(AdminUsers::AdminId).eq(admin_id))
            .build_sqlx(PostgresQueryBuilder);

        let admin = sqlx::query_as_with::<_, AdminUser, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch admin id={admin_id}: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(admin)
    }

    async fn touch_last_sign_in(&self, admin_id: i32) -> Result<(), AppError> {
        let (sql, values) = Query::update()
            .table(AdminUsers::Table)
            .value(AdminUsers::LastSignIn, Expr::current_timestamp())
            .and_where(Expr::col(AdminUsers::AdminId).eq(admin_id))
            .build_sqlx(PostgresQueryBuilder);

        sqlx::query_with(&sql, values)
            .execute(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to update last_sign_in for admin id={admin_id}: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(())
    }
}
