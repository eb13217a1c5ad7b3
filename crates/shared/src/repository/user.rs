use crate::model::user::User;
use crate::schema::user::Users;
use crate::utils::AppError;
use crate::{abstract_trait::UserRepositoryTrait, config::ConnectionPool};
use async_trait::async_trait;
use sea_query::{Cond, Expr, Func, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

pub struct UserRepository {
    db_pool: ConnectionPool,
}

impl UserRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

const USER_COLUMNS: [Users; 10] = [
    Users::UserId,
    Users::Username,
    Users::Email,
    Users::Name,
    Users::ProfilePicture,
    Users::Points,
    Users::InviteCode,
    Users::CreatedAt,
    Users::LastLogin,
    Users::UpdatedAt,
];

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        search: Option<String>,
    ) -> Result<(Vec<User>, i64), AppError> {
        info!("Fetching users - page: {page}, page_size: {page_size}, search: {search:?}");

        let page = if page > 0 { page } else { 1 };
        let page_size = if page_size > 0 { page_size } else { 10 };
        let offset = (page - 1) * page_size;

        let mut select_query = Query::select();
        select_query
            .columns(USER_COLUMNS)
            .from(Users::Table)
            .order_by(Users::CreatedAt, Order::Desc)
            .limit(page_size as u64)
            .offset(offset as u64);

        if let Some(ref term) = search {
            let pattern = format!("%{term}%");
            select_query.cond_where(
                Cond::any()
                    .add(Expr::col(Users::Name).like(&pattern))
                    .add(Expr::col(Users::Email).like(&pattern)),
            );
        }

        let (sql, values) = select_query.build_sqlx(PostgresQueryBuilder);

        let users = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch users: {e}");
                AppError::SqlxError(e)
            })?;

        let mut count_query = Query::select();
        count_query
            .expr(Func::count(Expr::col(Users::UserId)))
            .from(Users::Table);

        if let Some(ref term) = search {
            let pattern = format!("%{term}%");
            count_query.cond_where(
                Cond::any()
                    .add(Expr::col(Users::Name).like(&pattern))
                    .add(Expr::col(Users::Email).like(&pattern)),
            );
        }

        let (count_sql, count_values) = count_query.build_sqlx(PostgresQueryBuilder);

        let total: i64 = sqlx::query_scalar_with(&count_sql, count_values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to count users: {e}");
                AppError::SqlxError(e)
            })?;

        Ok((users, total))
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let (sql, values) = Query::select()
            .columns(USER_COLUMNS)
            .from(Users::Table)
            .and_where(Expr::col(Users::UserId).eq(user_id))
            .build_sqlx(PostgresQueryBuilder);

        let user = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch user id={user_id}: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(user)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let (sql, values) = Query::select()
            .expr(Func::count(Expr::col(Users::UserId)))
            .from(Users::Table)
            .build_sqlx(PostgresQueryBuilder);

        let total: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to count users: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(total)
    }

    async fn sum_points(&self) -> Result<i64, AppError> {
        // SUM(bigint) comes back as NUMERIC, hence the cast.
        let (sql, values) = Query::select()
            .expr(Expr::cust("COALESCE(SUM(points), 0)::BIGINT"))
            .from(Users::Table)
            .build_sqlx(PostgresQueryBuilder);

        let total: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to sum user points: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(total)
    }
}
