use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shared::abstract_trait::{
    AdminUserRepositoryTrait, InviteRepositoryTrait, LedgerRepositoryTrait,
    NotificationRepositoryTrait, RankingRepositoryTrait, UserRepositoryTrait,
    WithdrawalRepositoryTrait,
};
use shared::model::admin_user::AdminUser;
use shared::model::invite::Invite;
use shared::model::notification::Notification;
use shared::model::ranking::{RankingEntry, RankingWithUser};
use shared::model::transaction::{PointTransaction, TransactionType, TransactionWithUser};
use shared::model::user::User;
use shared::model::withdrawal::{Withdrawal, WithdrawalStatus, WithdrawalWithUser};
use shared::utils::AppError;

pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

pub fn test_user(user_id: i32, name: &str, points: i64) -> User {
    User {
        user_id,
        username: None,
        email: format!("user{user_id}@example.com"),
        name: Some(name.to_string()),
        profile_picture: None,
        points,
        invite_code: None,
        created_at: now(),
        last_login: None,
        updated_at: now(),
    }
}

pub fn test_withdrawal(withdrawal_id: i32, user_id: i32, amount: Decimal, status: &str) -> Withdrawal {
    Withdrawal {
        withdrawal_id,
        user_id,
        amount,
        pix_type: "cpf".to_string(),
        pix_key: "123.456.789-00".to_string(),
        status: status.to_string(),
        created_at: now(),
        updated_at: now(),
    }
}

#[derive(Default)]
pub struct Db {
    pub users: HashMap<i32, User>,
    pub transactions: Vec<PointTransaction>,
    pub notifications: Vec<Notification>,
    pub withdrawals: HashMap<i32, Withdrawal>,
    pub ranking: HashMap<i32, RankingEntry>,
    pub invites: Vec<Invite>,
    pub admins: HashMap<i32, AdminUser>,
    next_transaction_id: i32,
    next_notification_id: i32,
    next_ranking_id: i32,
}

impl Db {
    /// Mirrors the production ledger entry: balance update, ledger row and
    /// paired notification, all or nothing.
    fn apply_entry(
        &mut self,
        user_id: i32,
        points: i64,
        kind: TransactionType,
        description: &str,
    ) -> Result<PointTransaction, AppError> {
        let user = self.users.get_mut(&user_id).ok_or_else(|| {
            AppError::NotFound(format!("User with id {user_id} not found"))
        })?;

        user.points += points * kind.signum();

        self.next_transaction_id += 1;
        let entry = PointTransaction {
            transaction_id: self.next_transaction_id,
            user_id,
            points,
            transaction_type: kind.as_str().to_string(),
            description: Some(description.to_string()),
            created_at: now(),
        };
        self.transactions.push(entry.clone());

        let (title, message) = match kind {
            TransactionType::Credit => (
                "Pontos Adicionados! 🎉".to_string(),
                format!("Você recebeu {points} pontos! {description}"),
            ),
            TransactionType::Debit => (
                "Pontos Removidos".to_string(),
                format!("{points} pontos foram removidos da sua conta. {description}"),
            ),
        };

        self.next_notification_id += 1;
        self.notifications.push(Notification {
            notification_id: self.next_notification_id,
            user_id: Some(user_id),
            title,
            message,
            is_read: false,
            created_at: now(),
        });

        Ok(entry)
    }
}

#[derive(Clone, Default)]
pub struct MockStore {
    pub db: Arc<Mutex<Db>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) {
        self.db.lock().unwrap().users.insert(user.user_id, user);
    }

    pub fn insert_withdrawal(&self, withdrawal: Withdrawal) {
        self.db
            .lock()
            .unwrap()
            .withdrawals
            .insert(withdrawal.withdrawal_id, withdrawal);
    }

    pub fn insert_ranking(&self, user_id: i32, total_rank: i32) {
        let mut db = self.db.lock().unwrap();
        db.next_ranking_id += 1;
        let entry = RankingEntry {
            ranking_id: db.next_ranking_id,
            user_id,
            daily_rank: None,
            total_rank: Some(total_rank),
            last_updated: now(),
        };
        db.ranking.insert(user_id, entry);
    }

    pub fn insert_invite(&self, invite_id: i32, inviter_id: i32, invited_id: i32) {
        self.db.lock().unwrap().invites.push(Invite {
            invite_id,
            inviter_id,
            invited_id,
            created_at: now(),
        });
    }

    pub fn insert_admin(&self, admin_id: i32, email: &str, password_hash: &str) {
        self.db.lock().unwrap().admins.insert(
            admin_id,
            AdminUser {
                admin_id,
                email: email.to_string(),
                password: password_hash.to_string(),
                name: Some("Admin".to_string()),
                role: "admin".to_string(),
                created_at: now(),
                updated_at: now(),
                last_sign_in: None,
            },
        );
    }

    pub fn user_points(&self, user_id: i32) -> Option<i64> {
        self.db.lock().unwrap().users.get(&user_id).map(|u| u.points)
    }

    pub fn transaction_count(&self) -> usize {
        self.db.lock().unwrap().transactions.len()
    }

    pub fn notification_count(&self) -> usize {
        self.db.lock().unwrap().notifications.len()
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.db.lock().unwrap().notifications.last().cloned()
    }

    pub fn last_transaction(&self) -> Option<PointTransaction> {
        self.db.lock().unwrap().transactions.last().cloned()
    }

    pub fn withdrawal_status(&self, withdrawal_id: i32) -> Option<String> {
        self.db
            .lock()
            .unwrap()
            .withdrawals
            .get(&withdrawal_id)
            .map(|w| w.status.clone())
    }

    pub fn ranking_of(&self, user_id: i32) -> Option<Option<i32>> {
        self.db
            .lock()
            .unwrap()
            .ranking
            .get(&user_id)
            .map(|r| r.total_rank)
    }
}

pub struct MockUserRepository(pub MockStore);

#[async_trait]
impl UserRepositoryTrait for MockUserRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        search: Option<String>,
    ) -> Result<(Vec<User>, i64), AppError> {
        let db = self.0.db.lock().unwrap();
        let mut users: Vec<User> = db
            .users
            .values()
            .filter(|u| match &search {
                Some(term) => {
                    u.name.as_deref().is_some_and(|n| n.contains(term.as_str()))
                        || u.email.contains(term.as_str())
                }
                None => true,
            })
            .cloned()
            .collect();
        users.sort_by_key(|u| u.user_id);

        let total = users.len() as i64;
        let offset = ((page - 1) * page_size) as usize;
        let users = users
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        Ok((users, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self.0.db.lock().unwrap().users.get(&id).cloned())
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Ok(self.0.db.lock().unwrap().users.len() as i64)
    }

    async fn sum_points(&self) -> Result<i64, AppError> {
        Ok(self.0.db.lock().unwrap().users.values().map(|u| u.points).sum())
    }
}

pub struct MockLedgerRepository(pub MockStore);

#[async_trait]
impl LedgerRepositoryTrait for MockLedgerRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        user_id: Option<i32>,
    ) -> Result<(Vec<PointTransaction>, i64), AppError> {
        let db = self.0.db.lock().unwrap();
        let mut rows: Vec<PointTransaction> = db
            .transactions
            .iter()
            .filter(|t| user_id.is_none_or(|id| t.user_id == id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.transaction_id.cmp(&a.transaction_id));

        let total = rows.len() as i64;
        let offset = ((page - 1) * page_size) as usize;
        let rows = rows
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        Ok((rows, total))
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<PointTransaction>, AppError> {
        let db = self.0.db.lock().unwrap();
        let mut rows: Vec<PointTransaction> = db
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.transaction_id.cmp(&a.transaction_id));
        Ok(rows)
    }

    async fn find_recent(&self, limit: i32) -> Result<Vec<TransactionWithUser>, AppError> {
        let db = self.0.db.lock().unwrap();
        let mut rows: Vec<TransactionWithUser> = db
            .transactions
            .iter()
            .map(|t| TransactionWithUser {
                transaction_id: t.transaction_id,
                user_id: t.user_id,
                points: t.points,
                transaction_type: t.transaction_type.clone(),
                description: t.description.clone(),
                created_at: t.created_at,
                user_name: db.users.get(&t.user_id).and_then(|u| u.name.clone()),
            })
            .collect();
        rows.sort_by(|a, b| b.transaction_id.cmp(&a.transaction_id));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn credit(
        &self,
        user_id: i32,
        points: i64,
        description: &str,
    ) -> Result<PointTransaction, AppError> {
        self.0
            .db
            .lock()
            .unwrap()
            .apply_entry(user_id, points, TransactionType::Credit, description)
    }

    async fn debit(
        &self,
        user_id: i32,
        points: i64,
        description: &str,
    ) -> Result<PointTransaction, AppError> {
        self.0
            .db
            .lock()
            .unwrap()
            .apply_entry(user_id, points, TransactionType::Debit, description)
    }
}

pub struct MockNotificationRepository(pub MockStore);

#[async_trait]
impl NotificationRepositoryTrait for MockNotificationRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        user_id: Option<i32>,
    ) -> Result<(Vec<Notification>, i64), AppError> {
        let db = self.0.db.lock().unwrap();
        let mut rows: Vec<Notification> = db
            .notifications
            .iter()
            .filter(|n| user_id.is_none_or(|id| n.user_id == Some(id)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.notification_id.cmp(&a.notification_id));

        let total = rows.len() as i64;
        let offset = ((page - 1) * page_size) as usize;
        let rows = rows
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        Ok((rows, total))
    }

    async fn create(
        &self,
        user_id: Option<i32>,
        title: &str,
        message: &str,
    ) -> Result<Notification, AppError> {
        let mut db = self.0.db.lock().unwrap();
        db.next_notification_id += 1;
        let notification = Notification {
            notification_id: db.next_notification_id,
            user_id,
            title: title.to_string(),
            message: message.to_string(),
            is_read: false,
            created_at: now(),
        };
        db.notifications.push(notification.clone());
        Ok(notification)
    }
}

pub struct MockWithdrawalRepository(pub MockStore);

#[async_trait]
impl WithdrawalRepositoryTrait for MockWithdrawalRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        status: Option<WithdrawalStatus>,
    ) -> Result<(Vec<WithdrawalWithUser>, i64), AppError> {
        let db = self.0.db.lock().unwrap();
        let mut rows: Vec<WithdrawalWithUser> = db
            .withdrawals
            .values()
            .filter(|w| status.is_none_or(|s| w.status == s.as_str()))
            .map(|w| WithdrawalWithUser {
                withdrawal_id: w.withdrawal_id,
                user_id: w.user_id,
                amount: w.amount,
                pix_type: w.pix_type.clone(),
                pix_key: w.pix_key.clone(),
                status: w.status.clone(),
                created_at: w.created_at,
                updated_at: w.updated_at,
                user_name: db.users.get(&w.user_id).and_then(|u| u.name.clone()),
                user_email: db.users.get(&w.user_id).map(|u| u.email.clone()),
            })
            .collect();
        rows.sort_by(|a, b| b.withdrawal_id.cmp(&a.withdrawal_id));

        let total = rows.len() as i64;
        let offset = ((page - 1) * page_size) as usize;
        let rows = rows
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        Ok((rows, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Withdrawal>, AppError> {
        Ok(self.0.db.lock().unwrap().withdrawals.get(&id).cloned())
    }

    async fn approve(&self, id: i32) -> Result<Withdrawal, AppError> {
        let mut db = self.0.db.lock().unwrap();
        let withdrawal = db
            .withdrawals
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Withdrawal with id {id} not found")))?;

        if withdrawal.status != WithdrawalStatus::Pending.as_str() {
            return Err(AppError::Conflict(format!(
                "Withdrawal with id {id} is already {}",
                withdrawal.status
            )));
        }

        withdrawal.status = WithdrawalStatus::Approved.as_str().to_string();
        withdrawal.updated_at = now();
        Ok(withdrawal.clone())
    }

    async fn reject(
        &self,
        id: i32,
        refund_points_per_unit: i64,
    ) -> Result<(Withdrawal, PointTransaction), AppError> {
        let mut db = self.0.db.lock().unwrap();
        let withdrawal = db
            .withdrawals
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Withdrawal with id {id} not found")))?;

        if withdrawal.status != WithdrawalStatus::Pending.as_str() {
            return Err(AppError::Conflict(format!(
                "Withdrawal with id {id} is already {}",
                withdrawal.status
            )));
        }

        let refund = (withdrawal.amount * Decimal::from(refund_points_per_unit))
            .floor()
            .to_i64()
            .ok_or_else(|| AppError::InternalError("refund out of range".to_string()))?;

        let description = format!("Saque rejeitado - devolução de {refund} pontos");
        let entry = db.apply_entry(
            withdrawal.user_id,
            refund,
            TransactionType::Credit,
            &description,
        )?;

        let stored = db
            .withdrawals
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Withdrawal with id {id} not found")))?;
        stored.status = WithdrawalStatus::Rejected.as_str().to_string();
        stored.updated_at = now();

        Ok((stored.clone(), entry))
    }

    async fn count_by_status(&self, status: WithdrawalStatus) -> Result<i64, AppError> {
        Ok(self
            .0
            .db
            .lock()
            .unwrap()
            .withdrawals
            .values()
            .filter(|w| w.status == status.as_str())
            .count() as i64)
    }

    async fn sum_amount_by_status(&self, status: WithdrawalStatus) -> Result<Decimal, AppError> {
        Ok(self
            .0
            .db
            .lock()
            .unwrap()
            .withdrawals
            .values()
            .filter(|w| w.status == status.as_str())
            .map(|w| w.amount)
            .sum())
    }
}

pub struct MockRankingRepository(pub MockStore);

#[async_trait]
impl RankingRepositoryTrait for MockRankingRepository {
    async fn find_top(&self, limit: i32) -> Result<Vec<RankingWithUser>, AppError> {
        let db = self.0.db.lock().unwrap();
        let mut rows: Vec<RankingWithUser> = db
            .ranking
            .values()
            .map(|r| RankingWithUser {
                ranking_id: r.ranking_id,
                user_id: r.user_id,
                daily_rank: r.daily_rank,
                total_rank: r.total_rank,
                last_updated: r.last_updated,
                user_name: db.users.get(&r.user_id).and_then(|u| u.name.clone()),
                user_email: db.users.get(&r.user_id).map(|u| u.email.clone()),
                user_points: db.users.get(&r.user_id).map(|u| u.points),
            })
            .collect();
        rows.sort_by_key(|r| r.total_rank.unwrap_or(i32::MAX));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn recompute_total_ranks(&self) -> Result<u64, AppError> {
        let mut db = self.0.db.lock().unwrap();

        let mut balances: Vec<(i32, i64)> =
            db.users.values().map(|u| (u.user_id, u.points)).collect();
        balances.sort_by(|a, b| b.1.cmp(&a.1));

        let mut assignments = Vec::new();
        let mut rank = 0;
        let mut previous: Option<i64> = None;
        for (user_id, points) in balances {
            if previous != Some(points) {
                rank += 1;
                previous = Some(points);
            }
            assignments.push((user_id, rank));
        }

        let count = assignments.len() as u64;
        for (user_id, rank) in assignments {
            if let Some(entry) = db.ranking.get_mut(&user_id) {
                entry.total_rank = Some(rank);
                entry.last_updated = now();
            } else {
                db.next_ranking_id += 1;
                let entry = RankingEntry {
                    ranking_id: db.next_ranking_id,
                    user_id,
                    daily_rank: None,
                    total_rank: Some(rank),
                    last_updated: now(),
                };
                db.ranking.insert(user_id, entry);
            }
        }

        Ok(count)
    }
}

pub struct MockInviteRepository(pub MockStore);

#[async_trait]
impl InviteRepositoryTrait for MockInviteRepository {
    async fn find_by_inviter(&self, user_id: i32) -> Result<Vec<Invite>, AppError> {
        Ok(self
            .0
            .db
            .lock()
            .unwrap()
            .invites
            .iter()
            .filter(|i| i.inviter_id == user_id)
            .cloned()
            .collect())
    }
}

pub struct MockAdminUserRepository(pub MockStore);

#[async_trait]
impl AdminUserRepositoryTrait for MockAdminUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        Ok(self
            .0
            .db
            .lock()
            .unwrap()
            .admins
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<AdminUser>, AppError> {
        Ok(self.0.db.lock().unwrap().admins.get(&id).cloned())
    }

    async fn touch_last_sign_in(&self, id: i32) -> Result<(), AppError> {
        if let Some(admin) = self.0.db.lock().unwrap().admins.get_mut(&id) {
            admin.last_sign_in = Some(now());
        }
        Ok(())
    }
}
