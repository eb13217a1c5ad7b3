use anyhow::{Result, bail};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    abstract_trait::{
        DynAdminUserRepository, DynAuthService, DynDashboardService, DynHashing,
        DynInviteRepository, DynJwtService, DynLedgerRepository, DynLedgerService,
        DynNotificationRepository, DynNotificationService, DynRankingRepository,
        DynRankingService, DynRankingUpdateStrategy, DynUserRepository, DynUserService,
        DynWithdrawalRepository, DynWithdrawalService,
    },
    config::ConnectionPool,
    repository::{
        admin_user::AdminUserRepository, invite::InviteRepository, ledger::LedgerRepository,
        notification::NotificationRepository, ranking::RankingRepository, user::UserRepository,
        withdrawal::WithdrawalRepository,
    },
    service::{
        AuthService, DashboardService, LedgerService, NoopRankingUpdate, NotificationService,
        RankingService, RecomputeRankingUpdate, UserService, WithdrawalService,
    },
    utils::Metrics,
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub ledger_service: DynLedgerService,
    pub notification_service: DynNotificationService,
    pub withdrawal_service: DynWithdrawalService,
    pub ranking_service: DynRankingService,
    pub dashboard_service: DynDashboardService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("user_service", &"DynUserService")
            .field("ledger_service", &"DynLedgerService")
            .field("notification_service", &"DynNotificationService")
            .field("withdrawal_service", &"DynWithdrawalService")
            .field("ranking_service", &"DynRankingService")
            .field("dashboard_service", &"DynDashboardService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(
        pool: ConnectionPool,
        hashing: DynHashing,
        jwt_config: DynJwtService,
        metrics: Arc<Mutex<Metrics>>,
        registry: &mut Registry,
        refund_points_per_unit: i64,
        ranking_update_strategy: &str,
    ) -> Result<Self> {
        let admin_repository =
            Arc::new(AdminUserRepository::new(pool.clone())) as DynAdminUserRepository;
        let user_repository = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let invite_repository =
            Arc::new(InviteRepository::new(pool.clone())) as DynInviteRepository;
        let ledger_repository =
            Arc::new(LedgerRepository::new(pool.clone())) as DynLedgerRepository;
        let notification_repository =
            Arc::new(NotificationRepository::new(pool.clone())) as DynNotificationRepository;
        let withdrawal_repository =
            Arc::new(WithdrawalRepository::new(pool.clone())) as DynWithdrawalRepository;
        let ranking_repository =
            Arc::new(RankingRepository::new(pool.clone())) as DynRankingRepository;

        let ranking_strategy: DynRankingUpdateStrategy = match ranking_update_strategy {
            "noop" => Arc::new(NoopRankingUpdate),
            "recompute" => Arc::new(RecomputeRankingUpdate::new(ranking_repository.clone())),
            other => bail!("unknown ranking update strategy '{other}'"),
        };

        info!(
            "Ranking update strategy: {}",
            ranking_strategy.name()
        );

        let auth_service = Arc::new(
            AuthService::new(
                admin_repository.clone(),
                hashing.clone(),
                jwt_config,
                metrics.clone(),
                registry,
            )
            .await,
        ) as DynAuthService;

        let user_service = Arc::new(
            UserService::new(
                user_repository.clone(),
                invite_repository.clone(),
                metrics.clone(),
                registry,
            )
            .await,
        ) as DynUserService;

        let ledger_service = Arc::new(
            LedgerService::new(
                ledger_repository.clone(),
                user_repository.clone(),
                metrics.clone(),
                registry,
            )
            .await,
        ) as DynLedgerService;

        let notification_service = Arc::new(
            NotificationService::new(notification_repository.clone(), metrics.clone(), registry)
                .await,
        ) as DynNotificationService;

        let withdrawal_service = Arc::new(
            WithdrawalService::new(
                withdrawal_repository.clone(),
                metrics.clone(),
                registry,
                refund_points_per_unit,
            )
            .await,
        ) as DynWithdrawalService;

        let ranking_service = Arc::new(
            RankingService::new(
                ranking_repository.clone(),
                ranking_strategy,
                metrics.clone(),
                registry,
            )
            .await,
        ) as DynRankingService;

        let dashboard_service = Arc::new(
            DashboardService::new(
                user_repository.clone(),
                withdrawal_repository.clone(),
                metrics.clone(),
                registry,
            )
            .await,
        ) as DynDashboardService;

        Ok(Self {
            auth_service,
            user_service,
            ledger_service,
            notification_service,
            withdrawal_service,
            ranking_service,
            dashboard_service,
        })
    }
}
