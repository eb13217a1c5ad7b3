use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Ranking {
    Table,
    RankingId,
    UserId,
    DailyRank,
    TotalRank,
    LastUpdated,
}
