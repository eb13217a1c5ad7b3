use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum PointTransactions {
    Table,
    TransactionId,
    UserId,
    Points,
    TransactionType,
    Description,
    CreatedAt,
}
