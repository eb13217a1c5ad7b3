use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Withdrawals {
    Table,
    WithdrawalId,
    UserId,
    Amount,
    PixType,
    PixKey,
    Status,
    CreatedAt,
    UpdatedAt,
}
