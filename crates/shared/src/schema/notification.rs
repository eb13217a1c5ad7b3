use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Notifications {
    Table,
    NotificationId,
    UserId,
    Title,
    Message,
    IsRead,
    CreatedAt,
}
