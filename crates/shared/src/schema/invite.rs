use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Invites {
    Table,
    InviteId,
    InviterId,
    InvitedId,
    CreatedAt,
}
