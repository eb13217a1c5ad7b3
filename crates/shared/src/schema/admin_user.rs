use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum AdminUsers {
    Table,
    AdminId,
    Email,
    Password,
    Name,
    Role,
    CreatedAt,
    UpdatedAt,
    LastSignIn,
}
