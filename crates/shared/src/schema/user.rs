use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Users {
    Table,
    UserId,
    Username,
    Email,
    Name,
    ProfilePicture,
    Points,
    InviteCode,
    CreatedAt,
    LastLogin,
    UpdatedAt,
}
