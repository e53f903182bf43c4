#[derive(Debug, Default, PartialEq, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
