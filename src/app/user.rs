//! User accounts and the login check.
//!
//! Passwords are stored and compared as plain text. That matches the data
//! this app has always kept on disk; changing it means a schema redesign.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAddReq {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateReq {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReq {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: String,
}

fn to_dto(row: &Row) -> Result<UserDto, AppError> {
    Ok(UserDto {
        id: row.i64("Id")?,
        username: row.text("Username")?,
        role: row.text("Role")?,
    })
}

pub async fn user_add(db: &Database, req: UserAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Users (Username, Password, Role) VALUES (@Username, @Password, @Role)",
        SqlParams::new()
            .with("@Username", req.username)
            .with("@Password", req.password)
            .with("@Role", req.role),
    )
    .await
}

pub async fn user_update(db: &Database, req: UserUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Users SET Username = @Username, Password = @Password, Role = @Role WHERE Id = @Id",
        SqlParams::new()
            .with("@Username", req.username)
            .with("@Password", req.password)
            .with("@Role", req.role)
            .with("@Id", req.id),
    )
    .await
}

pub async fn user_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete("DELETE FROM Users WHERE Id = @Id", SqlParams::new().with("@Id", id))
        .await
}

pub async fn user_list(db: &Database) -> Result<Vec<UserDto>, AppError> {
    let rows = db.view("SELECT * FROM Users").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn user_get(db: &Database, id: i64) -> Result<Option<UserDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Users WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}

/// Credential check for the login screen. `None` means no matching user;
/// there is no distinction between unknown username and wrong password.
pub async fn login(db: &Database, req: LoginReq) -> Result<Option<UserDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Users WHERE Username = @Username AND Password = @Password",
            SqlParams::new()
                .with("@Username", req.username)
                .with("@Password", req.password),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
