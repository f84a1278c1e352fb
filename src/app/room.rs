//! Room records.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAddReq {
    pub room_name: String,
    pub room_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdateReq {
    pub id: i64,
    pub room_name: String,
    pub room_type: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i64,
    pub room_name: String,
    pub room_type: String,
}

fn to_dto(row: &Row) -> Result<RoomDto, AppError> {
    Ok(RoomDto {
        id: row.i64("Id")?,
        room_name: row.text("RoomName")?,
        room_type: row.text("RoomType")?,
    })
}

pub async fn room_add(db: &Database, req: RoomAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Rooms (RoomName, RoomType) VALUES (@RoomName, @RoomType)",
        SqlParams::new()
            .with("@RoomName", req.room_name)
            .with("@RoomType", req.room_type),
    )
    .await
}

pub async fn room_update(db: &Database, req: RoomUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Rooms SET RoomName = @RoomName, RoomType = @RoomType WHERE Id = @Id",
        SqlParams::new()
            .with("@RoomName", req.room_name)
            .with("@RoomType", req.room_type)
            .with("@Id", req.id),
    )
    .await
}

pub async fn room_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete("DELETE FROM Rooms WHERE Id = @Id", SqlParams::new().with("@Id", id))
        .await
}

pub async fn room_list(db: &Database) -> Result<Vec<RoomDto>, AppError> {
    let rows = db.view("SELECT * FROM Rooms").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn room_get(db: &Database, id: i64) -> Result<Option<RoomDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Rooms WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
