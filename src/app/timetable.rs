//! Timetable entries. There is no overlap detection: two entries may
//! book the same room in the same slot and both rows are accepted.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableAddReq {
    pub subject_id: i64,
    pub lecturer: String,
    pub room_id: i64,
    pub time_slot: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableUpdateReq {
    pub id: i64,
    pub subject_id: i64,
    pub lecturer: String,
    pub room_id: i64,
    pub time_slot: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDto {
    pub id: i64,
    pub subject_id: Option<i64>,
    pub lecturer: String,
    pub room_id: Option<i64>,
    pub time_slot: String,
}

fn to_dto(row: &Row) -> Result<TimetableDto, AppError> {
    Ok(TimetableDto {
        id: row.i64("Id")?,
        subject_id: row.opt_i64("SubjectId")?,
        lecturer: row.text("Lecturer")?,
        room_id: row.opt_i64("RoomId")?,
        time_slot: row.text("TimeSlot")?,
    })
}

pub async fn timetable_add(db: &Database, req: TimetableAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Timetables (SubjectId, Lecturer, RoomId, TimeSlot) \
         VALUES (@SubjectId, @Lecturer, @RoomId, @TimeSlot)",
        SqlParams::new()
            .with("@SubjectId", req.subject_id)
            .with("@Lecturer", req.lecturer)
            .with("@RoomId", req.room_id)
            .with("@TimeSlot", req.time_slot),
    )
    .await
}

pub async fn timetable_update(db: &Database, req: TimetableUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Timetables SET SubjectId = @SubjectId, Lecturer = @Lecturer, \
         RoomId = @RoomId, TimeSlot = @TimeSlot WHERE Id = @Id",
        SqlParams::new()
            .with("@SubjectId", req.subject_id)
            .with("@Lecturer", req.lecturer)
            .with("@RoomId", req.room_id)
            .with("@TimeSlot", req.time_slot)
            .with("@Id", req.id),
    )
    .await
}

pub async fn timetable_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete(
        "DELETE FROM Timetables WHERE Id = @Id",
        SqlParams::new().with("@Id", id),
    )
    .await
}

pub async fn timetable_list(db: &Database) -> Result<Vec<TimetableDto>, AppError> {
    let rows = db.view("SELECT * FROM Timetables").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn timetable_get(db: &Database, id: i64) -> Result<Option<TimetableDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Timetables WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
