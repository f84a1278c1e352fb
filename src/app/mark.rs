//! Marks linking students to exams. Both references must exist for the
//! record to mean anything, but neither is checked on insert.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAddReq {
    pub student_id: i64,
    pub exam_id: i64,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkUpdateReq {
    pub id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub score: i64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkDto {
    pub id: i64,
    pub student_id: Option<i64>,
    pub exam_id: Option<i64>,
    pub score: i64,
}

fn to_dto(row: &Row) -> Result<MarkDto, AppError> {
    Ok(MarkDto {
        id: row.i64("Id")?,
        student_id: row.opt_i64("StudentId")?,
        exam_id: row.opt_i64("ExamId")?,
        score: row.i64("Score")?,
    })
}

pub async fn mark_add(db: &Database, req: MarkAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Marks (StudentId, ExamId, Score) VALUES (@StudentId, @ExamId, @Score)",
        SqlParams::new()
            .with("@StudentId", req.student_id)
            .with("@ExamId", req.exam_id)
            .with("@Score", req.score),
    )
    .await
}

pub async fn mark_update(db: &Database, req: MarkUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Marks SET StudentId = @StudentId, ExamId = @ExamId, Score = @Score WHERE Id = @Id",
        SqlParams::new()
            .with("@StudentId", req.student_id)
            .with("@ExamId", req.exam_id)
            .with("@Score", req.score)
            .with("@Id", req.id),
    )
    .await
}

pub async fn mark_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete("DELETE FROM Marks WHERE Id = @Id", SqlParams::new().with("@Id", id))
        .await
}

pub async fn mark_list(db: &Database) -> Result<Vec<MarkDto>, AppError> {
    let rows = db.view("SELECT * FROM Marks").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn mark_get(db: &Database, id: i64) -> Result<Option<MarkDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Marks WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
