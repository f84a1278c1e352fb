//! Exam records. Dates arrive as calendar dates and are stored as
//! ISO-8601 text, which is how the table has always kept them.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAddReq {
    pub exam_name: String,
    pub subject_id: i64,
    pub exam_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamUpdateReq {
    pub id: i64,
    pub exam_name: String,
    pub subject_id: i64,
    pub exam_date: NaiveDate,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamDto {
    pub id: i64,
    pub exam_name: String,
    pub subject_id: Option<i64>,
    pub exam_date: String,
}

fn to_dto(row: &Row) -> Result<ExamDto, AppError> {
    Ok(ExamDto {
        id: row.i64("Id")?,
        exam_name: row.text("ExamName")?,
        subject_id: row.opt_i64("SubjectId")?,
        exam_date: row.text("ExamDate")?,
    })
}

pub async fn exam_add(db: &Database, req: ExamAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Exams (ExamName, SubjectId, ExamDate) VALUES (@ExamName, @SubjectId, @ExamDate)",
        SqlParams::new()
            .with("@ExamName", req.exam_name)
            .with("@SubjectId", req.subject_id)
            .with("@ExamDate", req.exam_date.to_string()),
    )
    .await
}

pub async fn exam_update(db: &Database, req: ExamUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Exams SET ExamName = @ExamName, SubjectId = @SubjectId, ExamDate = @ExamDate WHERE Id = @Id",
        SqlParams::new()
            .with("@ExamName", req.exam_name)
            .with("@SubjectId", req.subject_id)
            .with("@ExamDate", req.exam_date.to_string())
            .with("@Id", req.id),
    )
    .await
}

pub async fn exam_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete("DELETE FROM Exams WHERE Id = @Id", SqlParams::new().with("@Id", id))
        .await
}

pub async fn exam_list(db: &Database) -> Result<Vec<ExamDto>, AppError> {
    let rows = db.view("SELECT * FROM Exams").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn exam_get(db: &Database, id: i64) -> Result<Option<ExamDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Exams WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
