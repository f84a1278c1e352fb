//! Subject records. Each subject belongs to one course by id; the
//! reference is not checked on insert and survives course deletion.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAddReq {
    pub subject_name: String,
    pub course_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectUpdateReq {
    pub id: i64,
    pub subject_name: String,
    pub course_id: i64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub id: i64,
    pub subject_name: String,
    pub course_id: Option<i64>,
}

fn to_dto(row: &Row) -> Result<SubjectDto, AppError> {
    Ok(SubjectDto {
        id: row.i64("Id")?,
        subject_name: row.text("SubjectName")?,
        course_id: row.opt_i64("CourseId")?,
    })
}

pub async fn subject_add(db: &Database, req: SubjectAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Subjects (SubjectName, CourseId) VALUES (@SubjectName, @CourseId)",
        SqlParams::new()
            .with("@SubjectName", req.subject_name)
            .with("@CourseId", req.course_id),
    )
    .await
}

pub async fn subject_update(db: &Database, req: SubjectUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Subjects SET SubjectName = @SubjectName, CourseId = @CourseId WHERE Id = @Id",
        SqlParams::new()
            .with("@SubjectName", req.subject_name)
            .with("@CourseId", req.course_id)
            .with("@Id", req.id),
    )
    .await
}

pub async fn subject_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete("DELETE FROM Subjects WHERE Id = @Id", SqlParams::new().with("@Id", id))
        .await
}

pub async fn subject_list(db: &Database) -> Result<Vec<SubjectDto>, AppError> {
    let rows = db.view("SELECT * FROM Subjects").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn subject_get(db: &Database, id: i64) -> Result<Option<SubjectDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Subjects WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
