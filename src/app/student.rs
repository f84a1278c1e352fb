//! Student records.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAddReq {
    pub name: String,
    pub course_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdateReq {
    pub id: i64,
    pub name: String,
    pub course_id: i64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i64,
    pub name: String,
    pub course_id: Option<i64>,
}

fn to_dto(row: &Row) -> Result<StudentDto, AppError> {
    Ok(StudentDto {
        id: row.i64("Id")?,
        name: row.text("Name")?,
        course_id: row.opt_i64("CourseId")?,
    })
}

pub async fn student_add(db: &Database, req: StudentAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Students (Name, CourseId) VALUES (@Name, @CourseId)",
        SqlParams::new()
            .with("@Name", req.name)
            .with("@CourseId", req.course_id),
    )
    .await
}

pub async fn student_update(db: &Database, req: StudentUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Students SET Name = @Name, CourseId = @CourseId WHERE Id = @Id",
        SqlParams::new()
            .with("@Name", req.name)
            .with("@CourseId", req.course_id)
            .with("@Id", req.id),
    )
    .await
}

pub async fn student_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete("DELETE FROM Students WHERE Id = @Id", SqlParams::new().with("@Id", id))
        .await
}

pub async fn student_list(db: &Database) -> Result<Vec<StudentDto>, AppError> {
    let rows = db.view("SELECT * FROM Students").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn student_get(db: &Database, id: i64) -> Result<Option<StudentDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Students WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
