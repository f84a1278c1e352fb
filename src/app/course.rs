//! Course records.

use crate::error::AppError;
use crate::infra::{Database, Row, SqlParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAddReq {
    pub course_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdateReq {
    pub id: i64,
    pub course_name: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    pub course_name: String,
}

fn to_dto(row: &Row) -> Result<CourseDto, AppError> {
    Ok(CourseDto {
        id: row.i64("Id")?,
        course_name: row.text("CourseName")?,
    })
}

pub async fn course_add(db: &Database, req: CourseAddReq) -> Result<(), AppError> {
    db.add(
        "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
        SqlParams::new().with("@CourseName", req.course_name),
    )
    .await
}

pub async fn course_update(db: &Database, req: CourseUpdateReq) -> Result<(), AppError> {
    db.edit(
        "UPDATE Courses SET CourseName = @CourseName WHERE Id = @Id",
        SqlParams::new()
            .with("@CourseName", req.course_name)
            .with("@Id", req.id),
    )
    .await
}

/// Deleting a course does not cascade: subjects and students keep their
/// CourseId and simply dangle.
pub async fn course_delete(db: &Database, id: i64) -> Result<(), AppError> {
    db.delete("DELETE FROM Courses WHERE Id = @Id", SqlParams::new().with("@Id", id))
        .await
}

pub async fn course_list(db: &Database) -> Result<Vec<CourseDto>, AppError> {
    let rows = db.view("SELECT * FROM Courses").await?;
    rows.iter().map(to_dto).collect()
}

pub async fn course_get(db: &Database, id: i64) -> Result<Option<CourseDto>, AppError> {
    let rows = db
        .view_with(
            "SELECT * FROM Courses WHERE Id = @Id",
            SqlParams::new().with("@Id", id),
        )
        .await?;
    rows.first().map(to_dto).transpose()
}
