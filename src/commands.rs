//! Command dispatch boundary for a presentation layer.
//!
//! Every form action maps to one [`Command`]. A UI shell deserializes the
//! click payload into a command and awaits [`dispatch`]; mutations resolve
//! to JSON `null`, reads to the serialized DTOs. No UI concern lives here.

use crate::app::{
    course_add, course_delete, course_get, course_list, course_update, exam_add, exam_delete,
    exam_get, exam_list, exam_update, login, mark_add, mark_delete, mark_get, mark_list,
    mark_update, room_add, room_delete, room_get, room_list, room_update, student_add,
    student_delete, student_get, student_list, student_update, subject_add, subject_delete,
    subject_get, subject_list, subject_update, timetable_add, timetable_delete, timetable_get,
    timetable_list, timetable_update, user_add, user_delete, user_get, user_list, user_update,
    CourseAddReq, CourseUpdateReq, ExamAddReq, ExamUpdateReq, LoginReq, MarkAddReq, MarkUpdateReq,
    RoomAddReq, RoomUpdateReq, StudentAddReq, StudentUpdateReq, SubjectAddReq, SubjectUpdateReq,
    TimetableAddReq, TimetableUpdateReq, UserAddReq, UserUpdateReq,
};
use crate::error::AppError;
use crate::infra::Database;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdReq {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", content = "req", rename_all = "camelCase")]
pub enum Command {
    Login(LoginReq),

    UserAdd(UserAddReq),
    UserUpdate(UserUpdateReq),
    UserDelete(IdReq),
    UserList,
    UserGet(IdReq),

    CourseAdd(CourseAddReq),
    CourseUpdate(CourseUpdateReq),
    CourseDelete(IdReq),
    CourseList,
    CourseGet(IdReq),

    SubjectAdd(SubjectAddReq),
    SubjectUpdate(SubjectUpdateReq),
    SubjectDelete(IdReq),
    SubjectList,
    SubjectGet(IdReq),

    StudentAdd(StudentAddReq),
    StudentUpdate(StudentUpdateReq),
    StudentDelete(IdReq),
    StudentList,
    StudentGet(IdReq),

    ExamAdd(ExamAddReq),
    ExamUpdate(ExamUpdateReq),
    ExamDelete(IdReq),
    ExamList,
    ExamGet(IdReq),

    MarkAdd(MarkAddReq),
    MarkUpdate(MarkUpdateReq),
    MarkDelete(IdReq),
    MarkList,
    MarkGet(IdReq),

    RoomAdd(RoomAddReq),
    RoomUpdate(RoomUpdateReq),
    RoomDelete(IdReq),
    RoomList,
    RoomGet(IdReq),

    TimetableAdd(TimetableAddReq),
    TimetableUpdate(TimetableUpdateReq),
    TimetableDelete(IdReq),
    TimetableList,
    TimetableGet(IdReq),
}

fn encoded<T: Serialize>(value: T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Encode(e.to_string()))
}

/// Route one command into the record layer and serialize the outcome.
pub async fn dispatch(db: &Database, command: Command) -> Result<Value, AppError> {
    match command {
        Command::Login(req) => encoded(login(db, req).await?),

        Command::UserAdd(req) => user_add(db, req).await.map(|_| Value::Null),
        Command::UserUpdate(req) => user_update(db, req).await.map(|_| Value::Null),
        Command::UserDelete(req) => user_delete(db, req.id).await.map(|_| Value::Null),
        Command::UserList => encoded(user_list(db).await?),
        Command::UserGet(req) => encoded(user_get(db, req.id).await?),

        Command::CourseAdd(req) => course_add(db, req).await.map(|_| Value::Null),
        Command::CourseUpdate(req) => course_update(db, req).await.map(|_| Value::Null),
        Command::CourseDelete(req) => course_delete(db, req.id).await.map(|_| Value::Null),
        Command::CourseList => encoded(course_list(db).await?),
        Command::CourseGet(req) => encoded(course_get(db, req.id).await?),

        Command::SubjectAdd(req) => subject_add(db, req).await.map(|_| Value::Null),
        Command::SubjectUpdate(req) => subject_update(db, req).await.map(|_| Value::Null),
        Command::SubjectDelete(req) => subject_delete(db, req.id).await.map(|_| Value::Null),
        Command::SubjectList => encoded(subject_list(db).await?),
        Command::SubjectGet(req) => encoded(subject_get(db, req.id).await?),

        Command::StudentAdd(req) => student_add(db, req).await.map(|_| Value::Null),
        Command::StudentUpdate(req) => student_update(db, req).await.map(|_| Value::Null),
        Command::StudentDelete(req) => student_delete(db, req.id).await.map(|_| Value::Null),
        Command::StudentList => encoded(student_list(db).await?),
        Command::StudentGet(req) => encoded(student_get(db, req.id).await?),

        Command::ExamAdd(req) => exam_add(db, req).await.map(|_| Value::Null),
        Command::ExamUpdate(req) => exam_update(db, req).await.map(|_| Value::Null),
        Command::ExamDelete(req) => exam_delete(db, req.id).await.map(|_| Value::Null),
        Command::ExamList => encoded(exam_list(db).await?),
        Command::ExamGet(req) => encoded(exam_get(db, req.id).await?),

        Command::MarkAdd(req) => mark_add(db, req).await.map(|_| Value::Null),
        Command::MarkUpdate(req) => mark_update(db, req).await.map(|_| Value::Null),
        Command::MarkDelete(req) => mark_delete(db, req.id).await.map(|_| Value::Null),
        Command::MarkList => encoded(mark_list(db).await?),
        Command::MarkGet(req) => encoded(mark_get(db, req.id).await?),

        Command::RoomAdd(req) => room_add(db, req).await.map(|_| Value::Null),
        Command::RoomUpdate(req) => room_update(db, req).await.map(|_| Value::Null),
        Command::RoomDelete(req) => room_delete(db, req.id).await.map(|_| Value::Null),
        Command::RoomList => encoded(room_list(db).await?),
        Command::RoomGet(req) => encoded(room_get(db, req.id).await?),

        Command::TimetableAdd(req) => timetable_add(db, req).await.map(|_| Value::Null),
        Command::TimetableUpdate(req) => timetable_update(db, req).await.map(|_| Value::Null),
        Command::TimetableDelete(req) => timetable_delete(db, req.id).await.map(|_| Value::Null),
        Command::TimetableList => encoded(timetable_list(db).await?),
        Command::TimetableGet(req) => encoded(timetable_get(db, req.id).await?),
    }
}
