//! Record use cases, one module per entity.

mod course;
mod exam;
mod mark;
mod room;
mod student;
mod subject;
mod timetable;
mod user;

pub use course::{
    course_add, course_delete, course_get, course_list, course_update, CourseAddReq, CourseDto,
    CourseUpdateReq,
};
pub use exam::{
    exam_add, exam_delete, exam_get, exam_list, exam_update, ExamAddReq, ExamDto, ExamUpdateReq,
};
pub use mark::{
    mark_add, mark_delete, mark_get, mark_list, mark_update, MarkAddReq, MarkDto, MarkUpdateReq,
};
pub use room::{
    room_add, room_delete, room_get, room_list, room_update, RoomAddReq, RoomDto, RoomUpdateReq,
};
pub use student::{
    student_add, student_delete, student_get, student_list, student_update, StudentAddReq,
    StudentDto, StudentUpdateReq,
};
pub use subject::{
    subject_add, subject_delete, subject_get, subject_list, subject_update, SubjectAddReq,
    SubjectDto, SubjectUpdateReq,
};
pub use timetable::{
    timetable_add, timetable_delete, timetable_get, timetable_list, timetable_update,
    TimetableAddReq, TimetableDto, TimetableUpdateReq,
};
pub use user::{
    login, user_add, user_delete, user_get, user_list, user_update, LoginReq, UserAddReq, UserDto,
    UserUpdateReq,
};
