//! SQLite connection handling, schema initialization, and the generic
//! add/edit/delete/view executor every record operation goes through.

use crate::error::AppError;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::{Connection, ToSql};
use serde::ser::SerializeMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Default database file name. Deleting the file resets all data.
pub const DB_FILE: &str = "unicomtic.db";

/// One scalar as the driver stores it. No coercion happens on read:
/// whatever SQLite hands back is what the row carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    fn from_ref(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => SqlValue::Null,
            ValueRef::Integer(v) => SqlValue::Integer(v),
            ValueRef::Real(v) => SqlValue::Real(v),
            ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Integer(v as i64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Null => ToSqlOutput::Owned(Value::Null),
            SqlValue::Integer(v) => ToSqlOutput::Owned(Value::Integer(*v)),
            SqlValue::Real(v) => ToSqlOutput::Owned(Value::Real(*v)),
            SqlValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            SqlValue::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

/// Named parameter bindings. Names carry the placeholder prefix used in the
/// statement text (`@Username`, `@CourseId`, ...).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SqlParams {
    entries: Vec<(String, SqlValue)>,
}

impl SqlParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named value, builder style.
    pub fn with(mut self, name: &str, value: impl Into<SqlValue>) -> Self {
        self.entries.push((name.to_string(), value.into()));
        self
    }

    fn bindings(&self) -> Vec<(&str, &dyn ToSql)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
            .collect()
    }
}

/// One result record: column name to value, in result-set column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<(String, SqlValue)>,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in result-set order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn i64(&self, column: &str) -> Result<i64, AppError> {
        self.get(column)
            .and_then(SqlValue::as_i64)
            .ok_or_else(|| AppError::Db(format!("column {column} is not an integer")))
    }

    pub fn opt_i64(&self, column: &str) -> Result<Option<i64>, AppError> {
        match self.get(column) {
            None => Err(AppError::Db(format!("no column {column}"))),
            Some(SqlValue::Null) => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| AppError::Db(format!("column {column} is not an integer"))),
        }
    }

    pub fn text(&self, column: &str) -> Result<String, AppError> {
        match self.get(column) {
            None => Err(AppError::Db(format!("no column {column}"))),
            Some(SqlValue::Null) => Ok(String::new()),
            Some(value) => value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| AppError::Db(format!("column {column} is not text"))),
        }
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS Users (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Username TEXT,
        Password TEXT,
        Role TEXT
    )",
    "CREATE TABLE IF NOT EXISTS Courses (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        CourseName TEXT
    )",
    "CREATE TABLE IF NOT EXISTS Subjects (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        SubjectName TEXT,
        CourseId INTEGER,
        FOREIGN KEY(CourseId) REFERENCES Courses(Id)
    )",
    "CREATE TABLE IF NOT EXISTS Students (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT,
        CourseId INTEGER,
        FOREIGN KEY(CourseId) REFERENCES Courses(Id)
    )",
    "CREATE TABLE IF NOT EXISTS Exams (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        ExamName TEXT,
        SubjectId INTEGER,
        ExamDate TEXT,
        FOREIGN KEY(SubjectId) REFERENCES Subjects(Id)
    )",
    "CREATE TABLE IF NOT EXISTS Marks (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        StudentId INTEGER,
        ExamId INTEGER,
        Score INTEGER,
        FOREIGN KEY(StudentId) REFERENCES Students(Id),
        FOREIGN KEY(ExamId) REFERENCES Exams(Id)
    )",
    "CREATE TABLE IF NOT EXISTS Rooms (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        RoomName TEXT,
        RoomType TEXT
    )",
    "CREATE TABLE IF NOT EXISTS Timetables (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        SubjectId INTEGER,
        Lecturer TEXT,
        RoomId INTEGER,
        TimeSlot TEXT,
        FOREIGN KEY(SubjectId) REFERENCES Subjects(Id),
        FOREIGN KEY(RoomId) REFERENCES Rooms(Id)
    )",
];

/// Handle on the database file. Cheap to clone; every operation opens its
/// own connection, so overlapping calls share nothing in-process and rely
/// on SQLite's file-level serialization.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

// The declared foreign keys are documentation only: dangling CourseIds and
// friends are legal data here, and the bundled SQLite build turns
// enforcement on by default, so switch it off on every connection.
fn open_connection(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "foreign_keys", false)?;
    Ok(conn)
}

impl Database {
    /// Open (creating if needed) the database at `path` and ensure all
    /// tables exist. Idempotent: never drops or alters existing data.
    /// Failure here is fatal, callers should abort startup.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Init(e.to_string()))?;
        }
        let conn = open_connection(&path).map_err(|e| AppError::Init(e.to_string()))?;
        for ddl in SCHEMA {
            conn.execute(ddl, [])
                .map_err(|e| AppError::Init(e.to_string()))?;
        }
        log::info!("database ready at {:?}", path);
        Ok(Self { path })
    }

    /// Open at the platform data directory: `<data_dir>/unicomtic/unicomtic.db`.
    pub fn open_default() -> Result<Self, AppError> {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(base.join("unicomtic").join(DB_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Execute an INSERT with named parameters.
    pub async fn add(&self, sql: &str, params: SqlParams) -> Result<(), AppError> {
        self.execute(sql, params).await
    }

    /// Execute an UPDATE with named parameters.
    pub async fn edit(&self, sql: &str, params: SqlParams) -> Result<(), AppError> {
        self.execute(sql, params).await
    }

    /// Execute a DELETE with named parameters.
    pub async fn delete(&self, sql: &str, params: SqlParams) -> Result<(), AppError> {
        self.execute(sql, params).await
    }

    /// Run a query and materialize every row, in result-set order.
    pub async fn view(&self, sql: &str) -> Result<Vec<Row>, AppError> {
        self.query(sql, SqlParams::new()).await
    }

    /// `view` with named parameters, for filtered lookups.
    pub async fn view_with(&self, sql: &str, params: SqlParams) -> Result<Vec<Row>, AppError> {
        self.query(sql, params).await
    }

    async fn execute(&self, sql: &str, params: SqlParams) -> Result<(), AppError> {
        let db = self.clone();
        let sql = sql.to_string();
        tokio::task::spawn_blocking(move || db.execute_blocking(&sql, &params))
            .await
            .map_err(|e| AppError::Task(e.to_string()))?
    }

    async fn query(&self, sql: &str, params: SqlParams) -> Result<Vec<Row>, AppError> {
        let db = self.clone();
        let sql = sql.to_string();
        tokio::task::spawn_blocking(move || db.query_blocking(&sql, &params))
            .await
            .map_err(|e| AppError::Task(e.to_string()))?
    }

    // Fresh connection per statement; each call is its own implicit
    // transaction. No pooling, no retry-on-busy.
    fn execute_blocking(&self, sql: &str, params: &SqlParams) -> Result<(), AppError> {
        log::debug!("execute: {sql}");
        let conn = open_connection(&self.path)?;
        let mut stmt = conn.prepare(sql)?;
        stmt.execute(&params.bindings()[..])?;
        Ok(())
    }

    fn query_blocking(&self, sql: &str, params: &SqlParams) -> Result<Vec<Row>, AppError> {
        log::debug!("query: {sql}");
        let conn = open_connection(&self.path)?;
        let mut stmt = conn.prepare(sql)?;
        let names: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let mut rows = stmt.query(&params.bindings()[..])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut columns = Vec::with_capacity(names.len());
            for (i, name) in names.iter().enumerate() {
                columns.push((name.clone(), SqlValue::from_ref(row.get_ref(i)?)));
            }
            out.push(Row { columns });
        }
        Ok(out)
    }
}
