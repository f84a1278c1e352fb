//! Schema initializer and generic executor integration tests

use tempfile::TempDir;
use unicomtic::infra::{Database, SqlParams, SqlValue};

// ──────────────────────── Helper ────────────────────────

fn test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = Database::open(dir.path().join("unicomtic.db")).expect("open db");
    (dir, db)
}

// ══════════════════════════════════════════════════════════
//  Schema initializer
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn open_creates_all_tables() {
    let (_dir, db) = test_db();
    for table in [
        "Users",
        "Courses",
        "Subjects",
        "Students",
        "Exams",
        "Marks",
        "Rooms",
        "Timetables",
    ] {
        let rows = db
            .view(&format!("SELECT * FROM {table}"))
            .await
            .unwrap_or_else(|e| panic!("table {table} missing: {e}"));
        assert!(rows.is_empty());
    }
}

#[tokio::test]
async fn open_twice_keeps_existing_data() {
    let (dir, db) = test_db();
    db.add(
        "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
        SqlParams::new().with("@CourseName", "Computing"),
    )
    .await
    .unwrap();

    // Second open on the same file must not error or drop rows
    let db = Database::open(dir.path().join("unicomtic.db")).expect("reopen");
    let rows = db.view("SELECT * FROM Courses").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("CourseName").unwrap(), "Computing");
}

#[test]
fn open_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("a").join("b").join("unicomtic.db");
    let db = Database::open(&nested).expect("open nested");
    assert_eq!(db.path(), nested.as_path());
    assert!(nested.exists());
}

#[test]
fn open_unwritable_location_is_init_error() {
    let err = Database::open("/proc/no-such-place/unicomtic.db").unwrap_err();
    assert_eq!(err.code(), "INIT_ERROR");
}

// ══════════════════════════════════════════════════════════
//  add / view
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn add_then_view_returns_inserted_row() {
    let (_dir, db) = test_db();
    db.add(
        "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
        SqlParams::new().with("@CourseName", "Computing"),
    )
    .await
    .unwrap();

    let rows = db.view("SELECT * FROM Courses").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("Id"), Some(&SqlValue::Integer(1)));
    assert_eq!(
        rows[0].get("CourseName"),
        Some(&SqlValue::Text("Computing".to_string()))
    );
}

#[tokio::test]
async fn view_preserves_result_set_column_order() {
    let (_dir, db) = test_db();
    db.add(
        "INSERT INTO Rooms (RoomName, RoomType) VALUES (@RoomName, @RoomType)",
        SqlParams::new()
            .with("@RoomName", "Lab 1")
            .with("@RoomType", "Lab"),
    )
    .await
    .unwrap();

    let rows = db
        .view("SELECT RoomType, RoomName, Id FROM Rooms")
        .await
        .unwrap();
    assert_eq!(rows[0].column_names(), vec!["RoomType", "RoomName", "Id"]);
}

#[tokio::test]
async fn view_rows_follow_result_set_order() {
    let (_dir, db) = test_db();
    for name in ["Zeta", "Alpha", "Mid"] {
        db.add(
            "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
            SqlParams::new().with("@CourseName", name),
        )
        .await
        .unwrap();
    }

    // No implicit sorting: insertion order without ORDER BY
    let rows = db.view("SELECT CourseName FROM Courses").await.unwrap();
    let names: Vec<String> = rows.iter().map(|r| r.text("CourseName").unwrap()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);

    let rows = db
        .view("SELECT CourseName FROM Courses ORDER BY CourseName")
        .await
        .unwrap();
    let names: Vec<String> = rows.iter().map(|r| r.text("CourseName").unwrap()).collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

#[tokio::test]
async fn view_with_filters_by_named_parameter() {
    let (_dir, db) = test_db();
    for name in ["One", "Two"] {
        db.add(
            "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
            SqlParams::new().with("@CourseName", name),
        )
        .await
        .unwrap();
    }

    let rows = db
        .view_with(
            "SELECT * FROM Courses WHERE Id = @Id",
            SqlParams::new().with("@Id", 2),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("CourseName").unwrap(), "Two");
}

#[tokio::test]
async fn row_serializes_as_json_object() {
    let (_dir, db) = test_db();
    db.add(
        "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
        SqlParams::new().with("@CourseName", "Computing"),
    )
    .await
    .unwrap();

    let rows = db.view("SELECT * FROM Courses").await.unwrap();
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json, serde_json::json!({"Id": 1, "CourseName": "Computing"}));
}

#[tokio::test]
async fn declared_foreign_keys_are_not_enforced() {
    let (_dir, db) = test_db();
    // No Courses row 42 exists; the insert must still land
    db.add(
        "INSERT INTO Subjects (SubjectName, CourseId) VALUES (@SubjectName, @CourseId)",
        SqlParams::new()
            .with("@SubjectName", "Databases")
            .with("@CourseId", 42),
    )
    .await
    .unwrap();

    let rows = db.view("SELECT * FROM Subjects").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].opt_i64("CourseId").unwrap(), Some(42));

    // Deleting a referenced row is equally unchecked
    db.add(
        "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
        SqlParams::new().with("@CourseName", "Computing"),
    )
    .await
    .unwrap();
    db.edit(
        "UPDATE Subjects SET CourseId = @CourseId WHERE Id = @Id",
        SqlParams::new().with("@CourseId", 1).with("@Id", 1),
    )
    .await
    .unwrap();
    db.delete(
        "DELETE FROM Courses WHERE Id = @Id",
        SqlParams::new().with("@Id", 1),
    )
    .await
    .unwrap();
    let rows = db.view("SELECT * FROM Subjects").await.unwrap();
    assert_eq!(rows[0].opt_i64("CourseId").unwrap(), Some(1));
}

#[tokio::test]
async fn null_columns_come_back_as_null() {
    let (_dir, db) = test_db();
    db.add(
        "INSERT INTO Subjects (SubjectName) VALUES (@SubjectName)",
        SqlParams::new().with("@SubjectName", "Floating"),
    )
    .await
    .unwrap();

    let rows = db.view("SELECT * FROM Subjects").await.unwrap();
    assert_eq!(rows[0].get("CourseId"), Some(&SqlValue::Null));
    assert_eq!(rows[0].opt_i64("CourseId").unwrap(), None);
}

// ══════════════════════════════════════════════════════════
//  edit / delete
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn edit_changes_only_the_targeted_row() {
    let (_dir, db) = test_db();
    for name in ["First", "Second"] {
        db.add(
            "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
            SqlParams::new().with("@CourseName", name),
        )
        .await
        .unwrap();
    }

    db.edit(
        "UPDATE Courses SET CourseName = @CourseName WHERE Id = @Id",
        SqlParams::new().with("@CourseName", "Renamed").with("@Id", 1),
    )
    .await
    .unwrap();

    let rows = db.view("SELECT * FROM Courses ORDER BY Id").await.unwrap();
    assert_eq!(rows[0].text("CourseName").unwrap(), "Renamed");
    assert_eq!(rows[1].text("CourseName").unwrap(), "Second");
}

#[tokio::test]
async fn delete_then_view_by_id_returns_no_rows() {
    let (_dir, db) = test_db();
    db.add(
        "INSERT INTO Courses (CourseName) VALUES (@CourseName)",
        SqlParams::new().with("@CourseName", "Doomed"),
    )
    .await
    .unwrap();

    db.delete(
        "DELETE FROM Courses WHERE Id = @Id",
        SqlParams::new().with("@Id", 1),
    )
    .await
    .unwrap();

    let rows = db
        .view_with(
            "SELECT * FROM Courses WHERE Id = @Id",
            SqlParams::new().with("@Id", 1),
        )
        .await
        .unwrap();
    assert!(rows.is_empty());
}

// ══════════════════════════════════════════════════════════
//  Error surfacing
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn malformed_sql_surfaces_db_error() {
    let (_dir, db) = test_db();
    let err = db
        .add("INSERT INTO NoSuchTable (X) VALUES (@X)", SqlParams::new().with("@X", 1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DB_ERROR");

    let err = db.view("SELECT nonsense FROM").await.unwrap_err();
    assert_eq!(err.code(), "DB_ERROR");
}

#[tokio::test]
async fn error_dto_carries_code_and_message() {
    let (_dir, db) = test_db();
    let err = db.view("not sql at all").await.unwrap_err();
    let dto = err.to_serde();
    assert_eq!(dto.code, "DB_ERROR");
    assert!(!dto.message.is_empty());
}
