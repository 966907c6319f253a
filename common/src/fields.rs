//! 寛容なフィールド解決モジュール
//!
//! サーバー側の命名ゆれ（`roll_no` / `roll` / `rollNo` など）を吸収する。
//! 候補キーを優先順に試し、最初に存在したキーの値を返す。
//! 値が`null`でもキーが存在すれば「存在」として扱う（欠落とは区別する）。

use serde_json::Value;

/// 候補キーを順に試し、最初に存在したキーの値を返す
///
/// どの候補も存在しない場合は`None`（欠落センチネル）。
/// レコードがオブジェクトでない場合も`None`。
pub fn resolve<'a>(record: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    let map = record.as_object()?;
    for key in candidates {
        if let Some(value) = map.get(*key) {
            return Some(value);
        }
    }
    None
}

/// 表示用ラッパー。候補が全滅、または値が`null`なら空文字列
pub fn resolve_text(record: &Value, candidates: &[&str]) -> String {
    display(resolve(record, candidates))
}

/// null/欠落安全な文字列化
///
/// `None`と`Value::Null`は空文字列。数値の`0`は`"0"`のまま残る。
/// "null"や"undefined"という文字列が画面に出ることはない。
pub fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// 試験ID（`exam_id` / `id` / `examId`）
pub fn exam_id(exam: &Value) -> Option<&Value> {
    resolve(exam, &["exam_id", "id", "examId"])
}

/// 科目コード（`course_code` / `course` / `courseCode`）
pub fn exam_course(exam: &Value) -> String {
    resolve_text(exam, &["course_code", "course", "courseCode"])
}

/// 試験日（`exam_date` / `date`）
pub fn exam_date(exam: &Value) -> String {
    resolve_text(exam, &["exam_date", "date"])
}

/// 学生ID（`student_id` / `id` / `studentId`）
pub fn student_id(student: &Value) -> Option<&Value> {
    resolve(student, &["student_id", "id", "studentId"])
}

/// 学籍番号（`roll_no` / `roll` / `rollNo`）
pub fn student_roll(student: &Value) -> String {
    resolve_text(student, &["roll_no", "roll", "rollNo"])
}

/// 学生氏名（`name` / `full_name`）
pub fn student_name(student: &Value) -> String {
    resolve_text(student, &["name", "full_name"])
}

/// 監督者ID（`invigilator_id` / `id`）
pub fn invigilator_id(invigilator: &Value) -> Option<&Value> {
    resolve(invigilator, &["invigilator_id", "id"])
}

/// 職員番号（`employee_no` / `emp`）
pub fn invigilator_employee_no(invigilator: &Value) -> String {
    resolve_text(invigilator, &["employee_no", "emp"])
}

/// 部屋ID（座席割当の描画時のみ使用）
pub fn room_id(room: &Value) -> Option<&Value> {
    resolve(room, &["room_id", "id", "roomId"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_first_present_key_wins() {
        let record = json!({"roll_no": "R001", "roll": "R999"});
        let value = resolve(&record, &["roll_no", "roll", "rollNo"]);
        assert_eq!(value, Some(&json!("R001")));
    }

    #[test]
    fn test_resolve_falls_through_to_later_candidate() {
        let record = json!({"rollNo": "R002"});
        let value = resolve(&record, &["roll_no", "roll", "rollNo"]);
        assert_eq!(value, Some(&json!("R002")));
    }

    #[test]
    fn test_resolve_independent_of_record_key_order() {
        // レコード側のキー順に関わらず候補リストの順が優先される
        let a = serde_json::from_str::<Value>(r#"{"roll": "B", "roll_no": "A"}"#).unwrap();
        let b = serde_json::from_str::<Value>(r#"{"roll_no": "A", "roll": "B"}"#).unwrap();
        assert_eq!(resolve(&a, &["roll_no", "roll"]), Some(&json!("A")));
        assert_eq!(resolve(&b, &["roll_no", "roll"]), Some(&json!("A")));
    }

    #[test]
    fn test_resolve_no_match_is_sentinel() {
        let record = json!({"name": "Asha"});
        assert_eq!(resolve(&record, &["roll_no", "roll"]), None);
    }

    #[test]
    fn test_resolve_null_value_counts_as_present() {
        // JSの `obj[k] !== undefined` と同じ扱い
        let record = json!({"roll_no": null, "roll": "R003"});
        assert_eq!(resolve(&record, &["roll_no", "roll"]), Some(&Value::Null));
    }

    #[test]
    fn test_resolve_non_object_record() {
        assert_eq!(resolve(&json!("not an object"), &["id"]), None);
        assert_eq!(resolve(&Value::Null, &["id"]), None);
    }

    #[test]
    fn test_display_null_and_missing_are_empty() {
        assert_eq!(display(None), "");
        assert_eq!(display(Some(&Value::Null)), "");
    }

    #[test]
    fn test_display_zero_is_not_empty() {
        assert_eq!(display(Some(&json!(0))), "0");
    }

    #[test]
    fn test_display_string_is_unquoted() {
        assert_eq!(display(Some(&json!("CS101"))), "CS101");
    }

    #[test]
    fn test_resolve_text_defaults_to_empty() {
        let record = json!({});
        assert_eq!(resolve_text(&record, &["roll_no", "roll"]), "");
    }

    #[test]
    fn test_entity_accessors() {
        let exam = json!({"examId": 7, "course": "CS101", "date": "2024-01-01"});
        assert_eq!(exam_id(&exam), Some(&json!(7)));
        assert_eq!(exam_course(&exam), "CS101");
        assert_eq!(exam_date(&exam), "2024-01-01");

        let student = json!({"id": 3, "full_name": "Asha", "rollNo": "R010"});
        assert_eq!(student_id(&student), Some(&json!(3)));
        assert_eq!(student_name(&student), "Asha");
        assert_eq!(student_roll(&student), "R010");

        let inv = json!({"invigilator_id": 5, "emp": "E-22"});
        assert_eq!(invigilator_id(&inv), Some(&json!(5)));
        assert_eq!(invigilator_employee_no(&inv), "E-22");
    }
}
