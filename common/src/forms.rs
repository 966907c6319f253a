//! 作成フォームの入力検証とペイロード構築
//!
//! 検証は「trim後に空でないこと」だけ。失敗時の`Error::Validation`の
//! メッセージがそのままユーザーへの通知文になる。

use crate::error::{Error, Result};
use serde_json::{json, Value};

fn require(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::Validation(message.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

/// 部屋作成（コードと収容人数が必須）
pub fn room_payload(code: &str, capacity: &str, building: &str, floor: &str) -> Result<Value> {
    let code = require(code, "部屋コードと収容人数を入力してください")?;
    let capacity = require(capacity, "部屋コードと収容人数を入力してください")?;
    Ok(json!({
        "room_code": code,
        "capacity": capacity,
        "building": building.trim(),
        "floor": floor.trim(),
    }))
}

/// 試験作成（4項目すべて必須）
///
/// `course_title`にはサーバー実装に合わせて科目コードを転記する。
pub fn exam_payload(course: &str, date: &str, start: &str, end: &str) -> Result<Value> {
    let message = "すべての項目を入力してください";
    let course = require(course, message)?;
    let date = require(date, message)?;
    let start = require(start, message)?;
    let end = require(end, message)?;
    Ok(json!({
        "course_code": course,
        "course_title": course,
        "exam_date": date,
        "start_time": start,
        "end_time": end,
    }))
}

/// 学生登録（学籍番号と氏名が必須、学年は任意でnull可）
pub fn student_payload(roll: &str, name: &str, dept: &str, year: &str) -> Result<Value> {
    let roll = require(roll, "学籍番号と氏名を入力してください")?;
    let name = require(name, "学籍番号と氏名を入力してください")?;
    let year = match year.trim() {
        "" => Value::Null,
        y => Value::String(y.to_string()),
    };
    Ok(json!({
        "roll": roll,
        "name": name,
        "dept": dept.trim(),
        "year": year,
    }))
}

/// 監督者登録（氏名のみ必須）
pub fn invigilator_payload(name: &str, emp: &str, dept: &str) -> Result<Value> {
    let name = require(name, "氏名を入力してください")?;
    Ok(json!({
        "name": name,
        "emp": emp.trim(),
        "dept": dept.trim(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_payload_requires_code_and_capacity() {
        assert!(room_payload("", "40", "", "").is_err());
        assert!(room_payload("A-101", "  ", "", "").is_err());

        let payload = room_payload(" A-101 ", "40", "Main", "2").unwrap();
        assert_eq!(payload["room_code"], "A-101");
        assert_eq!(payload["capacity"], "40");
        assert_eq!(payload["building"], "Main");
    }

    #[test]
    fn test_exam_payload_any_blank_field_rejected() {
        for (c, d, s, e) in [
            ("", "2024-01-01", "09:00", "11:00"),
            ("CS101", "", "09:00", "11:00"),
            ("CS101", "2024-01-01", "", "11:00"),
            ("CS101", "2024-01-01", "09:00", "   "),
        ] {
            let result = exam_payload(c, d, s, e);
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[test]
    fn test_exam_payload_mirrors_course_title() {
        let payload = exam_payload("CS101", "2024-01-01", "09:00", "11:00").unwrap();
        assert_eq!(payload["course_code"], "CS101");
        assert_eq!(payload["course_title"], "CS101");
        assert_eq!(payload["exam_date"], "2024-01-01");
    }

    #[test]
    fn test_student_payload_year_optional() {
        let payload = student_payload("R001", "Asha", "CSE", "").unwrap();
        assert_eq!(payload["year"], Value::Null);

        let payload = student_payload("R001", "Asha", "", "2").unwrap();
        assert_eq!(payload["year"], "2");
    }

    #[test]
    fn test_student_payload_requires_roll_and_name() {
        assert!(student_payload("", "Asha", "", "").is_err());
        assert!(student_payload("R001", "", "", "").is_err());
    }

    #[test]
    fn test_invigilator_payload_requires_name_only() {
        assert!(invigilator_payload("  ", "E-1", "CSE").is_err());
        let payload = invigilator_payload("Rao", "", "").unwrap();
        assert_eq!(payload["name"], "Rao");
        assert_eq!(payload["emp"], "");
    }

    #[test]
    fn test_validation_message_is_user_facing() {
        let err = exam_payload("", "", "", "").unwrap_err();
        assert_eq!(err.to_string(), "すべての項目を入力してください");
    }
}
