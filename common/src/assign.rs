//! 座席割当応答のモデル
//!
//! 割当アルゴリズムはサーバー側にあり、ここでは応答の
//! `assignments`（部屋ID→座席リスト）を寛容に読み取って
//! 部屋別の内訳を組み立てるだけ。

use crate::fields;
use crate::regs::canonical_key;
use serde::Deserialize;
use serde_json::{Map, Value};

/// `/api/assign/{exam_id}` の応答
///
/// `error`は中断すべき業務エラー、`warning`は続行可能な注意。
/// 本文がJSONとして読めない場合は空の応答に落とす。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignOutcome {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub assignments: Map<String, Value>,
}

impl AssignOutcome {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// 部屋IDに対する座席リスト。生のキー、次いで正規形で引く
    pub fn seats_for(&self, room_id: Option<&Value>) -> &[Value] {
        let key = fields::display(room_id);
        self.assignments
            .get(&key)
            .or_else(|| self.assignments.get(&canonical_key(&key)))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// 部屋別内訳の1件
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomReport {
    pub code: String,
    pub capacity: String,
    pub seats: Vec<SeatRow>,
}

/// 座席1つ分の行（座席番号・学籍番号・氏名）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatRow {
    pub seat: String,
    pub roll: String,
    pub name: String,
}

fn capacity_of(room: &Value) -> f64 {
    match fields::resolve(room, &["capacity"]) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// 収容人数の降順に並べる。同数は元の順序を保つ
pub fn rooms_by_capacity(rooms: &[Value]) -> Vec<&Value> {
    let mut sorted: Vec<&Value> = rooms.iter().collect();
    sorted.sort_by(|a, b| {
        capacity_of(b)
            .partial_cmp(&capacity_of(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

fn seat_row(entry: &Value) -> SeatRow {
    let student = fields::resolve(entry, &["student"]).unwrap_or(&Value::Null);
    SeatRow {
        seat: fields::resolve_text(entry, &["seat"]),
        roll: fields::student_roll(student),
        name: fields::student_name(student),
    }
}

/// 部屋ごとの割当内訳を組み立てる
///
/// 入力の`rooms`はスナップショットの部屋コレクション。割当の無い
/// 部屋も0席の行として含める（元の画面と同じ見え方）。
pub fn room_breakdown(rooms: &[Value], outcome: &AssignOutcome) -> Vec<RoomReport> {
    rooms_by_capacity(rooms)
        .into_iter()
        .map(|room| {
            let seats = outcome
                .seats_for(fields::room_id(room))
                .iter()
                .map(seat_row)
                .collect();
            RoomReport {
                code: fields::resolve_text(room, &["room_code"]),
                capacity: fields::resolve_text(room, &["capacity"]),
                seats,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_garbage_is_empty() {
        let outcome = AssignOutcome::from_body("not json");
        assert!(outcome.error.is_none());
        assert!(outcome.warning.is_none());
        assert!(outcome.assignments.is_empty());
    }

    #[test]
    fn test_seats_for_numeric_and_string_key() {
        let outcome = AssignOutcome::from_body(
            &json!({"assignments": {"3": [{"seat": 1}, {"seat": 2}]}}).to_string(),
        );
        assert_eq!(outcome.seats_for(Some(&json!(3))).len(), 2);
        assert_eq!(outcome.seats_for(Some(&json!("3"))).len(), 2);
        assert!(outcome.seats_for(Some(&json!(4))).is_empty());
        assert!(outcome.seats_for(None).is_empty());
    }

    #[test]
    fn test_rooms_sorted_by_capacity_desc_stable() {
        let rooms = vec![
            json!({"room_id": 1, "room_code": "A", "capacity": 20}),
            json!({"room_id": 2, "room_code": "B", "capacity": 40}),
            json!({"room_id": 3, "room_code": "C", "capacity": 20}),
            json!({"room_id": 4, "room_code": "D", "capacity": "30"}),
        ];
        let sorted = rooms_by_capacity(&rooms);
        let codes: Vec<_> = sorted
            .iter()
            .map(|r| fields::resolve_text(r, &["room_code"]))
            .collect();
        // 同数(A, C)は元の相対順のまま
        assert_eq!(codes, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_rooms_sorted_with_fractional_capacity() {
        // 小数の収容人数も0扱いにせず数値として並べる
        let rooms = vec![
            json!({"room_id": 1, "room_code": "A", "capacity": 2.5}),
            json!({"room_id": 2, "room_code": "B", "capacity": 10}),
            json!({"room_id": 3, "room_code": "C", "capacity": 3}),
        ];
        let codes: Vec<_> = rooms_by_capacity(&rooms)
            .iter()
            .map(|r| fields::resolve_text(r, &["room_code"]))
            .collect();
        assert_eq!(codes, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_breakdown_with_warning_still_renders() {
        let rooms = vec![
            json!({"room_id": 1, "room_code": "A-101", "capacity": 2}),
            json!({"room_id": 2, "room_code": "B-201", "capacity": 1}),
        ];
        let outcome = AssignOutcome::from_body(
            &json!({
                "warning": "Room full",
                "assignments": {
                    "1": [
                        {"seat": 1, "student": {"roll_no": "R001", "name": "Asha"}},
                        {"seat": 2, "student": {"roll": "R002", "name": "Bimal"}}
                    ]
                }
            })
            .to_string(),
        );
        assert_eq!(outcome.warning.as_deref(), Some("Room full"));

        let reports = room_breakdown(&rooms, &outcome);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].code, "A-101");
        assert_eq!(reports[0].seats.len(), 2);
        assert_eq!(reports[0].seats[0].seat, "1");
        assert_eq!(reports[0].seats[0].roll, "R001");
        // rollフィールドへのフォールバック
        assert_eq!(reports[0].seats[1].roll, "R002");
        // 割当の無い部屋も0席で現れる
        assert!(reports[1].seats.is_empty());
    }

    #[test]
    fn test_seat_row_missing_student() {
        let rooms = vec![json!({"room_id": 1, "room_code": "A", "capacity": 1})];
        let outcome =
            AssignOutcome::from_body(&json!({"assignments": {"1": [{"seat": 1}]}}).to_string());
        let reports = room_breakdown(&rooms, &outcome);
        assert_eq!(reports[0].seats[0].roll, "");
        assert_eq!(reports[0].seats[0].name, "");
    }

    #[test]
    fn test_error_field_parsed() {
        let outcome = AssignOutcome::from_body(r#"{"error": "no registrations for exam"}"#);
        assert_eq!(outcome.error.as_deref(), Some("no registrations for exam"));
    }
}
