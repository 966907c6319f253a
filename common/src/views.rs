//! 描画用の行モデル
//!
//! スナップショットから各テーブル・リストの行を組み立てる。
//! DOMには依存しない純粋な変換なので、ホスト側のテストで検証できる。
//!
//! 各行は`Eq`と`Hash`を持ち、(位置, 行の内容)のタプルが描画キーに
//! なる。内容が変わった行はキーごと変わるので必ず描き直される。

use crate::fields;
use crate::state::Snapshot;

/// 試験テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExamRow {
    /// 解決済み試験ID（表示形）。解決不能なら空文字列
    pub id: String,
    pub course: String,
    pub date: String,
    /// "09:00 - 11:00" 形式
    pub time: String,
    pub reg_count: usize,
}

/// 試験セレクタの1項目
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExamOption {
    pub value: String,
    /// "CS101 — 2024-01-01" 形式
    pub label: String,
}

/// 学生テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentRow {
    pub id: String,
    pub roll: String,
    pub name: String,
    pub department: String,
}

/// 部屋カード
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomCard {
    pub code: String,
    pub capacity: String,
    pub building: String,
    pub floor: String,
}

/// 監督者テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvigilatorRow {
    pub id: String,
    pub name: String,
    pub employee_no: String,
}

/// 直近試験のプレビュー
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExamPreview {
    pub course: String,
    pub date: String,
    pub start: String,
    pub end: String,
}

impl ExamPreview {
    /// "CS101 — 2024-01-01 09:00 to 11:00"。時刻が無ければ省略
    pub fn summary(&self) -> String {
        if self.start.is_empty() && self.end.is_empty() {
            format!("{} — {}", self.course, self.date)
        } else {
            format!(
                "{} — {} {} to {}",
                self.course, self.date, self.start, self.end
            )
        }
    }
}

pub fn exam_rows(snapshot: &Snapshot) -> Vec<ExamRow> {
    snapshot
        .exams()
        .iter()
        .map(|exam| {
            let eid = fields::exam_id(exam);
            ExamRow {
                id: fields::display(eid),
                course: fields::exam_course(exam),
                date: fields::exam_date(exam),
                time: format!(
                    "{} - {}",
                    fields::resolve_text(exam, &["start_time"]),
                    fields::resolve_text(exam, &["end_time"])
                ),
                reg_count: snapshot.registrations().count_for(eid),
            }
        })
        .collect()
}

pub fn exam_options(snapshot: &Snapshot) -> Vec<ExamOption> {
    snapshot
        .exams()
        .iter()
        .map(|exam| ExamOption {
            value: fields::display(fields::exam_id(exam)),
            label: format!(
                "{} — {}",
                fields::exam_course(exam),
                fields::exam_date(exam)
            ),
        })
        .collect()
}

pub fn student_rows(snapshot: &Snapshot) -> Vec<StudentRow> {
    snapshot
        .students()
        .iter()
        .map(|student| StudentRow {
            id: fields::display(fields::student_id(student)),
            roll: fields::student_roll(student),
            name: fields::student_name(student),
            department: fields::resolve_text(student, &["department", "dept"]),
        })
        .collect()
}

pub fn room_cards(snapshot: &Snapshot) -> Vec<RoomCard> {
    snapshot
        .rooms()
        .iter()
        .map(|room| RoomCard {
            code: fields::resolve_text(room, &["room_code"]),
            capacity: fields::resolve_text(room, &["capacity"]),
            building: fields::resolve_text(room, &["building"]),
            floor: fields::resolve_text(room, &["floor"]),
        })
        .collect()
}

pub fn invigilator_rows(snapshot: &Snapshot) -> Vec<InvigilatorRow> {
    snapshot
        .invigilators()
        .iter()
        .map(|inv| InvigilatorRow {
            id: fields::display(fields::invigilator_id(inv)),
            name: fields::resolve_text(inv, &["name"]),
            employee_no: fields::invigilator_employee_no(inv),
        })
        .collect()
}

/// コレクション先頭の試験。空ならNone（プレースホルダ表示）
pub fn exam_preview(snapshot: &Snapshot) -> Option<ExamPreview> {
    let exam = snapshot.exams().first()?;
    Some(ExamPreview {
        course: fields::exam_course(exam),
        date: fields::exam_date(exam),
        start: fields::resolve_text(exam, &["start_time"]),
        end: fields::resolve_text(exam, &["end_time"]),
    })
}
