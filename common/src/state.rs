//! 状態スナップショットとバージョン管理
//!
//! `/api/state`の応答全体を1つのスナップショットとして保持する。
//! 読み込みのたびに丸ごと差し替え、差分マージはしない。
//! 応答の追い越しを検出できるよう、単調増加するチケットを発行し
//! 古いチケットの応答は破棄する。

use crate::regs::RegistrationMap;
use serde_json::Value;

/// サーバー状態のスナップショット
///
/// 応答本文をそのまま保持し、コレクションへのアクセスは寛容に行う。
/// 期待した型でないフィールドは空として扱う。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    root: Value,
    regs_norm: RegistrationMap,
}

impl Snapshot {
    /// 応答本文から構築する
    ///
    /// JSONとして解釈できない、またはオブジェクトでない本文は
    /// 空のスナップショットに落とす（暗黙のデグレード）。
    pub fn from_body(body: &str) -> Self {
        let root = match serde_json::from_str::<Value>(body) {
            Ok(value) if value.is_object() => value,
            _ => return Self::default(),
        };
        let regs_norm = RegistrationMap::from_raw(root.get("regs").unwrap_or(&Value::Null));
        Self { root, regs_norm }
    }

    fn collection(&self, name: &str) -> &[Value] {
        self.root
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn exams(&self) -> &[Value] {
        self.collection("exams")
    }

    pub fn students(&self) -> &[Value] {
        self.collection("students")
    }

    pub fn rooms(&self) -> &[Value] {
        self.collection("rooms")
    }

    pub fn invigilators(&self) -> &[Value] {
        self.collection("invigilators")
    }

    /// 再キー化済みの受験登録マップ
    pub fn registrations(&self) -> &RegistrationMap {
        &self.regs_norm
    }

    pub fn exam_count(&self) -> usize {
        self.exams().len()
    }

    pub fn student_count(&self) -> usize {
        self.students().len()
    }

    pub fn room_count(&self) -> usize {
        self.rooms().len()
    }
}

/// バージョン付き共有状態コンテナ
///
/// 読み込み開始時に`issue_ticket`でチケットを取り、応答到着時に
/// `install`へ渡す。既により新しいスナップショットが入っていれば
/// そのままfalseを返し、呼び出し側は応答を捨てる。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStore {
    pub snapshot: Snapshot,
    version: u64,
    issued: u64,
}

impl StateStore {
    /// 次の読み込み用チケットを発行する（単調増加）
    pub fn issue_ticket(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// スナップショットの差し替えを試みる
    ///
    /// チケットが現行バージョンより新しいときだけ差し替える。
    pub fn install(&mut self, ticket: u64, snapshot: Snapshot) -> bool {
        if ticket > self.version {
            self.version = ticket;
            self.snapshot = snapshot;
            true
        } else {
            false
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
