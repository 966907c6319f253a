//! 受験登録マップの再キー化
//!
//! サーバーの`regs`は `{"1": [...]}` / `{"E2001": [...]}` のように
//! キーの型が揺れる。数値に変換できるキーは正規形（10進文字列）へ
//! 寄せて保持し、参照時は生のキーと正規形の両方を試す。

use serde_json::Value;
use std::collections::HashMap;

/// 数値に見えるキーを正規形へ変換する。変換できなければ元の文字列のまま
pub fn canonical_key(key: &str) -> String {
    match key.trim().parse::<i64>() {
        Ok(n) => n.to_string(),
        Err(_) => key.to_string(),
    }
}

/// 再キー化済みの受験登録マップ
///
/// 値は登録エントリの列（サーバーによっては学生IDの配列）を
/// そのまま保持する。配列でない値も破棄せず保持し、件数は0と数える。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationMap {
    entries: HashMap<String, Value>,
}

impl RegistrationMap {
    /// 生の`regs`オブジェクトから構築する。オブジェクト以外は空マップ
    pub fn from_raw(raw: &Value) -> Self {
        let mut entries = HashMap::new();
        if let Some(map) = raw.as_object() {
            for (key, value) in map {
                entries.insert(canonical_key(key), value.clone());
            }
        }
        Self { entries }
    }

    /// 生のキー、次いで正規形で引く
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(&canonical_key(key)))
    }

    /// 解決済み試験IDに対する登録件数。欠落・非配列は0
    pub fn count_for(&self, exam_id: Option<&Value>) -> usize {
        let key = crate::fields::display(exam_id);
        self.get(&key)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_key_numeric_string() {
        assert_eq!(canonical_key("7"), "7");
        assert_eq!(canonical_key(" 7 "), "7");
        assert_eq!(canonical_key("007"), "7");
    }

    #[test]
    fn test_canonical_key_non_numeric_preserved() {
        assert_eq!(canonical_key("E2001"), "E2001");
        assert_eq!(canonical_key(""), "");
    }

    #[test]
    fn test_lookup_numeric_and_string_form() {
        let map = RegistrationMap::from_raw(&json!({"7": [1, 2, 3]}));
        // 数値由来のID（表示形"7"）でも文字列キーでも同じリストに届く
        assert_eq!(map.count_for(Some(&json!(7))), 3);
        assert_eq!(map.count_for(Some(&json!("7"))), 3);
        assert_eq!(map.count_for(Some(&json!("007"))), 3);
    }

    #[test]
    fn test_lookup_string_key_preserved() {
        let map = RegistrationMap::from_raw(&json!({"E2001": ["S3001", "S3002"]}));
        assert_eq!(map.count_for(Some(&json!("E2001"))), 2);
        assert_eq!(map.count_for(Some(&json!("E9999"))), 0);
    }

    #[test]
    fn test_count_missing_id_is_zero() {
        let map = RegistrationMap::from_raw(&json!({"7": [1]}));
        assert_eq!(map.count_for(None), 0);
    }

    #[test]
    fn test_count_non_sequence_value_is_zero() {
        let map = RegistrationMap::from_raw(&json!({"7": "oops"}));
        assert_eq!(map.count_for(Some(&json!(7))), 0);
    }

    #[test]
    fn test_from_raw_non_object_is_empty() {
        assert!(RegistrationMap::from_raw(&json!([1, 2])).is_empty());
        assert!(RegistrationMap::from_raw(&Value::Null).is_empty());
    }
}
