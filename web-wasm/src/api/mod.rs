//! サーバーAPI連携
//!
//! same-originのRESTエンドポイントを呼ぶ薄い層。応答本文は
//! テキストのまま持ち帰り、JSONとして読めるかどうかの判断は
//! 呼び出し側（またはcommonのモデル）に委ねる。
//! タイムアウトもリトライも設定しない。

use exam_seater_common::{AssignOutcome, Error};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// エクスポートはfetchではなくページ遷移で開く
pub const EXPORT_PATH: &str = "/api/export";

/// fetch結果（本文テキストを保持する寛容な形）
pub struct FetchOutcome {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

impl FetchOutcome {
    /// 本文をJSONとして解釈できればValueを返す。失敗時はNone
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

fn http_error_message(status: u16, body: &str) -> String {
    Error::Http {
        status,
        body: body.to_string(),
    }
    .to_string()
}

/// fetch呼び出しの共通処理
async fn fetch_outcome(
    method: &str,
    path: &str,
    body: Option<&Value>,
) -> Result<FetchOutcome, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(payload) = body {
        opts.set_body(&JsValue::from_str(&payload.to_string()));
    }

    let request = Request::new_with_str_and_init(path, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;

    Ok(FetchOutcome {
        ok: resp.ok(),
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// ステータス不問の更新呼び出し。非2xxは一律エラーとして返す
async fn mutate(method: &str, path: &str, body: Option<&Value>) -> Result<(), JsValue> {
    let out = fetch_outcome(method, path, body).await?;
    if !out.ok {
        return Err(JsValue::from_str(&http_error_message(out.status, &out.body)));
    }
    Ok(())
}

/// 状態スナップショットの取得。本文テキストをそのまま返す
pub async fn load_state() -> Result<String, JsValue> {
    let out = fetch_outcome("GET", "/api/state", None).await?;
    Ok(out.body)
}

pub async fn register_all(exam_id: &str) -> Result<(), JsValue> {
    mutate(
        "POST",
        "/api/register_all",
        Some(&json!({ "exam_id": exam_id })),
    )
    .await
}

pub async fn delete_student(id: &str) -> Result<(), JsValue> {
    mutate("DELETE", &format!("/api/students/{}", id), None).await
}

pub async fn delete_invigilator(id: &str) -> Result<(), JsValue> {
    mutate("DELETE", &format!("/api/invigilators/{}", id), None).await
}

pub async fn create_room(payload: &Value) -> Result<(), JsValue> {
    mutate("POST", "/api/rooms", Some(payload)).await
}

pub async fn create_student(payload: &Value) -> Result<(), JsValue> {
    mutate("POST", "/api/students", Some(payload)).await
}

pub async fn create_invigilator(payload: &Value) -> Result<(), JsValue> {
    mutate("POST", "/api/invigilators", Some(payload)).await
}

/// 試験作成。失敗時は応答の`error`フィールド（無ければ本文）を返す
pub async fn create_exam(payload: &Value) -> Result<(), JsValue> {
    let out = fetch_outcome("POST", "/api/exams", Some(payload)).await?;
    if !out.ok {
        let message = out
            .json()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| out.body.clone());
        return Err(JsValue::from_str(&Error::Server(message).to_string()));
    }
    Ok(())
}

/// 座席割当。業務エラーも`AssignOutcome`のerrorフィールドで返るため
/// HTTPステータスに関わらず本文を解釈する
pub async fn assign_seats(exam_id: &str) -> Result<AssignOutcome, JsValue> {
    let out = fetch_outcome("POST", &format!("/api/assign/{}", exam_id), None).await?;
    Ok(AssignOutcome::from_body(&out.body))
}

pub async fn clear_assignments() -> Result<(), JsValue> {
    mutate("POST", "/api/clear_assign", None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_outcome_json_tolerant() {
        let out = FetchOutcome {
            ok: true,
            status: 200,
            body: r#"{"exams": []}"#.to_string(),
        };
        assert!(out.json().is_some());

        let out = FetchOutcome {
            ok: false,
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert!(out.json().is_none());
    }

    #[test]
    fn test_http_error_message_format() {
        let message = http_error_message(500, "boom");
        assert_eq!(message, "HTTP 500: boom");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_fetch_outcome_json_parses_in_browser() {
        let out = FetchOutcome {
            ok: true,
            status: 200,
            body: r#"{"assignments": {}}"#.to_string(),
        };
        assert!(out.json().is_some());
    }
}
