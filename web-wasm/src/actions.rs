//! UI操作のディスパッチ
//!
//! 行ボタンやエクスポートが発火する操作の集合。文字列タグでの
//! 分岐ではなく列挙型で表し、1操作=1分岐で処理する。
//! `reload`はFutureを返し、awaitが戻った時点でスナップショットの
//! 差し替えまで完了している。

use crate::api;
use gloo::dialogs::alert;
use std::future::Future;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

/// ユーザー操作の種別
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// DBスナップショットのダウンロード（ページ遷移）
    Export,
    /// 全学生を指定試験へ登録
    RegisterAll(String),
    DeleteStudent(String),
    DeleteInvigilator(String),
}

/// 通信失敗の一律通知
///
/// 更新系APIの失敗は種類を問わずこの1本で利用者へ知らせる。
pub fn notify_failure(error: JsValue) {
    let detail = error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error));
    alert(&format!("通信に失敗しました: {}", detail));
}

/// 再読み込みの完了を待ってから後続処理を行う
///
/// 完了通知が再描画より先に出ない順序を固定する。
async fn after_reload<F, Fut, G>(reload: F, then: G)
where
    F: Fn(()) -> Fut,
    Fut: Future<Output = ()>,
    G: FnOnce(),
{
    reload(()).await;
    then();
}

/// 操作を実行する。更新系は再読み込みの完了後に通知する
pub fn dispatch<F, Fut>(action: Action, reload: F)
where
    F: Fn(()) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    match action {
        Action::Export => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(api::EXPORT_PATH);
            }
        }
        Action::RegisterAll(exam_id) => {
            spawn_local(async move {
                match api::register_all(&exam_id).await {
                    Ok(()) => after_reload(reload, || alert("全学生を登録しました")).await,
                    Err(e) => notify_failure(e),
                }
            });
        }
        Action::DeleteStudent(id) => {
            spawn_local(async move {
                match api::delete_student(&id).await {
                    Ok(()) => reload(()).await,
                    Err(e) => notify_failure(e),
                }
            });
        }
        Action::DeleteInvigilator(id) => {
            spawn_local(async move {
                match api::delete_invigilator(&id).await {
                    Ok(()) => reload(()).await,
                    Err(e) => notify_failure(e),
                }
            });
        }
    }
}
