//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 入力検証エラー。メッセージはそのままユーザーへ提示される
    #[error("{0}")]
    Validation(String),

    /// サーバーが返した業務エラー（レスポンスのerrorフィールド等）
    #[error("{0}")]
    Server(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
