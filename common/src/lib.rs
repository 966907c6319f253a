//! ExamSeater Common Library
//!
//! Web(WASM)フロントエンドと共有される状態モデルとユーティリティ。
//! サーバーが返すJSONスナップショットを寛容に正規化し、
//! 描画用の行モデルへ変換する純粋ロジックを集約する。

pub mod assign;
pub mod error;
pub mod fields;
pub mod forms;
pub mod regs;
pub mod state;
pub mod views;

pub use assign::{room_breakdown, rooms_by_capacity, AssignOutcome, RoomReport, SeatRow};
pub use error::{Error, Result};
pub use fields::{display, resolve, resolve_text};
pub use regs::{canonical_key, RegistrationMap};
pub use state::{Snapshot, StateStore};
pub use views::{ExamOption, ExamPreview, ExamRow, InvigilatorRow, RoomCard, StudentRow};
