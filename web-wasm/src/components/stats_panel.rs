//! サマリーパネルコンポーネント
//!
//! 件数カウンタと直近試験のプレビューを表示する。

use exam_seater_common::{views, StateStore};
use leptos::prelude::*;

#[component]
pub fn StatsPanel(state: ReadSignal<StateStore>) -> impl IntoView {
    // 試験が無いときはプレースホルダ
    let preview = move || {
        views::exam_preview(&state.get().snapshot)
            .map(|p| p.summary())
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="stats-panel">
            <div class="stat">
                <span class="stat-value" id="statExams">
                    {move || state.get().snapshot.exam_count()}
                </span>
                <span class="stat-label">"試験"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="statStudents">
                    {move || state.get().snapshot.student_count()}
                </span>
                <span class="stat-label">"学生"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="statRooms">
                    {move || state.get().snapshot.room_count()}
                </span>
                <span class="stat-label">"部屋"</span>
            </div>
            <div class="exam-preview" id="examPreview">{preview}</div>
        </div>
    }
}
