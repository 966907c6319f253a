//! メインアプリケーションコンポーネント
//!
//! 共有状態は`StateStore`を1つのシグナルで所有する。読み込みの
//! たびにチケットを発行し、追い越された応答はインストールしない。

use exam_seater_common::{Snapshot, StateStore};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use crate::api;
use crate::components::{
    assign_panel::AssignPanel,
    exam_form::ExamForm,
    exam_table::ExamTable,
    header::Header,
    invigilator_form::InvigilatorForm,
    invigilator_table::InvigilatorTable,
    room_form::RoomForm,
    room_list::RoomList,
    stats_panel::StatsPanel,
    student_form::StudentForm,
    student_table::StudentTable,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(StateStore::default());

    // 状態の再読み込み。取得失敗は空のスナップショットに落とし、
    // 診断はコンソールにだけ残す。戻り値のFutureを待てば
    // スナップショットの差し替えまで終わっている
    let reload = move |_: ()| {
        let mut ticket = 0;
        set_state.update(|store| ticket = store.issue_ticket());
        async move {
            let body = match api::load_state().await {
                Ok(body) => body,
                Err(e) => {
                    console::warn_2(&JsValue::from_str("状態の取得に失敗:"), &e);
                    String::new()
                }
            };
            let snapshot = Snapshot::from_body(&body);
            console::log_1(&JsValue::from_str(&format!(
                "/api/state: 試験{} 学生{} 部屋{}",
                snapshot.exam_count(),
                snapshot.student_count(),
                snapshot.room_count()
            )));
            set_state.update(|store| {
                if !store.install(ticket, snapshot) {
                    console::warn_1(&JsValue::from_str("追い越された状態応答を破棄"));
                }
            });
        }
    };

    // 初回読み込み
    spawn_local(reload(()));

    view! {
        <div class="container">
            <Header reload=reload />

            <StatsPanel state=state />

            <div class="grid">
                <section class="card">
                    <h2>"試験"</h2>
                    <ExamTable state=state reload=reload />
                    <ExamForm reload=reload />
                </section>

                <section class="card">
                    <h2>"部屋"</h2>
                    <RoomList state=state />
                    <RoomForm reload=reload />
                </section>

                <section class="card">
                    <h2>"学生"</h2>
                    <StudentTable state=state reload=reload />
                    <StudentForm reload=reload />
                </section>

                <section class="card">
                    <h2>"監督者"</h2>
                    <InvigilatorTable state=state reload=reload />
                    <InvigilatorForm reload=reload />
                </section>
            </div>

            <AssignPanel state=state reload=reload />
        </div>
    }
}
