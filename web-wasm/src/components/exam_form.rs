//! 試験作成フォームコンポーネント
//!
//! 作成フォームの中で唯一、サーバーの失敗応答を区別して扱う。
//! 失敗時は`error`フィールド（無ければ本文）を提示し、
//! 入力のクリアと再描画は行わない。

use crate::actions::notify_failure;
use crate::api;
use exam_seater_common::forms;
use gloo::dialogs::alert;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ExamForm<F, Fut>(reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let (course, set_course) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());

    let on_add = move |_| {
        let payload =
            match forms::exam_payload(&course.get(), &date.get(), &start.get(), &end.get()) {
                Ok(payload) => payload,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
        let reload = reload.clone();
        spawn_local(async move {
            match api::create_exam(&payload).await {
                Ok(()) => {
                    set_course.set(String::new());
                    set_date.set(String::new());
                    set_start.set(String::new());
                    set_end.set(String::new());
                    reload(()).await;
                }
                Err(e) => {
                    match e.as_string() {
                        Some(message) => alert(&format!("試験の追加に失敗: {}", message)),
                        None => notify_failure(e),
                    };
                }
            }
        });
    };

    view! {
        <div class="form-group">
            <h3>"試験を追加"</h3>
            <input
                type="text"
                id="examCourse"
                placeholder="科目コード"
                prop:value=move || course.get()
                on:input=move |ev| set_course.set(event_target_value(&ev))
            />
            <input
                type="date"
                id="examDate"
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <input
                type="time"
                id="examStart"
                prop:value=move || start.get()
                on:input=move |ev| set_start.set(event_target_value(&ev))
            />
            <input
                type="time"
                id="examEnd"
                prop:value=move || end.get()
                on:input=move |ev| set_end.set(event_target_value(&ev))
            />
            <button id="addExam" class="btn" on:click=on_add>
                "追加"
            </button>
        </div>
    }
}
