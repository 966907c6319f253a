//! 学生登録フォームコンポーネント

use crate::actions::notify_failure;
use crate::api;
use exam_seater_common::forms;
use gloo::dialogs::alert;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn StudentForm<F, Fut>(reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let (roll, set_roll) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (dept, set_dept) = signal(String::new());
    let (year, set_year) = signal(String::new());

    let on_add = move |_| {
        let payload =
            match forms::student_payload(&roll.get(), &name.get(), &dept.get(), &year.get()) {
                Ok(payload) => payload,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
        let reload = reload.clone();
        spawn_local(async move {
            match api::create_student(&payload).await {
                Ok(()) => {
                    set_roll.set(String::new());
                    set_name.set(String::new());
                    set_dept.set(String::new());
                    set_year.set(String::new());
                    reload(()).await;
                }
                Err(e) => notify_failure(e),
            }
        });
    };

    view! {
        <div class="form-group">
            <h3>"学生を登録"</h3>
            <input
                type="text"
                id="studRoll"
                placeholder="学籍番号"
                prop:value=move || roll.get()
                on:input=move |ev| set_roll.set(event_target_value(&ev))
            />
            <input
                type="text"
                id="studName"
                placeholder="氏名"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                id="studDept"
                placeholder="学科"
                prop:value=move || dept.get()
                on:input=move |ev| set_dept.set(event_target_value(&ev))
            />
            <input
                type="number"
                id="studYear"
                placeholder="学年"
                prop:value=move || year.get()
                on:input=move |ev| set_year.set(event_target_value(&ev))
            />
            <button id="addStudent" class="btn" on:click=on_add>
                "登録"
            </button>
        </div>
    }
}
