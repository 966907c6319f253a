//! 監督者登録フォームコンポーネント

use crate::actions::notify_failure;
use crate::api;
use exam_seater_common::forms;
use gloo::dialogs::alert;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn InvigilatorForm<F, Fut>(reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let (name, set_name) = signal(String::new());
    let (emp, set_emp) = signal(String::new());
    let (dept, set_dept) = signal(String::new());

    let on_add = move |_| {
        let payload = match forms::invigilator_payload(&name.get(), &emp.get(), &dept.get()) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        let reload = reload.clone();
        spawn_local(async move {
            match api::create_invigilator(&payload).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_emp.set(String::new());
                    set_dept.set(String::new());
                    reload(()).await;
                }
                Err(e) => notify_failure(e),
            }
        });
    };

    view! {
        <div class="form-group">
            <h3>"監督者を登録"</h3>
            <input
                type="text"
                id="invName"
                placeholder="氏名"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                id="invEmp"
                placeholder="職員番号"
                prop:value=move || emp.get()
                on:input=move |ev| set_emp.set(event_target_value(&ev))
            />
            <input
                type="text"
                id="invDept"
                placeholder="所属"
                prop:value=move || dept.get()
                on:input=move |ev| set_dept.set(event_target_value(&ev))
            />
            <button id="addInv" class="btn" on:click=on_add>
                "登録"
            </button>
        </div>
    }
}
