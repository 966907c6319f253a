//! 部屋作成フォームコンポーネント

use crate::actions::notify_failure;
use crate::api;
use exam_seater_common::forms;
use gloo::dialogs::alert;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn RoomForm<F, Fut>(reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let (code, set_code) = signal(String::new());
    let (capacity, set_capacity) = signal(String::new());
    let (building, set_building) = signal(String::new());
    let (floor, set_floor) = signal(String::new());

    let on_add = move |_| {
        let payload = match forms::room_payload(
            &code.get(),
            &capacity.get(),
            &building.get(),
            &floor.get(),
        ) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        let reload = reload.clone();
        spawn_local(async move {
            match api::create_room(&payload).await {
                Ok(()) => {
                    set_code.set(String::new());
                    set_capacity.set(String::new());
                    set_building.set(String::new());
                    set_floor.set(String::new());
                    reload(()).await;
                }
                Err(e) => notify_failure(e),
            }
        });
    };

    view! {
        <div class="form-group">
            <h3>"部屋を追加"</h3>
            <input
                type="text"
                id="roomCode"
                placeholder="部屋コード"
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
            />
            <input
                type="number"
                id="roomCap"
                placeholder="収容人数"
                prop:value=move || capacity.get()
                on:input=move |ev| set_capacity.set(event_target_value(&ev))
            />
            <input
                type="text"
                id="roomBuilding"
                placeholder="建物"
                prop:value=move || building.get()
                on:input=move |ev| set_building.set(event_target_value(&ev))
            />
            <input
                type="text"
                id="roomFloor"
                placeholder="階"
                prop:value=move || floor.get()
                on:input=move |ev| set_floor.set(event_target_value(&ev))
            />
            <button id="addRoom" class="btn" on:click=on_add>
                "追加"
            </button>
        </div>
    }
}
