//! ヘッダーコンポーネント

use crate::actions::{dispatch, Action};
use leptos::prelude::*;
use std::future::Future;

#[component]
pub fn Header<F, Fut>(reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    view! {
        <header class="header">
            <h1>"ExamSeater - 試験座席割当"</h1>
            <button
                id="exportJSON"
                class="btn ghost"
                on:click=move |_| dispatch(Action::Export, reload.clone())
            >
                "JSONエクスポート"
            </button>
        </header>
    }
}
