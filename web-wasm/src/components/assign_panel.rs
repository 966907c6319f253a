//! 座席割当パネルコンポーネント
//!
//! 試験を選んで割当を実行し、部屋別の内訳（収容人数の降順）を
//! 描画する。`error`は中断、`warning`は通知して続行。

use crate::actions::notify_failure;
use crate::api;
use exam_seater_common::{assign, views, StateStore};
use gloo::dialogs::alert;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AssignPanel<F, Fut>(state: ReadSignal<StateStore>, reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let (selected, set_selected) = signal(String::new());
    let (reports, set_reports) = signal(Vec::<assign::RoomReport>::new());

    // 明示的に選ばれていなければ先頭の試験（selectの初期表示）を使う
    let effective_exam = move || {
        let chosen = selected.get();
        if !chosen.is_empty() {
            return chosen;
        }
        views::exam_options(&state.get().snapshot)
            .first()
            .map(|option| option.value.clone())
            .unwrap_or_default()
    };

    let on_assign = move |_| {
        let exam_id = effective_exam();
        if exam_id.is_empty() {
            alert("試験を選択してください");
            return;
        }
        let rooms = state.get().snapshot.rooms().to_vec();
        spawn_local(async move {
            match api::assign_seats(&exam_id).await {
                Ok(outcome) => {
                    if let Some(error) = &outcome.error {
                        alert(error);
                        return;
                    }
                    if let Some(warning) = &outcome.warning {
                        alert(warning);
                    }
                    set_reports.set(assign::room_breakdown(&rooms, &outcome));
                }
                Err(e) => notify_failure(e),
            }
        });
    };

    let on_clear = {
        let reload = reload.clone();
        move |_| {
            let reload = reload.clone();
            spawn_local(async move {
                match api::clear_assignments().await {
                    Ok(()) => {
                        set_reports.set(Vec::new());
                        reload(()).await;
                    }
                    Err(e) => notify_failure(e),
                }
            });
        }
    };

    let options = move || {
        views::exam_options(&state.get().snapshot)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    let report_entries = move || reports.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <section class="card assign-panel">
            <h2>"座席割当"</h2>
            <div class="assign-controls">
                <select
                    id="selectExam"
                    on:change=move |ev| set_selected.set(event_target_value(&ev))
                >
                    <For
                        each=options
                        key=|(index, option)| (*index, option.clone())
                        children=|(_, option): (usize, views::ExamOption)| {
                            view! { <option value=option.value>{option.label}</option> }
                        }
                    />
                </select>
                <button id="assignSeatsBtn" class="btn" on:click=on_assign>
                    "座席を割り当て"
                </button>
                <button id="clearSeats" class="btn ghost" on:click=on_clear>
                    "割当をクリア"
                </button>
            </div>

            <div id="assignResult">
                <For
                    each=report_entries
                    key=|(index, report)| (*index, report.clone())
                    children=|(_, report): (usize, assign::RoomReport)| {
                        let seat_count = report.seats.len();
                        let chips = report
                            .seats
                            .iter()
                            .map(|seat| {
                                view! { <span class="seat taken">{seat.seat.clone()}</span> " " }
                            })
                            .collect_view();
                        let rows = report
                            .seats
                            .iter()
                            .map(|seat| {
                                view! {
                                    <tr>
                                        <td>{seat.seat.clone()}</td>
                                        <td>{seat.roll.clone()}</td>
                                        <td>{seat.name.clone()}</td>
                                    </tr>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="card">
                                <h4>
                                    {format!(
                                        "{} — 座席: {}/{}",
                                        report.code,
                                        seat_count,
                                        report.capacity,
                                    )}
                                </h4>
                                <div class="small">{chips}</div>
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"座席"</th>
                                            <th>"学籍番号"</th>
                                            <th>"氏名"</th>
                                        </tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
