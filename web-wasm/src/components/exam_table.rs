//! 試験テーブルコンポーネント

use crate::actions::{dispatch, Action};
use exam_seater_common::{views, StateStore};
use leptos::prelude::*;
use std::future::Future;

#[component]
pub fn ExamTable<F, Fut>(state: ReadSignal<StateStore>, reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let rows = move || {
        views::exam_rows(&state.get().snapshot)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <table class="table" id="examsTable">
            <thead>
                <tr>
                    <th>"科目"</th>
                    <th>"日付"</th>
                    <th>"時間"</th>
                    <th>"登録数"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|(index, row)| (*index, row.clone())
                    children=move |(_, row): (usize, views::ExamRow)| {
                        let reload = reload.clone();
                        let exam_id = row.id.clone();
                        view! {
                            <tr>
                                <td>{row.course}</td>
                                <td>{row.date}</td>
                                <td>{row.time}</td>
                                <td>{row.reg_count}</td>
                                <td>
                                    <button
                                        class="btn ghost"
                                        on:click=move |_| {
                                            dispatch(
                                                Action::RegisterAll(exam_id.clone()),
                                                reload.clone(),
                                            )
                                        }
                                    >
                                        "全員登録"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
