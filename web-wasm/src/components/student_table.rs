//! 学生テーブルコンポーネント

use crate::actions::{dispatch, Action};
use exam_seater_common::{views, StateStore};
use leptos::prelude::*;
use std::future::Future;

#[component]
pub fn StudentTable<F, Fut>(state: ReadSignal<StateStore>, reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let rows = move || {
        views::student_rows(&state.get().snapshot)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <table class="table" id="studentsTable">
            <thead>
                <tr>
                    <th>"学籍番号"</th>
                    <th>"氏名"</th>
                    <th>"学科"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|(index, row)| (*index, row.clone())
                    children=move |(_, row): (usize, views::StudentRow)| {
                        let reload = reload.clone();
                        let student_id = row.id.clone();
                        view! {
                            <tr>
                                <td>{row.roll}</td>
                                <td>{row.name}</td>
                                <td>{row.department}</td>
                                <td>
                                    <button
                                        class="btn ghost"
                                        on:click=move |_| {
                                            dispatch(
                                                Action::DeleteStudent(student_id.clone()),
                                                reload.clone(),
                                            )
                                        }
                                    >
                                        "削除"
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
