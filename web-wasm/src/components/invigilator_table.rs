//! 監督者テーブルコンポーネント

use crate::actions::{dispatch, Action};
use exam_seater_common::{views, StateStore};
use leptos::prelude::*;
use std::future::Future;

#[component]
pub fn InvigilatorTable<F, Fut>(state: ReadSignal<StateStore>, reload: F) -> impl IntoView
where
    F: Fn(()) -> Fut + 'static + Clone + Send,
    Fut: Future<Output = ()> + 'static,
{
    let rows = move || {
        views::invigilator_rows(&state.get().snapshot)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <table class="table" id="invTable">
            <thead>
                <tr>
                    <th>"氏名"</th>
                    <th>"職員番号"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|(index, row)| (*index, row.clone())
                    children=move |(_, row): (usize, views::InvigilatorRow)| {
                        let reload = reload.clone();
                        let invigilator_id = row.id.clone();
                        view! {
                            <tr>
                                <td>{row.name}</td>
                                <td>{row.employee_no}</td>
                                <td>
                                    <button
                                        class="btn ghost"
                                        on:click=move |_| {
                                            dispatch(
                                                Action::DeleteInvigilator(invigilator_id.clone()),
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
