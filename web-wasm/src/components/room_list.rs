//! 部屋リストコンポーネント

use exam_seater_common::{views, StateStore};
use leptos::prelude::*;

#[component]
pub fn RoomList(state: ReadSignal<StateStore>) -> impl IntoView {
    let cards = move || {
        views::room_cards(&state.get().snapshot)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="rooms-list" id="roomsList">
            <For
                each=cards
                key=|(index, card)| (*index, card.clone())
                children=|(_, card): (usize, views::RoomCard)| {
                    view! {
                        <div class="room">
                            <strong>{card.code}</strong>
                            <div class="muted">{format!("収容: {}", card.capacity)}</div>
                            <div class="muted">{format!("{} {}F", card.building, card.floor)}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
