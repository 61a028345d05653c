//! カテゴリ選択バー

use jeju_guide_common::{Category, SelectionState};
use leptos::prelude::*;

#[component]
pub fn CategoryBar<F>(selection: ReadSignal<SelectionState>, on_select: F) -> impl IntoView
where
    F: Fn(Category) + 'static + Clone + Send,
{
    view! {
        <div class="category-bar">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class="category-button"
                            class:active=move || selection.get().is_active(category)
                            disabled=move || selection.get().is_loading()
                            on:click=move |_| on_select(category)
                        >
                            {category.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
