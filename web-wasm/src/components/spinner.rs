//! 読み込み中表示

use jeju_guide_common::SelectionState;
use leptos::prelude::*;

#[component]
pub fn Spinner(selection: ReadSignal<SelectionState>) -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner" />
            <p class="spinner-text">
                {move || {
                    selection
                        .get()
                        .current()
                        .map(|c| format!("{} 추천을 찾는 중...", c.label()))
                        .unwrap_or_default()
                }}
            </p>
        </div>
    }
}
