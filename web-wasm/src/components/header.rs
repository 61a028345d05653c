//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🏝 제주 전문 여행플래너"</h1>
        </header>
    }
}
