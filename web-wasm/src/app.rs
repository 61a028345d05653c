//! メインアプリケーションコンポーネント

use crate::api;
use crate::components::{
    category_bar::CategoryBar,
    header::Header,
    recommendation_card::RecommendationCard,
    spinner::Spinner,
    weather_widget::WeatherWidget,
};
use crate::config::WidgetConfig;
use jeju_guide_common::{
    directions_url, settle, Category, FetchOutcome, ImageLookupTable, RecommendationStore,
    SelectionState, WeatherReport,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(WidgetConfig::from_build_env());

    // アプリケーション状態
    let (store, set_store) = signal(RecommendationStore::new());
    let (selection, set_selection) = signal(SelectionState::new());
    let (weather, set_weather) = signal(None::<WeatherReport>);
    let (table, set_table) = signal(ImageLookupTable::empty());

    // 天気と画像対応表は起動時に一度だけ読み込む
    spawn_local(async move {
        let config = config.get_value();
        set_weather.set(api::weather::fetch_current(&config).await);
    });
    spawn_local(async move {
        let url = config.with_value(|c| c.lookup_url.clone());
        set_table.set(api::lookup::fetch_table(&url).await);
    });

    // 取得中は新しい取得を受け付けない
    let dispatch = move |category: Category| {
        let mut began = false;
        set_selection.update(|s| began = s.begin(category));
        if !began {
            return;
        }

        spawn_local(async move {
            let config = config.get_value();
            let fetched = api::completion::fetch_recommendation(&config, category).await;

            let mut outcome = FetchOutcome::Failed;
            set_store.update(|store| outcome = settle(store, fetched));
            set_selection.update(SelectionState::finish);

            if let Some(notice) = outcome.notice() {
                api::show_notice(notice);
            }
        });
    };

    let on_add_more = move |_: leptos::ev::MouseEvent| {
        if let Some(category) = selection.get_untracked().last() {
            dispatch(category);
        }
    };

    let on_delete = move |id: u64| {
        set_store.update(|store| {
            store.remove(id);
        });
    };

    let on_map = move |name: String| {
        spawn_local(async move {
            match api::geolocation::current_position().await {
                Ok(origin) => api::open_in_new_tab(&directions_url(origin, &name)),
                Err(notice) => api::show_notice(notice),
            }
        });
    };

    view! {
        <div class="chat-widget">
            <Header />
            <WeatherWidget weather=weather />

            <div class="messages">
                <Show when=move || store.with(|s| s.is_empty())>
                    <p class="bot-message">"카테고리를 선택하여 추천을 받아보세요!"</p>
                </Show>

                <For
                    each=move || store.with(|s| s.as_slice().to_vec())
                    key=|rec| rec.id
                    children=move |rec| {
                        view! {
                            <RecommendationCard
                                rec=rec
                                table=table
                                on_delete=on_delete
                                on_map=on_map
                            />
                        }
                    }
                />

                <Show when=move || selection.get().is_loading()>
                    <Spinner selection=selection />
                </Show>
            </div>

            <Show when=move || !store.with(|s| s.is_empty())>
                <button
                    class="btn btn-primary add-more"
                    disabled=move || selection.get().is_loading()
                    on:click=on_add_more
                >
                    "➕ 새로운 추천 추가"
                </button>
            </Show>

            <CategoryBar selection=selection on_select=dispatch />
        </div>
    }
}
