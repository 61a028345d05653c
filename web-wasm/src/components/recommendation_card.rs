//! 推薦カードと詳細モーダル

use jeju_guide_common::card::{detail_lines, summary_lines, title};
use jeju_guide_common::{ImageLookupTable, Recommendation};
use leptos::prelude::*;

#[component]
pub fn RecommendationCard<FD, FM>(
    rec: Recommendation,
    table: ReadSignal<ImageLookupTable>,
    on_delete: FD,
    on_map: FM,
) -> impl IntoView
where
    FD: Fn(u64) + 'static + Clone + Send,
    FM: Fn(String) + 'static + Clone + Send,
{
    let (show_details, set_show_details) = signal(false);

    let id = rec.id;
    let name = rec.name.clone();
    let heading = format!("{} [{}]", title(&rec), rec.category.label());
    let summary = summary_lines(&rec);
    let details = detail_lines(&rec);

    let image = {
        let name = name.clone();
        move || table.with(|t| t.resolve(&name).to_string())
    };
    let modal_heading = heading.clone();

    view! {
        <div class="recommendation-card">
            <img class="card-image" src=image alt=name.clone() />
            <div class="card-body">
                <h3 class="card-title">{heading}</h3>
                {summary
                    .into_iter()
                    .map(|line| view! {
                        <p class="card-line">
                            <strong>{line.label}": "</strong>
                            {line.value}
                        </p>
                    })
                    .collect_view()}
            </div>
            <div class="card-actions">
                <button class="btn btn-small" on:click=move |_| set_show_details.set(true)>
                    "ℹ 정보"
                </button>
                <button
                    class="btn btn-small"
                    on:click={
                        let on_map = on_map.clone();
                        let name = name.clone();
                        move |_| on_map(name.clone())
                    }
                >
                    "🗺 지도"
                </button>
                <button
                    class="btn btn-small btn-danger"
                    on:click={
                        let on_delete = on_delete.clone();
                        move |_| on_delete(id)
                    }
                >
                    "✖ 삭제"
                </button>
            </div>

            <Show when=move || show_details.get()>
                <div class="modal-backdrop" on:click=move |_| set_show_details.set(false)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>{modal_heading.clone()}</h3>
                        {details
                            .iter()
                            .map(|line| view! {
                                <p class="detail-line">
                                    <strong>{line.label}": "</strong>
                                    {line.value.clone()}
                                </p>
                            })
                            .collect_view()}
                        <button class="btn" on:click=move |_| set_show_details.set(false)>
                            "닫기"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
