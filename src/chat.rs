//! 対話式チャットセッション
//!
//! ウィジェットの操作（カテゴリ選択・もっと見る・詳細・地図・削除）を
//! 端末メニューで提供する。通知は画面に出し、プロセスは終了させない。

use crate::completion::RecommendationSource;
use crate::config::Config;
use crate::controller::CategorySelectionController;
use crate::error::Result;
use crate::images::PlaceImageResolver;
use crate::render::{format_card, format_details, print_notice};
use crate::weather::{weather_line, WeatherClient};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use jeju_guide_common::{directions_url, Category, Coordinates, FetchOutcome, Notice};
use std::time::Duration;

/// メニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Select(Category),
    AddMore,
    Details,
    Map,
    Delete,
    Quit,
}

impl ChatAction {
    pub fn label(&self) -> String {
        match self {
            ChatAction::Select(c) => format!("{} ({})", c.label(), c.slug()),
            ChatAction::AddMore => "➕ 새로운 추천 추가".to_string(),
            ChatAction::Details => "ℹ 정보".to_string(),
            ChatAction::Map => "🗺 지도".to_string(),
            ChatAction::Delete => "✖ 삭제".to_string(),
            ChatAction::Quit => "종료".to_string(),
        }
    }
}

/// 現在の状態で選べるメニュー
///
/// 推薦が1件以上あるときだけ「追加・詳細・地図・削除」を出す。
pub fn build_menu(has_recommendations: bool) -> Vec<ChatAction> {
    let mut menu: Vec<ChatAction> = Category::ALL.into_iter().map(ChatAction::Select).collect();
    if has_recommendations {
        menu.extend([
            ChatAction::AddMore,
            ChatAction::Details,
            ChatAction::Map,
            ChatAction::Delete,
        ]);
    }
    menu.push(ChatAction::Quit);
    menu
}

/// 対話セッションを実行
pub async fn run_chat<S: RecommendationSource>(
    config: &Config,
    controller: &mut CategorySelectionController<S>,
    resolver: &PlaceImageResolver,
    weather: &WeatherClient,
) -> Result<()> {
    println!("🏝 제주 전문 여행플래너\n");

    if let Some(report) = weather.fetch_current(&config.weather_location).await {
        println!("{}\n", weather_line(&report));
    }

    loop {
        let has_recs = !controller.recommendations().is_empty();
        if !has_recs {
            println!("카테고리를 선택하여 추천을 받아보세요!");
        }

        let menu = build_menu(has_recs);
        let labels: Vec<String> = menu.iter().map(ChatAction::label).collect();
        let index = Select::new()
            .with_prompt("무엇을 할까요?")
            .items(&labels)
            .default(0)
            .interact()?;

        match menu[index] {
            ChatAction::Select(category) => {
                let outcome = with_spinner(category, controller.select_category(category)).await;
                report_outcome(outcome, controller, resolver).await;
            }
            ChatAction::AddMore => {
                let Some(category) = controller.last_category() else {
                    continue;
                };
                let outcome = with_spinner(category, controller.add_more()).await;
                report_outcome(outcome, controller, resolver).await;
            }
            ChatAction::Details => {
                if let Some(id) = pick_recommendation(controller, "어떤 장소를 볼까요?")? {
                    if let Some(rec) = controller.get(id) {
                        println!("\n{}", format_details(rec));
                    }
                }
            }
            ChatAction::Map => {
                if let Some(id) = pick_recommendation(controller, "어디로 갈까요?")? {
                    let name = controller.get(id).map(|r| r.name.clone()).unwrap_or_default();
                    match current_location(config)? {
                        Some(origin) => println!("🗺 {}\n", directions_url(origin, &name)),
                        None => print_notice(Notice::GeolocationDenied),
                    }
                }
            }
            ChatAction::Delete => {
                if let Some(id) = pick_recommendation(controller, "어떤 추천을 삭제할까요?")? {
                    if let Some(removed) = controller.remove(id) {
                        println!("✔ {} 삭제\n", removed.name);
                    }
                }
            }
            ChatAction::Quit => break,
        }
    }

    Ok(())
}

async fn with_spinner<F>(category: Category, fut: F) -> FetchOutcome
where
    F: std::future::Future<Output = FetchOutcome>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("{} 추천을 찾는 중...", category.label()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = fut.await;
    spinner.finish_and_clear();
    outcome
}

async fn report_outcome<S: RecommendationSource>(
    outcome: FetchOutcome,
    controller: &CategorySelectionController<S>,
    resolver: &PlaceImageResolver,
) {
    if let FetchOutcome::Added(id) = outcome {
        if let Some(rec) = controller.get(id) {
            let image = resolver.resolve(&rec.name).await;
            println!("\n{}", format_card(rec, &image));
        }
    }
    if let Some(notice) = outcome.notice() {
        print_notice(notice);
    }
}

fn pick_recommendation<S: RecommendationSource>(
    controller: &CategorySelectionController<S>,
    prompt: &str,
) -> Result<Option<u64>> {
    let recs = controller.recommendations();
    if recs.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = recs
        .iter()
        .map(|r| format!("{} [{}]", jeju_guide_common::card::title(r), r.category.label()))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(recs.len() - 1)
        .interact_opt()?;
    Ok(index.map(|i| recs[i].id))
}

/// 出発地（設定値、無ければ入力）
fn current_location(config: &Config) -> Result<Option<Coordinates>> {
    if let Some(origin) = config.origin() {
        return Ok(Some(origin));
    }
    let input: String = Input::new()
        .with_prompt("현재 위치 (위도,경도)")
        .allow_empty(true)
        .interact_text()?;
    Ok(Coordinates::parse(&input))
}
