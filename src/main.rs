use clap::Parser;
use jeju_guide::{chat, cli, completion, config, controller, error, images, logging, render, weather};
use cli::{Cli, Commands};
use completion::RecommendationClient;
use config::Config;
use controller::CategorySelectionController;
use error::Result;
use images::PlaceImageResolver;
use jeju_guide_common::FetchOutcome;
use std::sync::Arc;
use weather::{weather_line, WeatherClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    let http = reqwest::Client::builder().timeout(config.timeout()).build()?;

    match cli.command {
        Commands::Chat => {
            let resolver = Arc::new(PlaceImageResolver::new(http.clone(), &config.lookup_source));
            let weather = WeatherClient::from_config(http.clone(), &config);
            let client = RecommendationClient::from_config(http, &config)?;
            let mut controller = CategorySelectionController::new(client);

            chat::run_chat(&config, &mut controller, &resolver, &weather).await?;
        }

        Commands::Recommend { category, count, json } => {
            let resolver = PlaceImageResolver::new(http.clone(), &config.lookup_source);
            let client = RecommendationClient::from_config(http, &config)?;
            let mut controller = CategorySelectionController::new(client);

            for i in 0..count.max(1) {
                let outcome = if i == 0 {
                    controller.select_category(category).await
                } else {
                    controller.add_more().await
                };

                if json {
                    continue;
                }
                if let FetchOutcome::Added(id) = outcome {
                    if let Some(rec) = controller.get(id) {
                        let image = resolver.resolve(&rec.name).await;
                        println!("{}", render::format_card(rec, &image));
                    }
                }
                if let Some(notice) = outcome.notice() {
                    render::print_notice(notice);
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(controller.recommendations())?);
            }
        }

        Commands::Weather { location } => {
            let weather = WeatherClient::from_config(http, &config);
            let location = location.unwrap_or_else(|| config.weather_location.clone());
            if let Some(report) = weather.fetch_current(&location).await {
                println!("{}", weather_line(&report));
            }
        }

        Commands::Image { name, table } => {
            let source = table
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| config.lookup_source.clone());
            let resolver = PlaceImageResolver::new(http, source);
            println!("{}", resolver.resolve(&name).await);
        }

        Commands::Config { set_completion_key, set_weather_key, show } => {
            // 環境変数を混ぜずにファイルの内容だけを書き戻す
            let mut file_config = Config::load_file()?;

            if let Some(key) = set_completion_key {
                file_config.completion_api_key = Some(key);
                file_config.save()?;
                println!("✔ 추천 API 키를 저장했습니다");
            }

            if let Some(key) = set_weather_key {
                file_config.weather_api_key = Some(key);
                file_config.save()?;
                println!("✔ 날씨 API 키를 저장했습니다");
            }

            if show {
                let config = file_config.with_env_overrides(|key| std::env::var(key).ok());
                let set = |v: bool| if v { "설정됨" } else { "미설정" };
                println!("설정 ({}):", Config::config_path()?.display());
                println!("  추천 API: {}", config.completion_endpoint);
                println!("  추천 API 키: {}", set(config.completion_api_key.is_some()));
                println!("  날씨 API: {}", config.weather_endpoint);
                println!("  날씨 API 키: {}", set(config.weather_api_key.is_some()));
                println!("  날씨 지역: {}", config.weather_location);
                println!("  이미지 목록: {}", config.lookup_source);
                println!("  출발지: {}", config.origin.as_deref().unwrap_or("미설정"));
                println!("  타임아웃: {}초", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
