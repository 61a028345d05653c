//! 地図の経路URL

use url::Url;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// 現在地
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// "33.4996,126.5312" 形式をパース
    pub fn parse(text: &str) -> Option<Self> {
        let (lat, lon) = text.split_once(',')?;
        let latitude: f64 = lat.trim().parse().ok()?;
        let longitude: f64 = lon.trim().parse().ok()?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self { latitude, longitude })
    }
}

/// 現在地から場所名までの経路URL
///
/// 場所名はパスセグメントとしてパーセントエンコードする。
pub fn directions_url(origin: Coordinates, place_name: &str) -> String {
    let origin_segment = format!("{},{}", origin.latitude, origin.longitude);
    match Url::parse(DIRECTIONS_BASE) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(&origin_segment).push(place_name);
            }
            url.to_string()
        }
        Err(_) => format!("{}{}/{}", DIRECTIONS_BASE, origin_segment, place_name),
    }
}
