pub mod category_bar;
pub mod header;
pub mod recommendation_card;
pub mod spinner;
pub mod weather_widget;
