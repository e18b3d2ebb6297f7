//! Home grid card for a single week.

use portfolio_types::{PreviewSize, WeekId, WeekRecord, resolve_asset};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::PreviewImage;

/// Everything a card shows, resolved from a week record.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub week_id: WeekId,
    pub route: Route,
    pub image_src: String,
    pub alt: String,
    pub heading: String,
    pub title: String,
    pub topics: String,
}

impl CardContent {
    pub fn for_week(week: &WeekRecord, asset_base: &str) -> Self {
        Self {
            week_id: week.id,
            route: Route::week(week.id),
            image_src: resolve_asset(asset_base, &week.image_path),
            alt: format!("Week {}: {}", week.id, week.title),
            heading: format!("Week {}", week.id),
            title: week.title.clone(),
            topics: week.topics.clone(),
        }
    }
}

/// Properties for WeekCard component.
#[derive(Properties, PartialEq)]
pub struct WeekCardProps {
    pub card: CardContent,
}

/// Week card component.
#[function_component(WeekCard)]
pub fn week_card(props: &WeekCardProps) -> Html {
    let card = &props.card;

    html! {
        <Link<Route> to={card.route.clone()} classes="project-card">
            <div class="card-image">
                <PreviewImage
                    week_id={card.week_id}
                    src={card.image_src.clone()}
                    alt={card.alt.clone()}
                    size={PreviewSize::Card}
                />
            </div>
            <div class="card-content">
                <h3>{ &card.heading }</h3>
                <h4>{ &card.title }</h4>
                <p class="topics">{ &card.topics }</p>
            </div>
        </Link<Route>>
    }
}
