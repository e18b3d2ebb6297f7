//! Home page component.

use portfolio_types::{SiteProfile, WeekStore};
use yew::prelude::*;

use crate::components::{CardContent, WeekCard};

/// One card per week, in store order.
fn project_cards(store: &WeekStore, asset_base: &str) -> Vec<CardContent> {
    store
        .iter()
        .map(|week| CardContent::for_week(week, asset_base))
        .collect()
}

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let profile = use_context::<SiteProfile>().unwrap_or_default();
    let cards = project_cards(weeks_content::store(), &profile.asset_base);

    html! {
        <div class="home">
            <section class="hero">
                <div class="hero-text">
                    <h1>{ profile.greeting() }</h1>
                    <p class="tagline">{ &profile.tagline }</p>
                    <p class="bio">{ &profile.bio }</p>
                </div>
            </section>

            <section class="projects">
                <h2>{"Weekly Projects"}</h2>
                <div class="projects-grid">
                    { for cards.into_iter().map(|card| {
                        let key = card.week_id;
                        html! { <WeekCard key={key} {card} /> }
                    })}
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_types::WeekRecord;
    use yew_router::Routable;

    #[test]
    fn test_one_card_per_week_in_store_order() {
        let store = weeks_content::store();
        let cards = project_cards(store, "");

        assert_eq!(cards.len(), store.len());
        let card_ids: Vec<u32> = cards.iter().map(|c| c.week_id).collect();
        let store_ids: Vec<u32> = store.iter().map(|w| w.id).collect();
        assert_eq!(card_ids, store_ids);
    }

    #[test]
    fn test_cards_link_to_week_pages() {
        for card in project_cards(weeks_content::store(), "") {
            assert_eq!(card.route.to_path(), format!("/week/{}", card.week_id));
        }
    }

    #[test]
    fn test_cards_keep_unsorted_store_order() {
        let store = WeekStore::new(vec![
            WeekRecord::new(5, "Five", "", "", "gifs/5.gif", ""),
            WeekRecord::new(2, "Two", "", "", "gifs/2.gif", ""),
        ]);

        let titles: Vec<String> = project_cards(&store, "")
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Five", "Two"]);
    }

    #[test]
    fn test_card_content_for_week() {
        let week = weeks_content::store().lookup("3").unwrap();
        let card = CardContent::for_week(week, "static");

        assert_eq!(card.image_src, "static/gifs/week3-functions.gif");
        assert_eq!(card.alt, "Week 3: Functions & Randomness");
        assert_eq!(card.heading, "Week 3");
        assert_eq!(card.topics, week.topics);
    }
}
