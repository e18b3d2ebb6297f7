//! Week detail page component.

use portfolio_types::{Adjacent, PreviewSize, SiteProfile, WeekRecord, WeekStore, resolve_asset};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{CodeBlock, PreviewImage};
use crate::pages::NotFoundPage;

/// What the detail route shows for a raw id segment.
#[derive(Debug, PartialEq)]
enum DetailView<'a> {
    Week {
        week: &'a WeekRecord,
        adjacent: Adjacent,
    },
    NotFound,
}

fn resolve_detail<'a>(store: &'a WeekStore, raw: &str) -> DetailView<'a> {
    match store.lookup(raw) {
        Ok(week) => DetailView::Week {
            week,
            adjacent: store.adjacent(week.id),
        },
        Err(e) => {
            log::debug!("Week route {:?} did not resolve: {}", raw, e);
            DetailView::NotFound
        }
    }
}

/// One side of the week-to-week navigation.
#[derive(Debug, Clone, PartialEq)]
enum NavSlot {
    Link {
        route: Route,
        label: String,
        class: &'static str,
    },
    Empty,
}

/// Previous and next slots. A missing neighbour leaves an empty slot.
fn nav_slots(adjacent: Adjacent) -> [NavSlot; 2] {
    let previous = match adjacent.previous {
        Some(prev) => NavSlot::Link {
            route: Route::week(prev),
            label: format!("← Week {}", prev),
            class: "nav-prev",
        },
        None => NavSlot::Empty,
    };

    let next = match adjacent.next {
        Some(next) => NavSlot::Link {
            route: Route::week(next),
            label: format!("Week {} →", next),
            class: "nav-next",
        },
        None => NavSlot::Empty,
    };

    [previous, next]
}

/// Properties for WeekDetailPage.
#[derive(Properties, PartialEq)]
pub struct WeekDetailPageProps {
    /// Raw id segment from the route
    pub week_id: String,
}

/// Week detail page component.
#[function_component(WeekDetailPage)]
pub fn week_detail_page(props: &WeekDetailPageProps) -> Html {
    let profile = use_context::<SiteProfile>().unwrap_or_default();

    let DetailView::Week { week, adjacent } =
        resolve_detail(weeks_content::store(), &props.week_id)
    else {
        return html! { <NotFoundPage /> };
    };

    let src = resolve_asset(&profile.asset_base, &week.image_path);

    html! {
        <div class="week-page">
            <header class="week-header">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to Home"}
                </Link<Route>>
                <h1>{ week.heading() }</h1>
                <p class="topics">{ &week.topics }</p>
            </header>

            <div class="week-content">
                <div class="week-visual">
                    <div class="sketch-preview">
                        <PreviewImage
                            week_id={week.id}
                            src={src}
                            alt={format!("Week {} sketch preview", week.id)}
                            size={PreviewSize::Detail}
                        />
                    </div>
                    <a
                        href={week.sketch_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="sketch-link"
                    >
                        {"View Live Sketch →"}
                    </a>
                </div>

                <div class="week-details">
                    <section class="detail-section">
                        <h2>{"About This Project"}</h2>
                        <p>{ &week.description }</p>
                    </section>

                    <section class="detail-section">
                        <h2>{"What I Learned"}</h2>
                        <ul class="learnings-list">
                            { for week.learnings.iter().map(|learning| html! {
                                <li>{ learning }</li>
                            })}
                        </ul>
                    </section>

                    <section class="detail-section">
                        <h2>{"Challenges"}</h2>
                        <p>{ &week.challenges }</p>
                    </section>

                    <section class="detail-section">
                        <h2>{"Code Snippet"}</h2>
                        <CodeBlock key={week.id} code={week.code_snippet.clone()} />
                    </section>
                </div>
            </div>

            <WeekNav {adjacent} />
        </div>
    }
}

/// Properties for WeekNav.
#[derive(Properties, PartialEq)]
struct WeekNavProps {
    adjacent: Adjacent,
}

#[function_component(WeekNav)]
fn week_nav(props: &WeekNavProps) -> Html {
    html! {
        <nav class="week-nav">
            { for nav_slots(props.adjacent).into_iter().map(|slot| match slot {
                NavSlot::Link { route, label, class } => html! {
                    <Link<Route> to={route} classes={class}>{ label }</Link<Route>>
                },
                NavSlot::Empty => html! { <span></span> },
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_week_resolves_to_not_found() {
        let store = weeks_content::store();

        for raw in ["11", "abc", "-1", "3abc", ""] {
            assert_eq!(resolve_detail(store, raw), DetailView::NotFound, "{raw:?}");
        }
    }

    #[test]
    fn test_known_week_resolves_with_neighbours() {
        let store = weeks_content::store();

        let DetailView::Week { week, adjacent } = resolve_detail(store, "3") else {
            panic!("week 3 should resolve");
        };
        assert_eq!(week.id, 3);
        assert_eq!(adjacent.previous, Some(2));
        assert_eq!(adjacent.next, Some(4));
    }

    #[test]
    fn test_first_week_has_empty_previous_slot() {
        let adjacent = weeks_content::store().adjacent(0);

        let [previous, next] = nav_slots(adjacent);
        assert_eq!(previous, NavSlot::Empty);
        assert_eq!(
            next,
            NavSlot::Link {
                route: Route::week(1),
                label: "Week 1 →".to_string(),
                class: "nav-next",
            }
        );
    }

    #[test]
    fn test_last_week_has_empty_next_slot() {
        let adjacent = weeks_content::store().adjacent(10);

        let [previous, next] = nav_slots(adjacent);
        assert_eq!(
            previous,
            NavSlot::Link {
                route: Route::week(9),
                label: "← Week 9".to_string(),
                class: "nav-prev",
            }
        );
        assert_eq!(next, NavSlot::Empty);
    }

    #[test]
    fn test_lone_week_has_no_links() {
        assert_eq!(
            nav_slots(Adjacent::default()),
            [NavSlot::Empty, NavSlot::Empty]
        );
    }
}
