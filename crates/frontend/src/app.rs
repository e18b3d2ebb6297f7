//! Main application component with routing.

use portfolio_types::{SiteProfile, WeekId, parse_week_id};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::pages::{HomePage, NotFoundPage, WeekDetailPage};

/// Application routes.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/week/:id")]
    Week { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route to a week's detail page.
    pub fn week(id: WeekId) -> Self {
        Self::Week { id: id.to_string() }
    }

    /// Week id this route points at, if it parses.
    pub fn week_id(&self) -> Option<WeekId> {
        match self {
            Self::Week { id } => parse_week_id(id).ok(),
            _ => None,
        }
    }
}

/// Whether a navigation link to `target` is the current page.
///
/// Home matches only the root route. Week links match on the parsed id.
fn is_current(current: Option<&Route>, target: &Route) -> bool {
    match (current, target) {
        (Some(Route::Home), Route::Home) => true,
        (Some(current), Route::Week { .. }) => {
            current.week_id().is_some() && current.week_id() == target.week_id()
        }
        _ => false,
    }
}

fn nav_classes(current: Option<&Route>, target: &Route) -> Classes {
    classes!(is_current(current, target).then_some("active"))
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Week { id } => html! { <WeekDetailPage week_id={id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let profile = use_memo((), |_| config::site_profile());

    html! {
        <ContextProvider<SiteProfile> context={(*profile).clone()}>
            <HashRouter>
                <div class="app">
                    <Navbar />
                    <main class="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </HashRouter>
        </ContextProvider<SiteProfile>>
    }
}

/// Top navigation bar, shown on every page.
#[function_component(Navbar)]
fn navbar() -> Html {
    let profile = use_context::<SiteProfile>().unwrap_or_default();
    let route = use_route::<Route>();
    let current = route.as_ref();

    html! {
        <nav class="navbar">
            <div class="navbar-brand">
                <Link<Route> to={Route::Home}>
                    { &profile.owner_name }
                </Link<Route>>
            </div>
            <div class="navbar-links">
                <Link<Route> to={Route::Home} classes={nav_classes(current, &Route::Home)}>
                    {"Home"}
                </Link<Route>>
                <div class="navbar-weeks">
                    <span class="weeks-label">{"Weeks:"}</span>
                    { for weeks_content::store().iter().map(|week| {
                        let target = Route::week(week.id);
                        let classes = nav_classes(current, &target);
                        html! {
                            <Link<Route> key={week.id} to={target} {classes}>
                                { week.id.to_string() }
                            </Link<Route>>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}
