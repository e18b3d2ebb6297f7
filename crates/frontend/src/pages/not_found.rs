//! Not-found page, shown for unknown weeks and unmatched routes.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="week-page">
            <div class="not-found">
                <h1>{"Week Not Found"}</h1>
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
