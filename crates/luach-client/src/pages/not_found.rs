//! 404 page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found" dir="rtl">
            <h1>{ "404" }</h1>
            <p>{ "הדף לא נמצא" }</p>
            <Link<Route> to={Route::Home}>{ "חזרה ללוח" }</Link<Route>>
        </div>
    }
}
