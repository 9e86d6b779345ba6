use yew::prelude::*;

use crate::components::nav_link::NavLink;
use crate::content::BRAND;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{format!("The page you are looking for is not part of {}.", BRAND)}</p>
            <NavLink to={Route::Home} classes="forward-link" active_classes="active">
                {"Back to home"}
            </NavLink>
        </div>
    }
}
