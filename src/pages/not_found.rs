use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; font-family: sans-serif;">
            <h1 style="font-size: 3rem; font-weight: 700; color: #1f2937;">{"404"}</h1>
            <p style="color: #4b5563; font-size: 1.25rem;">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="home-link">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
