use yew::prelude::*;

const NAV_LINKS: &[&str] = &["How it works", "Features", "Pricing"];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        width: 100%;
                        padding: 1rem 1.5rem;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid rgba(229, 231, 235, 0.5);
                        box-sizing: border-box;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo { display: flex; align-items: center; gap: 0.5rem; }
                    .nav-logo-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(90deg, #9333ea, #2563eb);
                        color: #fff;
                        font-size: 0.9rem;
                    }
                    .nav-logo-text {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(90deg, #9333ea, #2563eb);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .nav-links { display: flex; gap: 2rem; }
                    .nav-link { color: #4b5563; font-weight: 500; text-decoration: none; transition: color 0.2s; }
                    .nav-link:hover { color: #9333ea; }
                    .nav-right { display: flex; align-items: center; gap: 1rem; }
                    .nav-icon-button {
                        position: relative;
                        background: none;
                        border: none;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                    .nav-badge {
                        position: absolute;
                        top: -0.25rem;
                        right: -0.25rem;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #ef4444;
                    }
                    .nav-signin {
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        font-weight: 500;
                        cursor: pointer;
                        background: linear-gradient(90deg, #9333ea, #2563eb);
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="nav-logo-mark">{"🔍"}</div>
                    <span class="nav-logo-text">{"PriceAlert AI"}</span>
                </div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|label| html! {
                        <a href="#" class="nav-link">{*label}</a>
                    }) }
                </div>
                <div class="nav-right">
                    <button class="nav-icon-button" aria-label="Notifications">
                        {"🔔"}
                        <span class="nav-badge"></span>
                    </button>
                    <button class="nav-icon-button" aria-label="Account">{"👤"}</button>
                    <button class="nav-signin">{"Sign In"}</button>
                </div>
            </div>
        </nav>
    }
}
