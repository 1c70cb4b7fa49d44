use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::components::input_bar::InputBar;
use crate::components::navbar::Navbar;
use crate::components::splash_screen::SplashScreen;
use crate::components::toast::{ToastAction, ToastMessage, Toaster, Toasts};
use crate::components::typing_animation::TypingAnimation;
use crate::config;
use crate::splash::{SplashPhase, SplashSequencer};
use crate::timer::BrowserScheduler;

const FEATURES: &[(&str, &str, &str)] = &[
    ("📊", "Real-time Tracking", "Monitor prices 24/7 across multiple platforms"),
    ("⚡", "Instant Alerts", "Get notified the moment prices drop"),
    ("📈", "Price History", "View detailed price trends and patterns"),
];

#[function_component]
pub fn Home() -> Html {
    let splash = use_reducer(SplashSequencer::default);

    // Runs once on mount. Dropping the handles on unmount cancels any
    // transition that has not fired yet.
    {
        let dispatcher = splash.dispatcher();
        let initial = *splash;
        use_effect_with_deps(
            move |_| {
                let handles = initial.schedule(&BrowserScheduler, move |phase| dispatcher.dispatch(phase));
                move || drop(handles)
            },
            (),
        );
    }

    match splash.phase() {
        SplashPhase::Visible => html! { <SplashScreen is_exiting={false} /> },
        SplashPhase::Exiting => html! { <SplashScreen is_exiting={true} /> },
        SplashPhase::Hidden => html! { <MainScreen /> },
    }
}

fn open_telegram_bot() {
    info!("Opening Telegram bot");
    let Some(window) = window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(config::TELEGRAM_BOT_URL, "_blank") {
        gloo_console::error!("Failed to open Telegram bot:", e);
    }
}

#[function_component(MainScreen)]
pub fn main_screen() -> Html {
    let toasts = use_reducer(Toasts::default);

    let on_notify = {
        let toasts = toasts.dispatcher();
        Callback::from(move |message: ToastMessage| toasts.dispatch(ToastAction::Push(message)))
    };
    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };
    let on_telegram = Callback::from(|_: MouseEvent| open_telegram_bot());

    html! {
        <div class="main-screen">
            <style>
                {r#"
                    .main-screen {
                        min-height: 100vh;
                        background: linear-gradient(135deg, #faf5ff 0%, #eff6ff 50%, #fdf2f8 100%);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .main-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1rem;
                    }
                    .hero {
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    .fade-in-up {
                        animation: fadeInUp 0.8s ease-out both;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto;
                        line-height: 1.75;
                    }
                    .telegram-card {
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(4px);
                        border-radius: 1rem;
                        padding: 2rem;
                        max-width: 28rem;
                        margin: 0 auto;
                        border: 1px solid rgba(229, 231, 235, 0.5);
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    }
                    .telegram-icon {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: #3b82f6;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .telegram-card h3 { font-size: 1.25rem; font-weight: 600; color: #1f2937; margin-bottom: 0.5rem; }
                    .telegram-card p { color: #4b5563; font-size: 0.875rem; margin-bottom: 1rem; }
                    .telegram-button {
                        width: 100%;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #3b82f6;
                        color: #fff;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .telegram-button:hover { background: #2563eb; }
                    .features-grid {
                        margin-top: 6rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-card {
                        background: rgba(255, 255, 255, 0.7);
                        backdrop-filter: blur(4px);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        text-align: center;
                        border: 1px solid rgba(229, 231, 235, 0.5);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
                        transition: box-shadow 0.2s;
                    }
                    .feature-card:hover { box-shadow: 0 6px 16px rgba(0, 0, 0, 0.1); }
                    .feature-icon { font-size: 2.25rem; margin-bottom: 1rem; }
                    .feature-card h3 { font-size: 1.125rem; font-weight: 600; color: #1f2937; margin-bottom: 0.5rem; }
                    .feature-card p { color: #4b5563; font-size: 0.875rem; }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .features-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <Navbar />
            <main class="main-content">
                <div class="hero">
                    <div class="fade-in-up">
                        <TypingAnimation />
                    </div>
                    <div class="fade-in-up" style="animation-delay: 0.2s;">
                        <p class="hero-subtitle">
                            {"Track prices across Amazon and Flipkart. Get instant alerts when prices drop. Never miss a deal again."}
                        </p>
                    </div>
                    <div class="fade-in-up" style="animation-delay: 0.4s;">
                        <InputBar {on_notify} />
                    </div>
                    <div class="fade-in-up" style="animation-delay: 0.6s;">
                        <div class="telegram-card">
                            <div class="telegram-icon">{"💬"}</div>
                            <h3>{"Try our Telegram Bot"}</h3>
                            <p>{"Get instant price alerts directly on Telegram. Quick, easy, and always connected."}</p>
                            <button class="telegram-button" onclick={on_telegram}>
                                {"Open Telegram Bot"}
                            </button>
                        </div>
                    </div>
                </div>

                <div class="features-grid fade-in-up" style="animation-delay: 0.8s;">
                    { for FEATURES.iter().map(|(icon, title, description)| html! {
                        <div class="feature-card" key={*title}>
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </main>
            <Toaster toasts={(*toasts).clone()} {on_dismiss} />
        </div>
    }
}
