use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::ToastMessage;
use crate::tracking::{start_tracking, Submission, TrackForm, TrackFormAction};

#[derive(Properties, PartialEq)]
pub struct InputBarProps {
    pub on_notify: Callback<ToastMessage>,
}

#[function_component(InputBar)]
pub fn input_bar(props: &InputBarProps) -> Html {
    let form = use_reducer(TrackForm::default);

    let oninput = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(TrackFormAction::Edit(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submission() {
                Submission::Ignored => {}
                Submission::Rejected(err) => {
                    warn!("Rejected product link: {}", err);
                    on_notify.emit(ToastMessage::from_error(&err));
                }
                Submission::Start { url, platform } => {
                    info!("Submitting {} link for tracking", platform.name());
                    form.dispatch(TrackFormAction::Begin);
                    let dispatcher = form.dispatcher();
                    let on_notify = on_notify.clone();
                    spawn_local(async move {
                        let result = start_tracking(url, platform).await;
                        on_notify.emit(ToastMessage::for_tracking_result(&result));
                        dispatcher.dispatch(TrackFormAction::Finish(result));
                    });
                }
            }
        })
    };

    html! {
        <div class="input-bar">
            <style>
                {r#"
                    .input-bar {
                        width: 100%;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .input-shell {
                        display: flex;
                        align-items: center;
                        background: #fff;
                        border-radius: 9999px;
                        border: 2px solid #e5e7eb;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                        transition: border-color 0.3s, box-shadow 0.3s;
                    }
                    .input-shell:hover { border-color: #d8b4fe; }
                    .input-shell:focus-within {
                        border-color: #a855f7;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                    }
                    .input-icon { padding: 0 1rem 0 1.5rem; color: #9ca3af; font-size: 1.25rem; }
                    .input-shell input {
                        flex: 1;
                        border: none;
                        background: transparent;
                        font-size: 1.125rem;
                        padding: 1.5rem 0;
                        outline: none;
                        min-width: 0;
                    }
                    .track-button {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin: 0.5rem;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        font-weight: 600;
                        font-size: 1.125rem;
                        cursor: pointer;
                        background: linear-gradient(90deg, #9333ea, #2563eb);
                    }
                    .track-button:disabled { opacity: 0.5; cursor: not-allowed; }
                    .track-spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .input-hint { text-align: center; margin-top: 1.5rem; color: #4b5563; font-size: 0.875rem; }
                "#}
            </style>
            <form {onsubmit}>
                <div class="input-shell">
                    <span class="input-icon">{"🔍"}</span>
                    <input
                        type="url"
                        value={form.url().to_string()}
                        {oninput}
                        placeholder="Paste your Amazon or Flipkart product link here..."
                        disabled={form.is_loading()}
                    />
                    <button type="submit" class="track-button" disabled={!form.can_submit()}>
                        if form.is_loading() {
                            <>
                                <span class="track-spinner"></span>
                                <span>{"Tracking..."}</span>
                            </>
                        } else {
                            <>
                                <span>{"➤"}</span>
                                <span>{"Track Price"}</span>
                            </>
                        }
                    </button>
                </div>
            </form>
            <div class="input-hint">
                <p>{"Supported platforms: Amazon, Flipkart • Free price alerts via email"}</p>
            </div>
        </div>
    }
}
