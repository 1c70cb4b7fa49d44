use log::error;
use yew::prelude::*;

use crate::config;
use crate::timer::BrowserScheduler;
use crate::typist::{CursorBlink, PhraseTypist, TypingTiming, TypistAction};

fn hero_phrases() -> Vec<String> {
    config::HERO_PHRASES.iter().map(|p| p.to_string()).collect()
}

#[derive(Properties, PartialEq)]
pub struct TypingAnimationProps {
    #[prop_or_else(hero_phrases)]
    pub phrases: Vec<String>,
}

#[function_component(TypingAnimation)]
pub fn typing_animation(props: &TypingAnimationProps) -> Html {
    match PhraseTypist::new(props.phrases.iter().cloned(), TypingTiming::default()) {
        Ok(typist) => html! { <TypingHeadline {typist} /> },
        Err(e) => {
            error!("Typing headline disabled: {}", e);
            html! { <h1 class="typing-headline"></h1> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct TypingHeadlineProps {
    typist: PhraseTypist,
}

#[function_component(TypingHeadline)]
fn typing_headline(props: &TypingHeadlineProps) -> Html {
    let typist = {
        let initial = props.typist.clone();
        use_reducer(move || initial)
    };
    let cursor = use_reducer(CursorBlink::default);

    // One timer per step. Every state change re-runs this and the cleanup
    // drops the previous timer, so nothing outlives the component.
    {
        let dispatcher = typist.dispatcher();
        use_effect_with_deps(
            move |current: &PhraseTypist| {
                let handle = current.schedule_step(&BrowserScheduler, move || {
                    dispatcher.dispatch(TypistAction::Step)
                });
                move || drop(handle)
            },
            (*typist).clone(),
        );
    }

    {
        let dispatcher = cursor.dispatcher();
        use_effect_with_deps(
            move |_| {
                let handle = CursorBlink::schedule(&BrowserScheduler, config::CURSOR_BLINK_MS, move || {
                    dispatcher.dispatch(())
                });
                move || drop(handle)
            },
            (),
        );
    }

    html! {
        <div class="typing-wrapper">
            <style>
                {r#"
                    .typing-wrapper { text-align: center; }
                    .typing-headline {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 700;
                        color: #1f2937;
                        line-height: 1.2;
                        min-height: 1.2em;
                    }
                    .typing-cursor {
                        display: inline-block;
                        width: 0.25rem;
                        height: 0.9em;
                        margin-left: 0.5rem;
                        vertical-align: text-bottom;
                        background: #9333ea;
                        transition: opacity 0.1s;
                    }
                    .typing-cursor.hidden { opacity: 0; }
                "#}
            </style>
            <h1 class="typing-headline">
                {typist.current_text()}
                <span class={classes!("typing-cursor", (!cursor.visible()).then(|| "hidden"))}></span>
            </h1>
        </div>
    }
}
