use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content;
use crate::disclosure::Disclosure;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    answer: String,
    open: bool,
    on_toggle: Callback<usize>,
}

/// One accordion row. Open/closed is owned by the section so only one row
/// can be expanded at a time; the row just reports activations upward.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div id={format!("faq-{}", props.index + 1)} class={classes!("faq-item", if props.open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    /// Question index expanded on first render, if any.
    #[prop_or_default]
    pub default_open: Option<usize>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let open_question = use_state(|| Disclosure::new(props.default_open));

    // `#faq-N` fragments (1-based) deep-link into the accordion: expand the
    // question and scroll it into view once the content has its height.
    {
        let open_question = open_question.clone();
        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(hash) = window.location().hash() {
                            if let Some(position) = hash
                                .strip_prefix("#faq-")
                                .and_then(|n| n.parse::<usize>().ok())
                            {
                                if (1..=content::FAQ_ENTRIES.len()).contains(&position) {
                                    open_question.set(Disclosure::Open(position - 1));
                                    let timeout = Timeout::new(100, move || {
                                        if let Some(element) = window
                                            .document()
                                            .and_then(|doc| doc.get_element_by_id(&format!("faq-{}", position)))
                                        {
                                            element.scroll_into_view_with_bool(true);
                                        }
                                    });
                                    timeout.forget();
                                }
                            }
                        }
                    }
                };

                check_hash();

                let window = web_sys::window().unwrap();
                let callback = Closure::wrap(Box::new(check_hash) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_toggle = {
        let open_question = open_question.clone();
        Callback::from(move |index: usize| {
            open_question.set(open_question.toggle(index));
        })
    };

    html! {
        <div class="faq-list">
            { for content::FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| html! {
                <FaqItem
                    key={index}
                    {index}
                    question={question.to_string()}
                    answer={answer.to_string()}
                    open={open_question.is_open(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}
