use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod disclosure;
mod components {
    pub mod faq;
    pub mod franchise_card;
    pub mod modal;
}
mod pages {
    pub mod landing;
}

use disclosure::Disclosure;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
    }
}

/// Scroll offset (in px) past which the nav switches to its solid style.
const NAV_SCROLL_THRESHOLD: i32 = 50;

fn past_nav_threshold(scroll_top: i32) -> bool {
    scroll_top > NAV_SCROLL_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(|| Disclosure::<()>::Closed);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(past_nav_threshold(scroll_top));
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle(()));
        })
    };

    // No prevent_default here: the links are fragment anchors and the
    // browser still has to perform the jump after the menu folds away.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.close());
        })
    };

    let menu_class = if menu.is_any_open() {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <span class="nav-logo-badge">{"📈"}</span>
                    <span class="nav-logo-name">{"VALOR"}<span class="gold">{"NOBRE"}</span></span>
                </a>

                <button class={classes!("burger-menu", menu.is_any_open().then(|| "open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for content::NAV_LINKS.iter().map(|(label, target)| html! {
                        <a href={*target} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                    <a href={config::WHATSAPP_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                        onclick={close_menu.clone()}>
                        {"Seja Franqueado"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::past_nav_threshold;

    #[test]
    fn nav_threshold_is_exclusive_at_the_boundary() {
        assert!(!past_nav_threshold(0));
        assert!(!past_nav_threshold(50));
        assert!(past_nav_threshold(51));
        assert!(past_nav_threshold(5_000));
    }

    #[test]
    fn mobile_menu_open_state_animates_in() {
        // The open-state swap is display none to flex, and transitions do
        // not run across display flips; the slide has to be a keyframe
        // animation on the open state.
        let sheet = include_str!("../styles.css");
        assert!(sheet.contains("@keyframes menu-slide"));

        let open_rule = sheet
            .split(".nav-right.mobile-menu-open {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect("open-state rule present");
        assert!(open_rule.contains("animation: menu-slide"));
    }
}
