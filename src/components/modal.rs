use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<MouseEvent>,
    pub children: Children,
}

/// Full-viewport dismissal layer. The backdrop and the × button both emit
/// `on_close`; clicks inside the panel stop propagation so they never reach
/// the backdrop handler. Callers render the modal only while open, so there
/// is no hidden instance to manage.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    html! {
        <div class="modal-overlay" onclick={props.on_close.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="modal-close" onclick={props.on_close.clone()}>{"×"}</button>
                <div class="modal-header">
                    <h3>{&props.title}</h3>
                    <div class="modal-header-rule"></div>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
