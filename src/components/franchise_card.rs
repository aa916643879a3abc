use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::config;
use crate::content::{self, Franchise};
use crate::disclosure::Disclosure;

#[derive(Properties, PartialEq)]
pub struct FranchiseCardProps {
    pub franchise: Franchise,
}

/// One offer card. Cards with a rich detail body open it in an overlay; the
/// overlay is absent from the tree while closed and built fresh on open.
/// Cards without one link straight out to WhatsApp instead.
#[function_component(FranchiseCard)]
pub fn franchise_card(props: &FranchiseCardProps) -> Html {
    let detail = use_state(|| Disclosure::<()>::Closed);

    let open_detail = {
        let detail = detail.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            detail.set(detail.toggle(()));
        })
    };

    let close_detail = {
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| {
            detail.set(detail.close());
        })
    };

    let franchise = props.franchise;
    let details = content::franchise_details(franchise.name);

    html! {
        <>
            <div class="franchise-card">
                <div class="card-media">
                    <img src={franchise.image} alt={franchise.name} loading="lazy" referrerpolicy="no-referrer" />
                    <div class="card-media-overlay"></div>
                    <div class="card-identity">
                        <span class="card-icon">{franchise.icon}</span>
                        <h3>{franchise.name}</h3>
                    </div>
                </div>
                <div class="card-body">
                    <p class="card-blurb">{franchise.blurb}</p>
                    <ul class="card-features">
                        { for franchise.features.iter().map(|feature| html! {
                            <li><span class="check-mark">{"✓"}</span><span>{*feature}</span></li>
                        }) }
                    </ul>
                    <div class="card-footer">
                        <div>
                            <p class="invest-label">{"Investimento"}</p>
                            <p class="invest-price">{franchise.price}</p>
                        </div>
                        {
                            if details.is_some() {
                                html! {
                                    <button class="card-details-button" onclick={open_detail}>
                                        {"DETALHES"}
                                    </button>
                                }
                            } else {
                                html! {
                                    <a href={config::WHATSAPP_URL}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="card-details-button">
                                        {"DETALHES"}
                                    </a>
                                }
                            }
                        }
                    </div>
                </div>
            </div>
            {
                match (detail.is_any_open(), details.clone()) {
                    (true, Some(body)) => html! {
                        <Modal title={franchise.name.to_string()} on_close={close_detail}>
                            { body }
                        </Modal>
                    },
                    _ => html! {},
                }
            }
        </>
    }
}
