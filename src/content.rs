//! Static content for the landing page: navigation anchors, marquee brands,
//! the franchise catalog and the FAQ. Copy is the site's Portuguese text;
//! nothing here is fetched or persisted.

use yew::prelude::*;

use crate::config;

/// Navigation anchors: label and the `#section` fragment it jumps to.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Franquias", "#franquias"),
    ("Diferenciais", "#diferenciais"),
    ("Sobre", "#sobre"),
    ("FAQ", "#faq"),
];

pub const MARQUEE_BRANDS: &[&str] = &[
    "Pronto Saúde 24hs",
    "Pronto Chip",
    "Protetor 360",
    "Infra Afiliados",
    "Federal Associados",
];

/// Question/answer pairs for the accordion, in display order.
pub const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "Preciso de experiência prévia?",
        "Não. Nossas franquias são desenhadas para iniciantes, com treinamento completo e suporte 24h.",
    ),
    (
        "Quanto tempo preciso dedicar por dia?",
        "O modelo é flexível. Você pode começar com 2 horas diárias e escalar conforme seus resultados.",
    ),
    (
        "Como recebo meus lucros?",
        "Os pagamentos são realizados mensalmente de forma automática via PIX ou transferência bancária.",
    ),
    (
        "Posso ter mais de uma franquia?",
        "Sim! Muitos de nossos franqueados de sucesso operam os três modelos simultaneamente.",
    ),
];

/// Question expanded when the accordion first renders; `None` starts fully
/// collapsed.
pub const DEFAULT_OPEN_FAQ: Option<usize> = Some(0);

#[derive(Clone, Copy, PartialEq)]
pub struct Franchise {
    pub name: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub const FRANCHISES: &[Franchise] = &[
    Franchise {
        name: "Protetor 360",
        blurb: "Franquia de Mini Rastreadores parceira da Infra Afiliados. Tecnologia de ponta para proteção total.",
        price: "R$ 300,00",
        image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?q=80&w=2070&auto=format&fit=crop",
        icon: "🛡️",
        features: &[
            "Parceira Infra Afiliados",
            "2 Mini Rastreadores inclusos",
            "6 meses de rastreamento grátis (paga R$ 30,00 a cada semestre licenciamento do software)",
            "Protege carros, motos e pets",
        ],
    },
    Franchise {
        name: "Pronto Saúde 24hs",
        blurb: "Telemedicina avançada: Compre o produto e ganhe o negócio próprio.",
        price: "A partir de R$ 299,90",
        image: "https://images.unsplash.com/photo-1666214280557-f1b5022eb634?q=80&w=2070&auto=format&fit=crop",
        icon: "🩺",
        features: &[
            "Renda mensal recorrente",
            "Atendimento 24 horas",
            "Ganhos em até 3 gerações",
            "Crescimento escalável",
        ],
    },
    Franchise {
        name: "Pronto Chip",
        blurb: "Conectividade 4G/5G com planos Vivo, TIM e Claro.",
        price: "A partir de R$ 49,90",
        image: "https://images.unsplash.com/photo-1598327105666-5b89351aff97?q=80&w=2027&auto=format&fit=crop",
        icon: "📱",
        features: &[
            "+20 mil associados ativos",
            "Internet de alta velocidade",
            "Mercado de necessidade básica",
            "Baixo risco e alta aceitação",
        ],
    },
];

/// Everything the Protetor 360 panel claims the tracker protects.
const PROTECTED_ITEMS: &[(&str, &str)] = &[
    ("🚗", "Carros"),
    ("🏍️", "Motos"),
    ("🚚", "Cargas"),
    ("🚤", "Jet Skis"),
    ("🚲", "Bicicletas"),
    ("💼", "Malas"),
    ("🐕", "Pets"),
    ("🛴", "Patinetes"),
    ("🧍", "Pessoas"),
    ("👶", "Crianças"),
];

/// Rich overlay body for the offers that have one. `None` means the card's
/// DETALHES control falls back to the outbound WhatsApp link.
pub fn franchise_details(name: &str) -> Option<Html> {
    match name {
        "Protetor 360" => Some(html! {
            <div class="detail-body">
                <div class="detail-highlight">
                    <h4>{"⚡ MINI RASTREADOR 100% LUCRO!"}</h4>
                    <p class="detail-kicker">{"Parceira Infra Afiliados"}</p>
                    <div class="detail-line-grid">
                        <div class="detail-line"><span>{"🚗"}</span><span>{"Linha Veicular"}</span></div>
                        <div class="detail-line"><span>{"🏍️"}</span><span>{"Linha Motocicleta"}</span></div>
                        <div class="detail-line"><span>{"🚲"}</span><span>{"Linha Bike"}</span></div>
                        <div class="detail-line"><span>{"🐕"}</span><span>{"Linha Pet"}</span></div>
                    </div>
                </div>

                <p class="detail-lead">{"Controle total na palma da sua mão pelo APP."}</p>
                <p class="detail-gold-note">{"Seja um Afiliado e Ganhe dinheiro revendendo nossos rastreadores!"}</p>

                <div class="detail-panels">
                    <div class="detail-panel">
                        <ul class="detail-list">
                            <li>{"✓ BÔNUS INDICAÇÃO"}</li>
                            <li>{"✓ BÔNUS DE 5 NÍVEIS"}</li>
                            <li>{"✓ BÔNUS DE COMPRA"}</li>
                            <li class="detail-list-highlight">{"🏆 REVENDA 100% DE LUCRO"}</li>
                        </ul>
                    </div>
                    <div class="detail-panel">
                        <p class="detail-panel-title">{"🚀 Por que escolher o Protetor360?"}</p>
                        <ul class="detail-list muted">
                            <li>{"✔️ Tecnologia de ponta com precisão GPS"}</li>
                            <li>{"✔️ Interface fácil de usar"}</li>
                            <li>{"✔️ Cobertura nacional e suporte confiável"}</li>
                            <li>{"✔️ Segurança e tranquilidade ao seu alcance"}</li>
                        </ul>
                    </div>
                </div>

                <div class="detail-protect">
                    <h5>{"Proteja qualquer coisa que você "}<span class="gold-italic">{"valoriza"}</span></h5>
                    <div class="protect-grid">
                        { for PROTECTED_ITEMS.iter().map(|(icon, label)| html! {
                            <div class="protect-item">
                                <span class="protect-icon">{*icon}</span>
                                <span class="protect-label">{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="detail-cta">
                    {"💬 QUERO ESSA OPORTUNIDADE"}
                </a>
            </div>
        }),
        "Pronto Saúde 24hs" => Some(html! {
            <div class="detail-body">
                <p class="detail-lead italic">{"Esta é uma oportunidade limitada. Invista na sua saúde e ganhe o negócio!"}</p>

                <ul class="detail-checklist">
                    <li><span class="check-mark">{"✓"}</span><span>{"Microfranquia"}</span></li>
                    <li><span class="check-mark">{"✓"}</span><span>{"Treinamento completo"}</span></li>
                    <li><span class="check-mark">{"✓"}</span><span>{"1 ano de telemedicina que pode ser individual ou familiar."}</span></li>
                    <li><span class="check-mark">{"✓"}</span><span>{"Telemedicina para Famílias — Transforme Saúde em Renda!"}</span></li>
                    <li><span class="check-mark">{"✓"}</span><span>{"Compre o Produto e Ganhe o Negócio!"}</span></li>
                </ul>

                <div class="detail-panel">
                    <p>{"Na Pronto Saúde 24hs, você constrói uma renda fixa mensal crescente com um sistema inteligente e escalável, onde cada novo cliente também se tornará seu novo microfranqueado."}</p>
                    <div class="commission-line">
                        <span class="dot"></span>
                        <p><strong>{"65% de comissão"}</strong>{" na adesão, "}<strong>{"20% sobre mensalidades"}</strong>{" diretas (1° geração)"}</p>
                    </div>
                    <div class="commission-master">
                        <p class="detail-panel-title">{"Master"}</p>
                        <div class="commission-line">
                            <span class="dot"></span>
                            <p><strong>{"20% das mensalidades"}</strong>{" diretas, "}<strong>{"10% dos indiretos"}</strong>{" (2° geração)"}</p>
                        </div>
                    </div>
                </div>

                <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="detail-cta">
                    {"💬 QUERO ESSA OPORTUNIDADE"}
                </a>
            </div>
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{franchise_details, DEFAULT_OPEN_FAQ, FAQ_ENTRIES, FRANCHISES, NAV_LINKS};

    #[test]
    fn franchise_catalog_is_complete() {
        assert_eq!(FRANCHISES.len(), 3);
        for franchise in FRANCHISES {
            assert!(!franchise.features.is_empty());
            assert!(franchise.image.starts_with("https://"));
            assert!(!franchise.price.is_empty());
        }
        let mut names: Vec<_> = FRANCHISES.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn offers_without_a_detail_body_fall_back_to_the_outbound_link() {
        assert!(franchise_details("Protetor 360").is_some());
        assert!(franchise_details("Pronto Saúde 24hs").is_some());
        assert!(franchise_details("Pronto Chip").is_none());
        assert!(franchise_details("Outra Marca").is_none());
    }

    #[test]
    fn rich_detail_bodies_are_not_empty() {
        // The detail overlay mounts only when a body exists, so a present
        // body must never be the empty node.
        for name in ["Protetor 360", "Pronto Saúde 24hs"] {
            let body = franchise_details(name).expect("rich body");
            assert_ne!(body, yew::Html::default());
        }
    }

    #[test]
    fn accordion_default_targets_an_existing_question() {
        assert!(!FAQ_ENTRIES.is_empty());
        if let Some(index) = DEFAULT_OPEN_FAQ {
            assert!(index < FAQ_ENTRIES.len());
        }
    }

    #[test]
    fn nav_anchors_are_all_fragments() {
        for (_, anchor) in NAV_LINKS {
            assert!(anchor.starts_with('#'));
        }
    }
}
