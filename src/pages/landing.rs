use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::franchise_card::FranchiseCard;
use crate::config;
use crate::content;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <div class="background-blobs">
                <div class="blob blob-1"></div>
                <div class="blob blob-2"></div>
                <div class="blob blob-3"></div>
                <div class="blob blob-4"></div>
                <div class="blob blob-5"></div>
            </div>

            <header id="home" class="hero">
                <div class="hero-background">
                    <img src="https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070&auto=format&fit=crop"
                        alt="Prédio comercial ao anoitecer"
                        referrerpolicy="no-referrer" />
                    <div class="hero-gradient"></div>
                </div>
                <div class="hero-content">
                    <div class="hero-copy">
                        <div class="hero-badge">
                            <span class="badge-icon">{"🏆"}</span>
                            <span>{"Líder em Franquias Digitais 2025"}</span>
                        </div>
                        <h1 class="hero-title">
                            {"A LIBERDADE "}<br />
                            <span class="gold-italic">{"DIGITAL"}</span>{" AO "}<br />
                            {"SEU ALCANCE."}
                        </h1>
                        <p class="hero-sub">
                            {"Transforme sua carreira com modelos de negócios validados, baixo investimento e suporte 24h. O futuro do empreendedorismo home office começa aqui."}
                        </p>
                        <div class="hero-cta-group">
                            <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="cta-primary">
                                {"QUERO COMEÇAR AGORA →"}
                            </a>
                            <a href="#franquias" class="cta-secondary">{"VER MODELOS"}</a>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <div class="hero-photo">
                            <img src="https://images.unsplash.com/photo-1556761175-b413da4baf72?q=80&w=1974&auto=format&fit=crop"
                                alt="Empreendedora trabalhando em home office"
                                loading="lazy"
                                referrerpolicy="no-referrer" />
                        </div>
                        <div class="testimonial-card">
                            <div class="star-row">
                                { for (0..5).map(|_| html! { <span class="star">{"★"}</span> }) }
                            </div>
                            <p class="testimonial-quote">
                                {"\"A melhor decisão que tomei para minha transição de carreira. Suporte impecável.\""}
                            </p>
                            <div class="testimonial-author">
                                <div class="author-avatar"></div>
                                <div>
                                    <p class="author-name">{"Ricardo Santos"}</p>
                                    <p class="author-role">{"Franqueado Master"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </header>

            <div class="marquee">
                <div class="marquee-track">
                    { for (0..10).map(|_| html! {
                        <div class="marquee-group">
                            { for content::MARQUEE_BRANDS.iter().map(|brand| html! {
                                <span class="marquee-item">{*brand}</span>
                            }) }
                        </div>
                    }) }
                </div>
            </div>

            <section id="diferenciais" class="differentials">
                <div class="section-heading">
                    <h2>{"Por que escolher a "}<span class="gold-italic">{"Valor Nobre"}</span>{"?"}</h2>
                    <p>{"Combinamos tecnologia de ponta com um modelo de negócios simplificado para garantir seu sucesso desde o primeiro dia."}</p>
                </div>

                <div class="bento-grid">
                    <div class="bento-item">
                        <div class="bento-icon">{"🕐"}</div>
                        <h3>{"Atendimento 24 Horas"}</h3>
                        <p>{"Diferente de qualquer outra franquia, oferecemos atendimento total e ininterrupto para você e seus clientes finais. Você nunca estará sozinho."}</p>
                    </div>
                    <div class="bento-item">
                        <div class="bento-icon">{"⚡"}</div>
                        <h3>{"Baixo Investimento"}</h3>
                        <p>{"Modelos a partir de R$ 29,90. Democratizamos o acesso ao empreendedorismo de alto nível."}</p>
                    </div>
                    <div class="bento-item">
                        <div class="bento-icon">{"📈"}</div>
                        <h3>{"Escalabilidade Real"}</h3>
                        <p>{"Ganhe sobre vendas diretas e recorrentes. Crie sua própria rede de microfranqueados."}</p>
                    </div>
                    <div class="bento-item bento-wide">
                        <div class="bento-wide-copy">
                            <div class="bento-icon">{"🛡️"}</div>
                            <h3>{"Segurança e Suporte"}</h3>
                            <p>{"Modelos validados com milhares de associados. Treinamento completo para iniciantes sem qualquer experiência prévia."}</p>
                        </div>
                        <div class="bento-wide-image">
                            <img src="https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=2070&auto=format&fit=crop"
                                alt="Central de monitoramento"
                                loading="lazy"
                                referrerpolicy="no-referrer" />
                        </div>
                    </div>
                </div>
            </section>

            <section id="franquias" class="franchises">
                <div class="franchises-header">
                    <div>
                        <h2>{"Nossas "}<span class="gold-italic">{"Oportunidades"}</span></h2>
                        <p>
                            {"Três caminhos distintos para sua liberdade financeira. "}
                            <span class="gold-bold">{"As 3 franquias saem a partir de R$ 379,80."}</span>
                        </p>
                    </div>
                    <div class="header-pills">
                        <div class="pill">{"3 Modelos Ativos"}</div>
                        <div class="pill gold">{"Atendimento 24h"}</div>
                    </div>
                </div>
                <div class="franchise-grid">
                    { for content::FRANCHISES.iter().map(|franchise| html! {
                        <FranchiseCard key={franchise.name} franchise={*franchise} />
                    }) }
                </div>
            </section>

            <section id="sobre" class="about">
                <div class="about-visual">
                    <div class="about-photo">
                        <img src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2070&auto=format&fit=crop"
                            alt="Equipe Valor Nobre reunida"
                            loading="lazy"
                            referrerpolicy="no-referrer" />
                    </div>
                    <div class="about-stat-card">
                        <p class="stat-number">{"10k+"}</p>
                        <p class="stat-label">{"Franqueados Felizes"}</p>
                    </div>
                </div>
                <div class="about-copy">
                    <h2>{"Nossa Missão é o Seu "}<span class="gold-italic">{"Sucesso"}</span>{"."}</h2>
                    <p>{"Nascemos com o propósito de democratizar o acesso ao empreendedorismo digital de alto nível. Acreditamos que todos, independentemente da experiência prévia, merecem a chance de construir um patrimônio sólido trabalhando de casa."}</p>
                    <div class="about-values">
                        <div>
                            <h4>{"Visão"}</h4>
                            <p>{"Ser a maior rede de microfranquias digitais da América Latina até 2027."}</p>
                        </div>
                        <div>
                            <h4>{"Valores"}</h4>
                            <p>{"Transparência, suporte incondicional e inovação constante."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Dúvidas "}<span class="gold-italic">{"Frequentes"}</span></h2>
                <FaqSection default_open={content::DEFAULT_OPEN_FAQ} />
            </section>

            <section id="contato" class="contact">
                <div class="contact-panel">
                    <div class="contact-glow top"></div>
                    <div class="contact-glow bottom"></div>
                    <div class="contact-copy">
                        <h2>{"PRONTO PARA"}<br /><span class="gold-italic">{"TRANSFORMAR"}</span>{" SUA VIDA?"}</h2>
                        <p>{"Nossos consultores estão prontos para te guiar na escolha do melhor modelo para o seu perfil. Fale conosco agora mesmo."}</p>
                        <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="contact-cta">
                            {"💬 CHAMAR NO WHATSAPP"}
                        </a>
                        <p class="contact-note">{"Atendimento imediato • Vagas limitadas por região"}</p>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-brand">
                    <span class="footer-badge">{"📈"}</span>
                    <span class="footer-name">{"VALOR"}<span class="gold">{"NOBRE"}</span></span>
                </div>
                <div class="footer-copy">
                    {"© 2026 Site de Franquias Barata. Todos os direitos reservados."}
                </div>
                <div class="footer-links">
                    <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                </div>
            </footer>

            <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="whatsapp-float">
                {"💬"}
            </a>

            <style>
                {r#"
                .landing-page {
                    position: relative;
                    color: #ffffff;
                    overflow-x: clip;
                }

                .gold-italic {
                    color: #d4af37;
                    font-style: italic;
                }

                .gold-bold {
                    color: #d4af37;
                    font-weight: 700;
                }

                /* Background blobs */

                .background-blobs {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    z-index: 0;
                    pointer-events: none;
                    overflow: hidden;
                }

                .blob {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(212, 175, 55, 0.05);
                    filter: blur(120px);
                    animation: blob-drift 18s ease-in-out infinite;
                }

                .blob-1 { top: -10%; left: -10%; width: 60%; height: 60%; }
                .blob-2 { top: 10%; right: -10%; width: 50%; height: 50%; background: rgba(212, 175, 55, 0.1); animation-delay: 2s; }
                .blob-3 { bottom: -10%; left: 10%; width: 55%; height: 55%; animation-delay: 4s; }
                .blob-4 { top: 40%; left: 30%; width: 40%; height: 40%; animation-delay: 6s; }
                .blob-5 { bottom: 20%; right: 10%; width: 45%; height: 45%; animation-delay: 2s; }

                @keyframes blob-drift {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    33% { transform: translate(3%, -4%) scale(1.05); }
                    66% { transform: translate(-3%, 4%) scale(0.95); }
                }

                .landing-page > header,
                .landing-page > section,
                .landing-page > div.marquee,
                .landing-page > footer {
                    position: relative;
                    z-index: 1;
                }

                /* Hero */

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 8rem 1.5rem 4rem;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    z-index: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.3;
                }

                .hero-gradient {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background: linear-gradient(
                        to bottom,
                        rgba(10, 10, 10, 0.8) 0%,
                        rgba(10, 10, 10, 0.5) 50%,
                        rgba(10, 10, 10, 1) 100%
                    );
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1240px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    width: 100%;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #d4af37;
                }

                .hero-title {
                    font-size: clamp(3rem, 8vw, 5.5rem);
                    line-height: 0.95;
                    letter-spacing: -0.03em;
                    margin-bottom: 2rem;
                }

                .hero-sub {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.6;
                    max-width: 32rem;
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .cta-primary {
                    background: #d4af37;
                    color: #0a0a0a;
                    padding: 1.25rem 2.5rem;
                    border-radius: 999px;
                    font-weight: 700;
                    font-size: 1.1rem;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }

                .cta-primary:hover {
                    transform: scale(1.05);
                }

                .cta-secondary {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                    padding: 1.25rem 2.5rem;
                    border-radius: 999px;
                    font-weight: 700;
                    font-size: 1.1rem;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .cta-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .hero-visual {
                    position: relative;
                }

                .hero-photo {
                    border-radius: 2rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .hero-photo img {
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    display: block;
                }

                .testimonial-card {
                    position: absolute;
                    bottom: -2.5rem;
                    left: -2.5rem;
                    max-width: 280px;
                    background: rgba(22, 22, 22, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    padding: 2rem;
                }

                .star-row {
                    margin-bottom: 1rem;
                }

                .star {
                    color: #d4af37;
                    font-size: 0.9rem;
                }

                .testimonial-quote {
                    font-size: 0.9rem;
                    font-style: italic;
                    margin-bottom: 1rem;
                    color: rgba(255, 255, 255, 0.85);
                }

                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .author-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                }

                .author-name {
                    font-size: 0.75rem;
                    font-weight: 700;
                }

                .author-role {
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    opacity: 0.5;
                }

                /* Marquee */

                .marquee {
                    padding: 3rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.02);
                    overflow: hidden;
                }

                .marquee-track {
                    display: flex;
                    width: max-content;
                    animation: marquee-scroll 60s linear infinite;
                }

                .marquee-group {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    margin: 0 1.5rem;
                }

                .marquee-item {
                    font-size: 1.5rem;
                    font-weight: 700;
                    white-space: nowrap;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    opacity: 0.2;
                }

                @keyframes marquee-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                /* Differentials */

                .differentials {
                    padding: 6rem 1.5rem;
                    max-width: 1240px;
                    margin: 0 auto;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading h2 {
                    font-size: 2.8rem;
                    margin-bottom: 1.5rem;
                }

                .section-heading p {
                    color: rgba(255, 255, 255, 0.5);
                    max-width: 40rem;
                    margin: 0 auto;
                }

                .bento-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .bento-item {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .bento-item:hover {
                    transform: translateY(-10px);
                    border-color: rgba(212, 175, 55, 0.3);
                }

                .bento-icon {
                    width: 3rem;
                    height: 3rem;
                    background: rgba(212, 175, 55, 0.2);
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                    margin-bottom: 1.5rem;
                }

                .bento-item h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }

                .bento-item p {
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.7;
                }

                .bento-wide {
                    grid-column: span 2;
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                    flex-direction: row-reverse;
                }

                .bento-wide-copy {
                    flex: 1;
                }

                .bento-wide-image {
                    width: 45%;
                    height: 12rem;
                    border-radius: 1rem;
                    overflow: hidden;
                }

                .bento-wide-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                /* Franchises */

                .franchises {
                    padding: 6rem 1.5rem;
                    background: rgba(255, 255, 255, 0.01);
                }

                .franchises-header {
                    max-width: 1240px;
                    margin: 0 auto 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }

                .franchises-header h2 {
                    font-size: 2.8rem;
                    margin-bottom: 1rem;
                }

                .franchises-header p {
                    color: rgba(255, 255, 255, 0.5);
                    max-width: 36rem;
                }

                .header-pills {
                    display: flex;
                    gap: 1rem;
                }

                .pill {
                    padding: 0.75rem 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 700;
                    white-space: nowrap;
                }

                .pill.gold {
                    color: #d4af37;
                }

                .franchise-grid {
                    max-width: 1240px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .franchise-card {
                    background: rgba(255, 255, 255, 0.04);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 2rem;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                }

                .card-media {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                    background: #0a0a0a;
                }

                .card-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                    display: block;
                }

                .franchise-card:hover .card-media img {
                    transform: scale(1.1);
                }

                .card-media-overlay {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background: linear-gradient(
                        to top,
                        rgba(10, 10, 10, 0.8) 0%,
                        rgba(10, 10, 10, 0.2) 50%,
                        transparent 100%
                    );
                }

                .card-identity {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 2rem;
                }

                .card-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    background: #d4af37;
                    border-radius: 1rem;
                    font-size: 1.4rem;
                    margin-bottom: 0.5rem;
                    box-shadow: 0 8px 16px rgba(212, 175, 55, 0.2);
                }

                .card-identity h3 {
                    font-size: 1.8rem;
                }

                .card-body {
                    padding: 2rem;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                }

                .card-blurb {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .card-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex: 1;
                }

                .card-features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.8);
                    padding: 0.5rem 0;
                    line-height: 1.5;
                }

                .check-mark {
                    color: #d4af37;
                    flex-shrink: 0;
                    font-weight: 700;
                }

                .card-footer {
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-top: auto;
                }

                .invest-label {
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    opacity: 0.5;
                    margin-bottom: 0.25rem;
                }

                .invest-price {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #d4af37;
                }

                .card-details-button {
                    background: #fff;
                    color: #0a0a0a;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    font-weight: 700;
                    font-size: 0.85rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .card-details-button:hover {
                    background: #d4af37;
                }

                /* Modal */

                .modal-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(10, 10, 10, 0.9);
                    backdrop-filter: blur(10px);
                    animation: overlay-in 0.3s ease;
                }

                .modal-content {
                    position: relative;
                    background: #161616;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 2.5rem;
                    width: 100%;
                    max-width: 42rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 3rem;
                    animation: modal-in 0.3s ease;
                }

                @keyframes overlay-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes modal-in {
                    from { opacity: 0; transform: scale(0.9) translateY(20px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }

                .modal-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 1.8rem;
                    line-height: 1;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .modal-close:hover {
                    color: #fff;
                }

                .modal-header {
                    margin-bottom: 2rem;
                }

                .modal-header h3 {
                    font-size: 2rem;
                    color: #d4af37;
                    margin-bottom: 0.5rem;
                }

                .modal-header-rule {
                    height: 4px;
                    width: 5rem;
                    background: #d4af37;
                    border-radius: 999px;
                }

                .modal-body {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                }

                /* Detail panels inside the modal */

                .detail-body > * + * {
                    margin-top: 1.5rem;
                }

                .detail-highlight {
                    background: rgba(212, 175, 55, 0.1);
                    border: 1px solid rgba(212, 175, 55, 0.2);
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                }

                .detail-highlight h4 {
                    font-size: 1.4rem;
                    color: #d4af37;
                    margin-bottom: 0.5rem;
                }

                .detail-kicker {
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: rgba(212, 175, 55, 0.6);
                    margin-bottom: 1rem;
                }

                .detail-line-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .detail-line {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .detail-lead {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #fff;
                }

                .detail-lead.italic {
                    font-style: italic;
                    font-size: 1.2rem;
                }

                .detail-gold-note {
                    color: #d4af37;
                    font-weight: 700;
                }

                .detail-panels {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .detail-panel {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 1.25rem;
                }

                .detail-panel > p {
                    margin-bottom: 1rem;
                }

                .detail-panel-title {
                    font-weight: 700;
                    color: #d4af37;
                    margin-bottom: 0.5rem;
                }

                .detail-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .detail-list li {
                    font-size: 0.85rem;
                    padding: 0.3rem 0;
                }

                .detail-list.muted li {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.8rem;
                }

                .detail-list-highlight {
                    color: #d4af37;
                    font-weight: 700;
                }

                .detail-checklist {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .detail-checklist li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 0.4rem 0;
                }

                .commission-line {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .commission-line strong {
                    color: #d4af37;
                }

                .commission-line .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    background: #d4af37;
                    border-radius: 50%;
                    flex-shrink: 0;
                }

                .commission-master {
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }

                .detail-protect h5 {
                    text-align: center;
                    font-size: 1.4rem;
                    margin-bottom: 1.5rem;
                }

                .protect-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                    text-align: center;
                }

                .protect-item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .protect-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 50%;
                }

                .protect-label {
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    opacity: 0.6;
                }

                .detail-cta {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    width: 100%;
                    background: #10b981;
                    color: #fff;
                    padding: 1.5rem;
                    border-radius: 999px;
                    font-weight: 700;
                    font-size: 1.2rem;
                    text-decoration: none;
                    box-shadow: 0 10px 25px rgba(16, 185, 129, 0.2);
                    transition: background 0.3s ease;
                }

                .detail-cta:hover {
                    background: #059669;
                }

                /* About */

                .about {
                    padding: 6rem 1.5rem;
                    max-width: 1240px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about-visual {
                    position: relative;
                }

                .about-photo {
                    aspect-ratio: 1 / 1;
                    border-radius: 3rem;
                    overflow: hidden;
                }

                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .about-stat-card {
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    background: rgba(22, 22, 22, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }

                .stat-number {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #d4af37;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-weight: 700;
                }

                .about-copy h2 {
                    font-size: 2.8rem;
                    margin-bottom: 2rem;
                }

                .about-copy > p {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 1.1rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .about-values {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .about-values h4 {
                    color: #d4af37;
                    margin-bottom: 0.5rem;
                }

                .about-values p {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.5);
                    line-height: 1.6;
                }

                /* FAQ */

                .faq-section {
                    padding: 6rem 1.5rem;
                    max-width: 760px;
                    margin: 0 auto;
                }

                .faq-section > h2 {
                    font-size: 2.8rem;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .faq-item {
                    background: rgba(255, 255, 255, 0.04);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(212, 175, 55, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-question:hover {
                    color: #d4af37;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #d4af37;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease, opacity 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    opacity: 1;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: rgba(255, 255, 255, 0.55);
                    font-size: 0.9rem;
                    line-height: 1.7;
                }

                /* Contact */

                .contact {
                    padding: 6rem 1.5rem;
                }

                .contact-panel {
                    position: relative;
                    max-width: 1240px;
                    margin: 0 auto;
                    background: rgba(255, 255, 255, 0.04);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 3rem;
                    padding: 5rem 2rem;
                    text-align: center;
                    overflow: hidden;
                }

                .contact-glow {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(212, 175, 55, 0.1);
                    border-radius: 50%;
                    filter: blur(100px);
                }

                .contact-glow.top { top: 0; right: 0; }
                .contact-glow.bottom { bottom: 0; left: 0; }

                .contact-copy {
                    position: relative;
                    z-index: 1;
                }

                .contact-copy h2 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }

                .contact-copy > p {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 40rem;
                    margin: 0 auto 3rem;
                }

                .contact-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #10b981;
                    color: #fff;
                    padding: 1.5rem 3rem;
                    border-radius: 999px;
                    font-weight: 700;
                    font-size: 1.2rem;
                    text-decoration: none;
                    box-shadow: 0 10px 25px rgba(16, 185, 129, 0.2);
                    transition: background 0.3s ease;
                }

                .contact-cta:hover {
                    background: #059669;
                }

                .contact-note {
                    margin-top: 2rem;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.4);
                }

                /* Footer */

                .footer {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    max-width: 1240px;
                    margin: 0 auto;
                    flex-wrap: wrap;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .footer-badge {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    background: #d4af37;
                    border-radius: 50%;
                    font-size: 0.9rem;
                }

                .footer-name {
                    font-size: 1.2rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                }

                .footer-name .gold {
                    color: #d4af37;
                }

                .footer-copy {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.85rem;
                }

                .footer-links a {
                    color: rgba(255, 255, 255, 0.4);
                    text-decoration: none;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-weight: 500;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover {
                    color: #d4af37;
                }

                /* Floating WhatsApp button */

                .whatsapp-float {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    background: #10b981;
                    border-radius: 50%;
                    font-size: 1.8rem;
                    text-decoration: none;
                    box-shadow: 0 16px 40px rgba(16, 185, 129, 0.4);
                    transition: transform 0.3s ease;
                }

                .whatsapp-float:hover {
                    transform: scale(1.1);
                }

                /* Responsive */

                @media (max-width: 1024px) {
                    .hero-content {
                        grid-template-columns: 1fr;
                    }

                    .hero-visual {
                        display: none;
                    }

                    .franchise-grid {
                        grid-template-columns: 1fr;
                        max-width: 560px;
                    }

                    .about {
                        grid-template-columns: 1fr;
                        gap: 5rem;
                    }

                    .about-stat-card {
                        right: 0;
                    }
                }

                @media (max-width: 768px) {
                    .bento-grid {
                        grid-template-columns: 1fr;
                    }

                    .bento-wide {
                        grid-column: span 1;
                        flex-direction: column;
                    }

                    .bento-wide-image {
                        width: 100%;
                    }

                    .detail-panels {
                        grid-template-columns: 1fr;
                    }

                    .protect-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .modal-content {
                        padding: 2rem 1.5rem;
                        border-radius: 1.5rem;
                    }

                    .franchises-header {
                        flex-direction: column;
                        align-items: flex-start;
                    }

                    .testimonial-card {
                        left: 0;
                    }

                    .contact-panel {
                        padding: 4rem 1.5rem;
                    }

                    .footer {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
