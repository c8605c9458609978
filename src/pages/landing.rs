use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::smooth_scroll_to;
use crate::effects;

struct Card {
    title: &'static str,
    blurb: &'static str,
}

const ABOUT_CARDS: [Card; 4] = [
    Card {
        title: "Web Development",
        blurb: "Fast, resilient sites built on modern tooling and a healthy distrust of bloat.",
    },
    Card {
        title: "Interface Design",
        blurb: "Layouts and motion that guide the eye without getting in the way.",
    },
    Card {
        title: "Performance",
        blurb: "Profiling, trimming and caching until pages feel instant on mid-range phones.",
    },
    Card {
        title: "Open Source",
        blurb: "Maintainer and contributor across a handful of tools I use every day.",
    },
];

const TEAM: [(&str, &str); 3] = [
    ("Maya Lindqvist", "Creative Director"),
    ("Tomas Reyes", "Lead Engineer"),
    ("Ada Okonkwo", "Product Designer"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Wire the DOM-level effects once the sections exist, and fade the page
    // in now that the document is parsed.
    use_effect_with_deps(
        move |_| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let _ = body.style().set_property("opacity", "1");
            }

            let cleanups = vec![
                effects::scroll::install(),
                effects::reveal::install(),
                effects::glow::install(),
            ];
            move || {
                for cleanup in cleanups {
                    cleanup();
                }
            }
        },
        (),
    );

    let on_cta_click = Callback::from(move |_: MouseEvent| {
        smooth_scroll_to("about");
    });

    html! {
        <main class="landing">
            <section id="home" class="page hero">
                <div class="waves">
                    <div class="wave wave-back"></div>
                    <div class="wave wave-mid"></div>
                    <div class="wave wave-front"></div>
                </div>
                <div class="hero-content">
                    <h1>{"Hi, I'm a maker of quiet, fast things."}</h1>
                    <p class="hero-subtitle">
                        {"Design and engineering for the web, with a bias for pages that load before you blink."}
                    </p>
                    <button class="cta-button" onclick={on_cta_click}>
                        {"Explore My Work"}
                    </button>
                </div>
            </section>

            <section id="about" class="page about">
                <h2>{"What I Do"}</h2>
                <div class="about-grid">
                    {
                        for ABOUT_CARDS.iter().map(|card| html! {
                            <div class="about-card">
                                <h3>{ card.title }</h3>
                                <p>{ card.blurb }</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="team" class="page team">
                <h2>{"The Team"}</h2>
                <div class="team-grid">
                    {
                        for TEAM.iter().map(|(name, role)| html! {
                            <div class="team-member">
                                <div class="member-avatar">{ name.chars().next().map(|c| c.to_string()).unwrap_or_default() }</div>
                                <h3>{ *name }</h3>
                                <p>{ *role }</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="contact" class="page contact">
                <h2>{"Get In Touch"}</h2>
                <ContactForm />
            </section>

            <style>
                {r#"
                    body {
                        margin: 0;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                        background: #0b1020;
                        color: #e8ecf8;
                        font-family: system-ui, -apple-system, sans-serif;
                    }

                    .loading-container {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        background: #0b1020;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        transition: opacity 0.4s ease, visibility 0.4s ease;
                    }

                    .loading-container.loaded {
                        opacity: 0;
                        visibility: hidden;
                        pointer-events: none;
                    }

                    .loading-bar {
                        height: 4px;
                        background: linear-gradient(90deg, #00d4ff, #4169e1);
                        transition: width 0.2s ease;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                        background: rgba(11, 16, 32, 0.85);
                        backdrop-filter: blur(8px);
                        z-index: 50;
                    }

                    .nav-logo {
                        font-weight: 700;
                        letter-spacing: 0.08em;
                        color: #00d4ff;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #e8ecf8;
                        text-decoration: none;
                        padding-bottom: 0.2rem;
                        border-bottom: 2px solid transparent;
                        transition: color 0.3s ease, border-color 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #00d4ff;
                    }

                    .nav-link.active {
                        color: #00d4ff;
                        border-bottom-color: #00d4ff;
                    }

                    .hamburger {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.4rem;
                    }

                    .hamburger span {
                        width: 24px;
                        height: 2px;
                        background: #e8ecf8;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }

                    .hamburger.active span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }

                    .hamburger.active span:nth-child(2) {
                        opacity: 0;
                    }

                    .hamburger.active span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }

                    @media (max-width: 768px) {
                        .hamburger {
                            display: flex;
                        }

                        .nav-links {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: center;
                            gap: 1rem;
                            padding: 1.5rem 0;
                            background: rgba(11, 16, 32, 0.97);
                            transform: translateY(-150%);
                            transition: transform 0.3s ease;
                        }

                        .nav-links.active {
                            transform: translateY(0);
                        }
                    }

                    .page {
                        min-height: 100vh;
                        padding: 6rem 2rem 4rem;
                        box-sizing: border-box;
                        background-image: radial-gradient(
                            circle at 20% 30%,
                            rgba(30, 144, 255, 0.12),
                            transparent 45%
                        );
                        background-repeat: no-repeat;
                        background-size: 140% 140%;
                    }

                    .hero {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 2;
                        max-width: 720px;
                    }

                    .hero h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                        background: linear-gradient(45deg, #fff, #00d4ff);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .hero-subtitle {
                        color: #9aa5c4;
                        font-size: 1.2rem;
                        margin-bottom: 2.5rem;
                    }

                    .waves {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        pointer-events: none;
                    }

                    .wave {
                        position: absolute;
                        left: -10%;
                        right: -10%;
                        height: 40vh;
                        border-radius: 45%;
                        will-change: transform;
                    }

                    .wave-back {
                        bottom: -28vh;
                        background: rgba(30, 144, 255, 0.10);
                    }

                    .wave-mid {
                        bottom: -32vh;
                        background: rgba(0, 212, 255, 0.12);
                    }

                    .wave-front {
                        bottom: -36vh;
                        background: rgba(65, 105, 225, 0.16);
                    }

                    .page h2 {
                        font-size: 2.2rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .about-grid,
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .about-card,
                    .team-member {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                    }

                    .about-card h3,
                    .team-member h3 {
                        color: #00d4ff;
                        margin-top: 0;
                    }

                    .about-card p,
                    .team-member p {
                        color: #9aa5c4;
                        line-height: 1.6;
                    }

                    .team-member {
                        text-align: center;
                    }

                    .member-avatar {
                        width: 72px;
                        height: 72px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.8rem;
                        font-weight: 700;
                        background: linear-gradient(45deg, #1e90ff, #00d4ff);
                        color: #0b1020;
                    }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 520px;
                        margin: 0 auto;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        border-radius: 8px;
                        padding: 0.9rem 1rem;
                        color: #e8ecf8;
                        font-size: 1rem;
                        font-family: inherit;
                    }

                    .contact-form textarea {
                        min-height: 140px;
                        resize: vertical;
                    }

                    .cta-button,
                    .submit-button {
                        background: linear-gradient(45deg, #1e90ff, #00d4ff);
                        color: #0b1020;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 2rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                "#}
            </style>
        </main>
    }
}
