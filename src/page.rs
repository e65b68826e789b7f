use dioxus::prelude::*;

use crate::styles::STYLES;

struct Service {
    title: &'static str,
    /// Raw HTML; may hold `<br>` and inline emphasis
    desc: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Desarrollo Web",
        desc: "Sitios r\u{e1}pidos y medibles,<br>hechos a la medida de tu marca.",
    },
    Service {
        title: "Apps M\u{f3}viles",
        desc: "Experiencias nativas para <em>iOS</em> y <em>Android</em> con un solo equipo.",
    },
    Service {
        title: "Producci\u{f3}n 3D",
        desc: "Renders, animaci\u{f3}n y recorridos virtuales<br>para lanzar antes de construir.",
    },
    Service {
        title: "Branding",
        desc: "Identidad visual completa: logotipo, paleta, tipograf\u{ed}a y voz.",
    },
];

const PROJECTS: &[(&str, &str)] = &[
    ("Sideral", "Plataforma de streaming para eventos en vivo."),
    ("Meta Inmobiliaria", "Recorridos 3D para preventa de departamentos."),
    ("Luih", "Tienda en l\u{ed}nea con cat\u{e1}logo configurable."),
    ("Nuevo Siglo", "Redise\u{f1}o de marca y sitio institucional."),
];

const PLANS: &[(&str, &str, &str)] = &[
    ("Inicio", "$9,900", "Landing page, dominio y hosting por un a\u{f1}o."),
    ("Crecimiento", "$24,900", "Sitio de hasta 8 secciones con blog y anal\u{ed}tica."),
    ("A medida", "Cotizar", "App, e-commerce o producci\u{f3}n 3D."),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        style { "{STYLES}" }
        main {
            Hero {}
            Services {}
            section {
                class: "projects",
                h2 { "Proyectos" }
                div {
                    class: "project-grid",
                    for (name, blurb) in PROJECTS {
                        article {
                            class: "project-item",
                            h3 { "{name}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }
            section {
                class: "pricing",
                h2 { "Planes" }
                div {
                    class: "price-grid",
                    for (plan, price, note) in PLANS {
                        div {
                            class: "price-card",
                            h3 { "{plan}" }
                            div { class: "price", "{price}" }
                            p { "{note}" }
                        }
                    }
                }
            }
            a {
                id: "floatWhatsapp",
                class: "float-whatsapp",
                href: "https://wa.me/",
                target: "_blank",
                rel: "noopener",
                "WhatsApp"
            }
        }
    }
}

/// Tall section whose sticky child pins the cube while the page scrolls a
/// full turn's worth.
#[component]
fn Hero() -> Element {
    rsx! {
        section {
            class: "hero-section",
            div {
                class: "sticky-container",
                video { id: "hero-video", class: "bg-video", src: "assets/renderbyte.mp4", muted: true, "loop": "true", "playsinline": "true" }
                video { id: "sideral-video", class: "bg-video", src: "assets/sideral.mp4", muted: true, "loop": "true", "playsinline": "true" }
                video { id: "meta-video", class: "bg-video", src: "assets/meta.mp4", muted: true, "loop": "true", "playsinline": "true" }
                video { id: "luih-video", class: "bg-video", src: "assets/luih.mp4", muted: true, "loop": "true", "playsinline": "true" }

                h1 { "Creamos lo que tu marca imagina" }

                div {
                    class: "cube-scene",
                    div {
                        id: "heroCube",
                        class: "cube",
                        div {
                            class: "cube-face front",
                            img { class: "cube-logo", src: "assets/logo_final.jpg", alt: "RenderByte" }
                        }
                        div { class: "cube-face left", "Sideral" }
                        div { class: "cube-face back", "Meta" }
                        div { class: "cube-face right", "Luih" }
                        div { class: "cube-face top", "Nuevo Siglo" }
                    }
                }
            }
        }
    }
}

/// Word-split targets go through `dangerous_inner_html` so the renderer never
/// diffs the spans the splitter puts there.
#[component]
fn Services() -> Element {
    rsx! {
        section {
            id: "servicios",
            class: "services-section",
            div {
                class: "services-sticky",
                div {
                    class: "horizontal-track",
                    for service in SERVICES {
                        div {
                            class: "service-item",
                            h3 { class: "service-title", dangerous_inner_html: service.title }
                            div {
                                class: "service-desc",
                                p { dangerous_inner_html: service.desc }
                            }
                        }
                    }
                }
            }
        }
    }
}
