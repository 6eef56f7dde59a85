use maud::{html, Markup, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12/dist/htmx.min.js";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Nepal Property Map" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href=(LEAFLET_CSS);
                link rel="stylesheet" href="/static/main.css";
                script src=(LEAFLET_JS) defer {};
                script src=(HTMX_JS) defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Nepal Property Map" }
                    nav {
                        ul {
                            li { a href="/map" { "Map" } }
                        }
                    }
                }
                main { (content) }
            }
        }
    }
}
