use maud::{html, Markup};

pub mod error;
pub mod map_script;
pub mod notification;
pub mod popup;
pub mod search_control;

pub use error::html_error_response;
pub use map_script::map_script;
pub use notification::notification;
pub use popup::{property_popup, search_popup};
pub use search_control::search_control;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
