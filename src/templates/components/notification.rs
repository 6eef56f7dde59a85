use crate::map::{Notification, NotificationLevel};
use maud::{html, Markup};

pub fn notification(note: &Notification) -> Markup {
    let class = match note.level {
        NotificationLevel::Warning => "notification notification-warning",
        NotificationLevel::Error => "notification notification-error",
    };

    html! {
        div class=(class) role="alert" {
            p { (note.message) }
        }
    }
}
