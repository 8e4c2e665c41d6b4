//! Clickable card for a single page entry.
//!
//! DESIGN
//! ======
//! The card is the only element that links to a page document. Grid and list
//! layouts wrap it differently; the list layout asks for the compact form and
//! shows the image as a hover preview instead.

use leptos::prelude::*;

use crate::state::pages::Page;

/// A page rendered as a link to `/p/{id}/index.html`.
#[component]
pub fn ListItemCard(page: Page, #[prop(optional)] compact: bool) -> impl IntoView {
    let href = page.href();
    let Page { title, image, .. } = page;
    let class = if compact { "page-card page-card--compact" } else { "page-card" };
    let image = if compact { None } else { image };
    let alt = title.clone();

    view! {
        <a class=class href=href>
            {image.map(|src| view! { <img class="page-card__image" src=src alt=alt/> })}
            <span class="page-card__title">{title}</span>
        </a>
    }
}
