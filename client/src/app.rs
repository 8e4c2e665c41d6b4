//! HTML document shell and server-side rendering entry point.

use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::pages::index::IndexPage;
#[cfg(feature = "ssr")]
use crate::state::pages::PageListState;

/// Stylesheet served by the server's asset route.
pub const STYLESHEET_HREF: &str = "/assets/style.css";

/// Full HTML document around `children`.
#[component]
pub fn Document(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=STYLESHEET_HREF/>
                <title>{title}</title>
            </head>
            <body>
                {children()}
            </body>
        </html>
    }
}

/// Render the index page for `state` as a complete HTML document.
#[cfg(feature = "ssr")]
pub fn render_index_page(state: PageListState) -> String {
    let owner = Owner::new_root(None);
    owner.with(move || {
        let title = state.title.clone();
        view! {
            <Document title=title>
                <IndexPage state=state/>
            </Document>
        }
        .to_html()
    })
}
