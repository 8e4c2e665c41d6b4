//! Index page listing the documents available to the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The server resolves the session and the page
//! collection, then hands a complete `PageListState` to `IndexPage`. Signed-out
//! visitors only see a call-to-action towards the login boundary.

#[cfg(all(test, feature = "ssr"))]
#[path = "index_test.rs"]
mod index_test;

use leptos::prelude::*;

use crate::components::list_item_card::ListItemCard;
use crate::state::pages::{LOGIN_PATH, LOGOUT_PATH, Page, PageListContent, PageListState, Session, ViewMode};

/// Page-list view: navbar, then prompt, notice, or page collection.
#[component]
pub fn IndexPage(state: PageListState) -> impl IntoView {
    let title = state.title.clone();
    let toggle_href = state.toggle_href();

    let account_link = if state.is_signed_in() {
        view! { <a class="navbar__link" href=LOGOUT_PATH>"Logout"</a> }.into_any()
    } else {
        view! { <a class="navbar__link" href=LOGIN_PATH>"Login"</a> }.into_any()
    };

    let body = match state.into_content() {
        PageListContent::SignInPrompt => view! {
            <a class="btn btn--primary page-list__cta" href=LOGIN_PATH>
                "Login to view documents..."
            </a>
        }
        .into_any(),
        PageListContent::NoPages { session } => view! {
            <div class="alert alert--warning" role="status">"No pages to display"</div>
            <SignedInAs session=session/>
        }
        .into_any(),
        PageListContent::Pages { session, view_mode, pages } => view! {
            <ViewToggle view_mode=view_mode href=toggle_href/>
            <PageCollection view_mode=view_mode pages=pages/>
            <SignedInAs session=session/>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">{title}</a>
            <span class="navbar__spacer"></span>
            {account_link}
        </nav>
        <main class="container">
            {body}
        </main>
    }
}

/// Link switching between grid and list.
#[component]
fn ViewToggle(view_mode: ViewMode, href: String) -> impl IntoView {
    let label = match view_mode {
        ViewMode::Grid => "Show as list",
        ViewMode::List => "Show as grid",
    };

    view! {
        <div class="view-toggle">
            <a class="btn view-toggle__link" href=href>{label}</a>
        </div>
    }
}

/// The page collection laid out for the current view mode.
#[component]
fn PageCollection(view_mode: ViewMode, pages: Vec<Page>) -> impl IntoView {
    match view_mode {
        ViewMode::Grid => view! {
            <div class="page-grid">
                {pages
                    .into_iter()
                    .map(|page| view! { <ListItemCard page=page/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        ViewMode::List => view! {
            <ul class="page-list">
                {pages
                    .into_iter()
                    .map(|page| {
                        let preview = page.image.clone();
                        view! {
                            <li class="page-list__row">
                                <ListItemCard page=page compact=true/>
                                {preview
                                    .map(|src| view! { <img class="page-list__preview" src=src alt=""/> })}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
fn SignedInAs(session: Session) -> impl IntoView {
    let message = format!("You are signed in as {}.", session.email);
    view! { <p class="page-list__session">{message}</p> }
}
