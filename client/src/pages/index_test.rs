use crate::app::render_index_page;
use crate::state::pages::{Page, PageListState, Session, ViewMode};

fn pages() -> Vec<Page> {
    vec![
        Page::new("page1", "Page 1").with_image("/p/page1/preview.png"),
        Page::new("page2", "Page 2"),
    ]
}

fn signed_in(title: &str) -> PageListState {
    PageListState::new(title).with_session(Some(Session::new("user@example.com")))
}

fn page_links(html: &str) -> usize {
    html.matches("href=\"/p/").count()
}

#[test]
fn signed_out_renders_single_call_to_action() {
    let html = render_index_page(PageListState::new("Docs").with_pages(pages()));

    assert_eq!(html.matches("page-list__cta").count(), 1);
    assert!(html.contains("Login to view documents..."));
    assert_eq!(page_links(&html), 0);
    assert!(!html.contains("No pages to display"));
}

#[test]
fn signed_in_without_pages_renders_notice() {
    let html = render_index_page(signed_in("Docs"));

    assert!(html.contains("No pages to display"));
    assert!(html.contains("You are signed in as user@example.com."));
    assert_eq!(page_links(&html), 0);
    assert!(!html.contains("page-list__cta"));
}

#[test]
fn grid_renders_one_card_per_page() {
    let html = render_index_page(signed_in("Docs").with_pages(pages()));

    assert_eq!(page_links(&html), 2);
    assert!(html.contains("href=\"/p/page1/index.html\""));
    assert!(html.contains("href=\"/p/page2/index.html\""));
    assert!(html.contains("page-grid"));
    assert!(html.contains("page-card__image"));
    assert!(html.contains("href=\"/?view=list\""));
}

#[test]
fn list_renders_rows_with_hover_preview() {
    let html = render_index_page(signed_in("Docs").with_pages(pages()).with_view_mode(ViewMode::List));

    assert_eq!(page_links(&html), 2);
    assert_eq!(html.matches("page-list__row").count(), 2);
    assert_eq!(html.matches("page-list__preview").count(), 1);
    assert!(!html.contains("page-grid"));
    assert!(html.contains("href=\"/?view=grid\""));
}

#[test]
fn navbar_link_follows_session() {
    let signed_out = render_index_page(PageListState::new("Docs"));
    assert!(signed_out.contains("href=\"/login\""));
    assert!(!signed_out.contains("href=\"/logout\""));

    let signed_in = render_index_page(signed_in("Docs"));
    assert!(signed_in.contains("href=\"/logout\""));
}

#[test]
fn title_is_escaped() {
    let html = render_index_page(PageListState::new("<script>Docs</script>"));
    assert!(!html.contains("<script>Docs"));
    assert!(html.contains("&lt;script&gt;Docs"));
}

#[test]
fn view_ends_with_main_content() {
    for state in [PageListState::new("Docs"), signed_in("Docs"), signed_in("Docs").with_pages(pages())] {
        let html = render_index_page(state);
        assert!(!html.contains("<footer"));
        assert_eq!(html.matches("<main").count(), 1);
    }
}
