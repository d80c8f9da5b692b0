//! Shared fixtures: Scholar-shaped listing HTML and mock server wiring.
#![allow(dead_code)]

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_profile_export::config::Config;

/// One `tr.gsc_a_tr` row. `None` leaves the element out entirely.
pub fn row_html(title: &str, authors: &str, venue: Option<&str>, year: Option<&str>) -> String {
    let venue = venue.map(|v| format!(r#"<div class="gs_gray">{v}</div>"#)).unwrap_or_default();
    let year = year
        .map(|y| format!(r#"<span class="gsc_a_h gsc_a_hc gs_ibl">{y}</span>"#))
        .unwrap_or_default();
    format!(
        r#"<tr class="gsc_a_tr"><td class="gsc_a_t"><a href="/citations?view_op=view_citation" class="gsc_a_at">{title}</a><div class="gs_gray">{authors}</div>{venue}</td><td class="gsc_a_c"><a class="gsc_a_ac gs_ibl">7</a></td><td class="gsc_a_y">{year}</td></tr>"#
    )
}

/// A well-formed row; year and venue derived from `n`.
pub fn good_row(title: &str, n: usize) -> String {
    row_html(
        title,
        "A Author, B Author",
        Some(&format!("Journal of Things {n} ({n}), 1-10")),
        Some(&format!("{}", 2000 + n)),
    )
}

/// A full profile page around the given rows.
pub fn page_html(rows: &[String]) -> String {
    format!(
        r#"<!doctype html><html><head><title>Profile</title></head><body><div id="gsc_a_tw"><table id="gsc_a_t"><thead><tr><th>Title</th><th>Cited by</th><th>Year</th></tr></thead><tbody id="gsc_a_b">{}</tbody></table></div></body></html>"#,
        rows.concat()
    )
}

/// Serve `html` for the page at `cstart`.
pub async fn mount_page(server: &MockServer, cstart: usize, html: String) {
    Mock::given(method("GET"))
        .and(path("/citations"))
        .and(query_param("user", "test"))
        .and(query_param("cstart", cstart.to_string()))
        .and(query_param("pagesize", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(html),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Fail the test if the page at `cstart` is ever requested.
pub async fn forbid_page(server: &MockServer, cstart: usize) {
    Mock::given(method("GET"))
        .and(path("/citations"))
        .and(query_param("cstart", cstart.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_html(&[])))
        .expect(0)
        .mount(server)
        .await;
}

/// Config pointed at the mock server.
pub fn test_config(server: &MockServer) -> Config {
    Config::for_testing(&server.uri())
}
