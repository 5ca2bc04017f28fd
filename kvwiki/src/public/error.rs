// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::templates::{ErrorPageContext, TemplateEngine, render_minijinja_template};
use actix_web::{HttpResponse, Result};

#[derive(Clone)]
pub struct ErrorRenderer {
    app_name: String,
}

impl ErrorRenderer {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

pub fn serve_404(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    let app_name = renderer.app_name();
    let context = ErrorPageContext::new(app_name).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "error_404.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render 404 error template: {}", e);
                fallback_404_html(app_name)
            }
        },
        None => fallback_404_html(app_name),
    };

    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(html))
}

pub fn serve_500(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    serve_500_inner(renderer, template_engine, None)
}

/// 500 carrying the underlying failure text, used when the page backend
/// reports an error the caller should see.
pub fn serve_500_with_detail(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
    detail: &str,
) -> Result<HttpResponse> {
    serve_500_inner(renderer, template_engine, Some(detail))
}

fn serve_500_inner(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
    detail: Option<&str>,
) -> Result<HttpResponse> {
    let app_name = renderer.app_name();
    let mut context = ErrorPageContext::new(app_name);
    if let Some(detail) = detail {
        context = context.with_detail(detail);
    }

    let html = match template_engine {
        Some(engine) => {
            match render_minijinja_template(engine, "error_500.html", context.to_value()) {
                Ok(html) => html,
                Err(e) => {
                    log::error!("Failed to render 500 error template: {}", e);
                    fallback_500_html(app_name, detail)
                }
            }
        }
        None => fallback_500_html(app_name, detail),
    };

    Ok(HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(html))
}

fn fallback_404_html(app_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>404 - Page Not Found | {}</title></head>
<body><h1>404 - Page Not Found</h1></body></html>"#,
        app_name
    )
}

fn fallback_500_html(app_name: &str, detail: Option<&str>) -> String {
    // The detail is backend error text; escape it by hand since the
    // fallback path exists exactly because the template engine is down.
    let detail_line = match detail {
        Some(detail) => format!("<p>{}</p>", escape_html(detail)),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html><head><title>500 - Internal Server Error | {}</title></head>
<body><h1>500 - Internal Server Error</h1>{}</body></html>"#,
        app_name, detail_line
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b a="1">&'"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#x27;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[actix_web::test]
    async fn fallback_500_escapes_backend_detail() {
        let renderer = ErrorRenderer::new("KvWiki Test".to_string());
        let resp = serve_500_with_detail(&renderer, None, "<script>alert(1)</script>")
            .expect("500 response");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.expect("body bytes");
        let html = std::str::from_utf8(&body).expect("utf8 body");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[actix_web::test]
    async fn fallback_500_without_detail_has_no_detail_line() {
        let renderer = ErrorRenderer::new("KvWiki Test".to_string());
        let resp = serve_500(&renderer, None).expect("500 response");

        let body = to_bytes(resp.into_body()).await.expect("body bytes");
        let html = std::str::from_utf8(&body).expect("utf8 body");
        assert!(!html.contains("<p>"));
    }
}
