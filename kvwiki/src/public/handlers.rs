// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::context::{IndexContext, PageContext};
use super::error;
use crate::app_state::AppState;
use crate::pages::{Page, PageRepository, RepositoryError};
use crate::router::{PageAction, parse_page_path};
use crate::templates::render_minijinja_template;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    // An empty textarea and an absent field both store an empty body.
    #[serde(default)]
    pub body: String,
}

/// GET `/` - list every title currently in the store.
pub async fn index(
    repository: web::Data<PageRepository>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match repository.list_titles().await {
        Ok(pages) => render_page(&app_state, "list.html", IndexContext::new(pages).to_value()),
        Err(err) => backend_failure(&app_state, "list", &err),
    }
}

/// GET catch-all: dispatches view and edit. Save is form-submission only,
/// so a GET on a save path is a 404 like any other unroutable request.
pub async fn page_get(
    req: HttpRequest,
    repository: web::Data<PageRepository>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let raw_path = req.match_info().get("path").unwrap_or("");
    let route = match parse_page_path(raw_path) {
        Some(route) => route,
        None => {
            debug!("rejected path '{}'", raw_path);
            return error::serve_404(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    match route.action {
        PageAction::View => view(&route.title, &repository, &app_state).await,
        PageAction::Edit => edit(&route.title, &repository, &app_state).await,
        PageAction::Save => error::serve_404(
            &app_state.error_renderer,
            Some(app_state.templates.as_ref()),
        ),
    }
}

/// POST catch-all: only `save/<title>` accepts form submissions. The form
/// is optional so that a bodyless POST to an unroutable path still gets the
/// generic 404 instead of an extractor error.
pub async fn page_post(
    req: HttpRequest,
    form: Option<web::Form<SaveForm>>,
    repository: web::Data<PageRepository>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let raw_path = req.match_info().get("path").unwrap_or("");
    match parse_page_path(raw_path) {
        Some(route) if route.action == PageAction::Save => {
            let form = form.map(web::Form::into_inner).unwrap_or(SaveForm {
                body: String::new(),
            });
            save(&route.title, form, &repository, &app_state).await
        }
        _ => {
            debug!("rejected POST path '{}'", raw_path);
            error::serve_404(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

/// Shared 404 for unroutable paths and unsupported methods.
pub async fn not_found(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    error::serve_404(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
    )
}

async fn view(
    title: &str,
    repository: &PageRepository,
    app_state: &AppState,
) -> Result<HttpResponse> {
    match repository.load(title).await {
        Ok(page) => render_page(app_state, "view.html", PageContext::new(&page).to_value()),
        Err(RepositoryError::NotFound) => Ok(HttpResponse::Found()
            .insert_header(("Location", format!("/edit/{}", title)))
            .finish()),
        Err(err) => backend_failure(app_state, "view", &err),
    }
}

async fn edit(
    title: &str,
    repository: &PageRepository,
    app_state: &AppState,
) -> Result<HttpResponse> {
    let page = match repository.load(title).await {
        Ok(page) => page,
        // Not an error: an absent page is edited as a fresh empty one.
        Err(RepositoryError::NotFound) => Page::transient(title),
        Err(err) => return backend_failure(app_state, "edit", &err),
    };
    render_page(app_state, "edit.html", PageContext::new(&page).to_value())
}

async fn save(
    title: &str,
    form: SaveForm,
    repository: &PageRepository,
    app_state: &AppState,
) -> Result<HttpResponse> {
    let page = Page::new(title, form.body.into_bytes());
    match repository.save(&page).await {
        Ok(()) => Ok(HttpResponse::Found()
            .insert_header(("Location", format!("/view/{}", title)))
            .finish()),
        Err(err) => backend_failure(app_state, "save", &err),
    }
}

fn render_page(
    app_state: &AppState,
    template_name: &str,
    context: minijinja::Value,
) -> Result<HttpResponse> {
    match render_minijinja_template(app_state.templates.as_ref(), template_name, context) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) => {
            log::error!("Failed to render template '{}': {}", template_name, e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

fn backend_failure(
    app_state: &AppState,
    operation: &str,
    err: &RepositoryError,
) -> Result<HttpResponse> {
    log::error!("{} failed: {}", operation, err);
    error::serve_500_with_detail(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
        &err.to_string(),
    )
}
