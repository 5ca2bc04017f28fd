// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

mod context;
pub mod error;
pub mod handlers;

pub use context::{IndexContext, PageContext};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Unsupported methods share the generic 404 with unroutable paths.
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::index))
            .default_service(web::to(handlers::not_found)),
    )
    .service(
        web::resource("/{path:.*}")
            .route(web::get().to(handlers::page_get))
            .route(web::post().to(handlers::page_post))
            .default_service(web::to(handlers::not_found)),
    );
}
