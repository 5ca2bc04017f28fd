// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use kvwiki::app_state::AppState;
use kvwiki::backend::MemoryStore;
use kvwiki::pages::{Page, PageRepository};
use kvwiki::public;
use std::sync::Arc;

pub struct TestHarness {
    pub store: Arc<MemoryStore>,
    pub repository: PageRepository,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let repository = PageRepository::new(store.clone());
        let app_state = Arc::new(AppState::new("KvWiki Test"));
        Self {
            store,
            repository,
            app_state,
        }
    }

    pub async fn seed_page(&self, title: &str, body: &[u8]) {
        self.repository
            .save(&Page::new(title, body.to_vec()))
            .await
            .expect("seed page");
    }
}

pub fn build_test_app(
    harness: &TestHarness,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(harness.repository.clone()))
        .app_data(web::Data::from(harness.app_state.clone()))
        .configure(public::configure)
        .default_service(web::route().to(public::handlers::not_found))
}
