// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::backend::{PageStore, StoreError};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// A single wiki page. The title doubles as the backend key and never
/// changes once the value is constructed; the body is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: &str, body: Vec<u8>) -> Self {
        Self {
            title: title.to_string(),
            body,
        }
    }

    /// An in-memory page that has not been saved yet, as shown by the edit
    /// form for a title with no stored value.
    pub fn transient(title: &str) -> Self {
        Self::new(title, Vec::new())
    }
}

#[derive(Debug)]
pub enum RepositoryError {
    NotFound,
    BackendUnavailable(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound => write!(f, "page not found"),
            RepositoryError::BackendUnavailable(msg) => {
                write!(f, "page backend unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing => RepositoryError::NotFound,
            StoreError::Unavailable(msg) => RepositoryError::BackendUnavailable(msg),
        }
    }
}

/// Load/save access to pages over an injected key-value store.
#[derive(Clone)]
pub struct PageRepository {
    store: Arc<dyn PageStore>,
}

impl PageRepository {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self { store }
    }

    /// Fetch the page stored under `title`. `NotFound` is the expected
    /// outcome for a page that does not exist yet.
    pub async fn load(&self, title: &str) -> Result<Page, RepositoryError> {
        match self.store.get(title).await {
            Ok(body) => Ok(Page::new(title, body)),
            Err(StoreError::Missing) => {
                debug!("no stored page for title '{}'", title);
                Err(RepositoryError::NotFound)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write the page body under its title, overwriting any previous value.
    /// Last writer wins; there is no version check.
    pub async fn save(&self, page: &Page) -> Result<(), RepositoryError> {
        self.store.set(&page.title, &page.body).await?;
        Ok(())
    }

    /// All titles currently in the store, in whatever order the backend
    /// enumerates them.
    pub async fn list_titles(&self) -> Result<Vec<String>, RepositoryError> {
        let titles = self.store.keys("*").await?;
        Ok(titles)
    }
}
