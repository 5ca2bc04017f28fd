// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::pages::Page;
use minijinja::{Value, context};

/// Render context for the view and edit templates. The stored body is a
/// byte sequence; templates are a text surface, so it is decoded lossily.
#[derive(Debug, Clone)]
pub struct PageContext {
    title: String,
    body: String,
}

impl PageContext {
    pub fn new(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            body: String::from_utf8_lossy(&page.body).into_owned(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            title => &self.title,
            body => &self.body
        }
    }
}

/// Render context for the index listing.
#[derive(Debug, Clone)]
pub struct IndexContext {
    pages: Vec<String>,
}

impl IndexContext {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn to_value(&self) -> Value {
        context! {
            pages => &self.pages
        }
    }
}
