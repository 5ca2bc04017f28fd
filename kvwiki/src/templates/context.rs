// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Value, context};

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
    detail: Option<String>,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            detail: None,
        }
    }

    /// Attach the underlying failure text, shown on 500 pages so a backend
    /// outage is not reported as a blank error.
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            detail => &self.detail
        }
    }
}
