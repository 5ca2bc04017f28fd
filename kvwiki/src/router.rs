// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// The page operations the wiki supports. Anything a request path names
/// outside this set is a plain 404, never a partial match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    View,
    Edit,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub action: PageAction,
    pub title: String,
}

/// Decompose a tail-matched request path (no leading slash) into an
/// operation and a title. The accepted shape is exactly
/// `<view|edit|save>/<title>` with an ASCII-alphanumeric title; everything
/// else is rejected. Titles become backend keys, so the whitelist is what
/// keeps control characters, path traversal, and protocol-breaking bytes
/// out of the store.
pub fn parse_page_path(path: &str) -> Option<PageRoute> {
    let (operation, title) = path.split_once('/')?;
    let action = match operation {
        "view" => PageAction::View,
        "edit" => PageAction::Edit,
        "save" => PageAction::Save,
        _ => return None,
    };
    if !is_valid_title(title) {
        return None;
    }
    Some(PageRoute {
        action,
        title: title.to_string(),
    })
}

/// A title is one or more ASCII alphanumerics, nothing else. A trailing
/// slash or extra segment fails here because '/' is not alphanumeric.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty() && title.bytes().all(|byte| byte.is_ascii_alphanumeric())
}
