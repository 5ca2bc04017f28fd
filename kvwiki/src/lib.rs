// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod app_state;
pub mod backend;
pub mod config;
pub mod pages;
pub mod public;
pub mod router;
pub mod templates;
