// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Environment, Value, default_auto_escape_callback};

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

/// Template loader for minijinja that loads from embedded sources
fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        // Page templates
        "view.html" => Some(include_str!("../public/templates/view.html")),
        "edit.html" => Some(include_str!("../public/templates/edit.html")),
        "list.html" => Some(include_str!("../public/templates/list.html")),

        // Error pages
        "error_404.html" => Some(include_str!("../public/templates/error_404.html")),
        "error_500.html" => Some(include_str!("../public/templates/error_500.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn renders_embedded_view_template() {
        let engine = MiniJinjaEngine::new();
        let html = engine
            .render("view.html", context! { title => "Home", body => "hello" })
            .expect("render view");
        assert!(html.contains("Home"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn escapes_html_in_page_bodies() {
        let engine = MiniJinjaEngine::new();
        let html = engine
            .render(
                "view.html",
                context! { title => "Home", body => "<script>alert(1)</script>" },
            )
            .expect("render view");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let engine = MiniJinjaEngine::new();
        assert!(engine.render("missing.html", context! {}).is_err());
    }
}
