// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;
use std::sync::Arc;

mod app_state;
mod backend;
mod config;
mod pages;
mod public;
mod router;
mod templates;

use app_state::AppState;
use backend::RedisStore;
use config::WikiConfig;
use pages::PageRepository;

const APP_NAME: &str = "KvWiki";

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let config = match WikiConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Usage: kvwiki [backend-host] [--listen <addr>] [--backend-port <port>]");
            return 1;
        }
    };

    init_logging();

    match System::new().block_on(run_server(config)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

fn init_logging() {
    // Configure logging with a stable format
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

async fn run_server(config: WikiConfig) -> std::io::Result<()> {
    info!("Starting {} against backend {}", APP_NAME, config.backend.url());

    let store = match RedisStore::connect(&config.backend.url()).await {
        Ok(store) => Arc::new(store),
        Err(error) => {
            eprintln!("❌ Failed to connect to page backend: {}", error);
            return Err(std::io::Error::other(error.to_string()));
        }
    };
    info!("✅ Page backend connected");

    let repository = PageRepository::new(store);
    let app_state = Arc::new(AppState::new(APP_NAME));
    info!("✅ App state initialized with app name: {}", APP_NAME);

    let listen = config.listen;
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repository.clone()))
            .app_data(web::Data::from(app_state.clone()))
            .wrap(Logger::default())
            .configure(public::configure)
            .default_service(web::route().to(public::handlers::not_found))
    })
    .bind(listen)?;

    info!("✅ Listening on http://{}", listen);
    server.run().await
}
