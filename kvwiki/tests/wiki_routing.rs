// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};

async fn expect_404_without_backend_call(uri: &str) {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri {}", uri);
    assert_eq!(harness.store.op_count(), 0, "backend touched for {}", uri);
}

#[actix_web::test]
async fn unsupported_operation_is_404() {
    expect_404_without_backend_call("/delete/TestPage").await;
}

#[actix_web::test]
async fn missing_title_is_404() {
    expect_404_without_backend_call("/view").await;
    expect_404_without_backend_call("/view/").await;
    expect_404_without_backend_call("/edit/").await;
}

#[actix_web::test]
async fn extra_segments_are_404() {
    expect_404_without_backend_call("/view/Foo/Bar").await;
    expect_404_without_backend_call("/view/Foo/").await;
}

#[actix_web::test]
async fn punctuated_titles_are_404() {
    expect_404_without_backend_call("/view/Foo_Bar").await;
    expect_404_without_backend_call("/view/Foo.Bar").await;
    expect_404_without_backend_call("/view/..").await;
}

#[actix_web::test]
async fn get_on_save_path_is_404() {
    expect_404_without_backend_call("/save/TestPage").await;
}

#[actix_web::test]
async fn post_on_view_path_is_404() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::post()
        .uri("/view/TestPage")
        .set_form([("body", "hello")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.store.op_count(), 0);
}

#[actix_web::test]
async fn bodyless_post_to_unknown_path_is_404() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::post().uri("/delete/TestPage").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.store.op_count(), 0);
}

#[actix_web::test]
async fn unknown_method_falls_through_to_404() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::put().uri("/view/TestPage").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.store.op_count(), 0);
}
