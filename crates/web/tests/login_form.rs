#![cfg(target_arch = "wasm32")]

mod common;

use leptos::mount::mount_to;
use leptos::prelude::*;
use stock_tracker_web::components::LoginForm;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

use common::{click_login, container, count, find, icon_name, settle, type_into};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn initial_render_shows_locked_icon() {
    let root = container();
    let _handle = mount_to(root.clone(), || view! { <LoginForm /> });
    settle().await;

    assert_eq!(icon_name(&root), "locked");
    assert_eq!(
        find(&root, ".lock-icon").get_attribute("aria-label").as_deref(),
        Some("Locked")
    );
}

#[wasm_bindgen_test]
async fn click_parity_decides_icon() {
    let root = container();
    let _handle = mount_to(root.clone(), || view! { <LoginForm /> });
    settle().await;

    for clicks in 1..=4 {
        click_login(&root);
        settle().await;
        let expected = if clicks % 2 == 0 { "locked" } else { "unlocked" };
        assert_eq!(icon_name(&root), expected, "after {clicks} clicks");
    }
}

#[wasm_bindgen_test]
async fn typing_does_not_touch_state() {
    let root = container();
    let _handle = mount_to(root.clone(), || view! { <LoginForm /> });
    settle().await;

    type_into(&root, "#standard-basic", "trader@example.com");
    type_into(&root, "#standard-password-input", "hunter2");
    settle().await;
    assert_eq!(icon_name(&root), "locked");

    click_login(&root);
    settle().await;
    type_into(&root, "#standard-basic", "someone-else@example.com");
    settle().await;
    assert_eq!(icon_name(&root), "unlocked");
}

#[wasm_bindgen_test]
async fn renders_required_email_and_password_fields() {
    let root = container();
    let _handle = mount_to(root.clone(), || view! { <LoginForm /> });
    settle().await;

    assert_eq!(count(&root, "input"), 2);

    let email = find(&root, "#standard-basic").unchecked_into::<HtmlInputElement>();
    assert_eq!(email.type_(), "text");
    assert!(email.required());

    let password = find(&root, "#standard-password-input").unchecked_into::<HtmlInputElement>();
    assert_eq!(password.type_(), "password");
    assert!(password.required());

    let labels = find(&root, ".login-form").text_content().unwrap_or_default();
    assert!(labels.contains("Email Address"));
    assert!(labels.contains("Password"));
    assert_eq!(find(&root, "button.btn").text_content().as_deref(), Some("Login"));
}

#[wasm_bindgen_test]
async fn remount_resets_to_locked() {
    let root = container();

    let handle = mount_to(root.clone(), || view! { <LoginForm /> });
    settle().await;
    click_login(&root);
    settle().await;
    assert_eq!(icon_name(&root), "unlocked");
    drop(handle);
    settle().await;
    assert_eq!(count(&root, ".login-form"), 0);

    let _handle = mount_to(root.clone(), || view! { <LoginForm /> });
    settle().await;
    assert_eq!(icon_name(&root), "locked");
}
