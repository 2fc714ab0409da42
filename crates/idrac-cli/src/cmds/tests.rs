/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::time::Duration;

use libidrac::{Attribute, BootDevice, PowerState};
use mockito::Matcher;
use tempfile::TempDir;

use crate::cfg::config::Config;
use crate::cfg::runtime::RuntimeContext;
use crate::cfg::{CommandKind, run};
use crate::command::Command;
use crate::credential::Credential;
use crate::errors::CliError;
use crate::watch::StopReason;

const OK_RESPONSE: &str = "<root><status>ok</status></root>";

fn context(dir: &TempDir, server: &mockito::ServerGuard) -> RuntimeContext {
    RuntimeContext::new(Config {
        credentials_path: dir.path().join("credentials.json"),
        viewer_path: dir.path().join("viewer.jnlp"),
        override_base_url: Some(server.url()),
        ..Default::default()
    })
}

fn logged_in(dir: &TempDir, server: &mockito::ServerGuard) -> RuntimeContext {
    let ctx = context(dir, server);
    ctx.credentials
        .save(&Credential {
            host: "10.0.0.5".to_string(),
            username: "root".to_string(),
            auth_token: "3a5f0c9e".to_string(),
        })
        .unwrap();
    ctx
}

async fn run_args(ctx: &RuntimeContext, args: &[&str]) -> Result<(), CliError> {
    run(&Command::parse(args.iter().copied()), ctx).await
}

// --> argument validation <--
#[test]
fn login_requires_all_flags() {
    for args in [
        vec!["login"],
        vec!["login", "-u", "root", "-p", "calvin"],
        vec!["login", "-u", "root", "-h", "10.0.0.5"],
        vec!["login", "-p", "calvin", "-h", "10.0.0.5"],
    ] {
        let command = Command::parse(args.clone());
        assert!(
            matches!(super::login::Args::try_from(&command), Err(CliError::Usage(_))),
            "{args:?} should be rejected"
        );
    }
}

#[test]
fn login_accepts_positional_host() {
    let command = Command::parse(["login", "-u", "root", "-p", "calvin", "10.0.0.5"]);
    let args = super::login::Args::try_from(&command).unwrap();
    assert_eq!(args.host, "10.0.0.5");
    assert_eq!(args.username, "root");
    assert_eq!(args.password, "calvin");
}

#[test]
fn power_requires_known_state() {
    let command = Command::parse(["power", "graceful_shutdown"]);
    assert_eq!(
        super::power::Args::try_from(&command).unwrap().state,
        PowerState::GracefulShutdown
    );

    for args in [vec!["power"], vec!["power", "reboot"], vec!["power", "ON"]] {
        let command = Command::parse(args);
        assert!(matches!(
            super::power::Args::try_from(&command),
            Err(CliError::Usage(_))
        ));
    }
}

#[test]
fn boot_once_does_not_swallow_device() {
    let command = Command::parse(["boot", "-once", "local_cd"]);
    let args = super::boot::Args::try_from(&command).unwrap();
    assert_eq!(args.device, BootDevice::LocalCd);
    assert!(args.once);

    let command = Command::parse(["boot", "pxe"]);
    let args = super::boot::Args::try_from(&command).unwrap();
    assert_eq!(args.device, BootDevice::Pxe);
    assert!(!args.once);
}

#[test]
fn query_splits_attribute_lists() {
    let command = Command::parse(["query", "pwState,hostName", "temperatures", "-watch", "30s"]);
    let args = super::query::Args::try_from(&command).unwrap();
    assert_eq!(
        args.attributes,
        vec![
            Attribute::POWER_STATUS,
            Attribute::HOST_NAME,
            Attribute::TEMPERATURES
        ]
    );
    assert_eq!(args.watch, Some(Duration::from_secs(30)));
}

#[test]
fn query_rejects_missing_attributes_and_bad_interval() {
    let command = Command::parse(["query", "-watch", "5s"]);
    assert!(matches!(
        super::query::Args::try_from(&command),
        Err(CliError::Usage(_))
    ));

    let command = Command::parse(["query", "pwState", "-watch", "often"]);
    assert!(matches!(
        super::query::Args::try_from(&command),
        Err(CliError::Parse(_))
    ));
}

#[test]
fn help_lists_commands_and_attributes() {
    let text = super::help::help_text();
    for kind in [CommandKind::Login, CommandKind::Query, CommandKind::Boot] {
        assert!(text.contains(kind.usage()));
    }
    let attribute_lines: Vec<&str> = text
        .lines()
        .skip_while(|line| *line != "Possible attributes:")
        .skip(1)
        .collect();
    assert_eq!(attribute_lines.len(), 4);
    assert_eq!(attribute_lines[0].split(' ').count(), 10);
    assert!(attribute_lines[0].starts_with("pwState "));
}

// --> handlers against a mock iDRAC <--
#[tokio::test]
async fn login_persists_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/login")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user".into(), "root".into()),
            Matcher::UrlEncoded("password".into(), "calvin".into()),
        ]))
        .with_status(200)
        .with_header("set-cookie", "_appwebSessionId_=3a5f0c9e; path=/")
        .with_body(OK_RESPONSE)
        .create_async()
        .await;

    let ctx = context(&dir, &server);
    run_args(&ctx, &["login", "-u", "root", "-p", "calvin", "-h", "10.0.0.5"])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        ctx.credentials.load().unwrap(),
        Some(Credential {
            host: "10.0.0.5".to_string(),
            username: "root".to_string(),
            auth_token: "3a5f0c9e".to_string(),
        })
    );
}

#[tokio::test]
async fn login_twice_to_same_host_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/login")
        .expect(0)
        .create_async()
        .await;

    let ctx = logged_in(&dir, &server);
    let result = run_args(&ctx, &["login", "-u", "root", "-p", "calvin", "-h", "10.0.0.5"]).await;

    assert!(matches!(result, Err(CliError::AlreadyLoggedIn(host)) if host == "10.0.0.5"));
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_login_keeps_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/login")
        .with_status(200)
        .with_body("<root><authResult>1</authResult></root>")
        .create_async()
        .await;

    let ctx = context(&dir, &server);
    let result = run_args(&ctx, &["login", "-u", "root", "-p", "nope", "-h", "10.0.0.5"]).await;

    assert!(matches!(
        result,
        Err(CliError::Idrac(libidrac::IdracError::Auth { .. }))
    ));
    assert_eq!(ctx.credentials.load().unwrap(), None);
}

#[tokio::test]
async fn logout_removes_session_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let server = mockito::Server::new_async().await;
    let ctx = logged_in(&dir, &server);

    run_args(&ctx, &["logout"]).await.unwrap();
    assert_eq!(ctx.credentials.load().unwrap(), None);
    run_args(&ctx, &["logout"]).await.unwrap();
}

#[tokio::test]
async fn authenticated_commands_need_login() {
    let dir = tempfile::tempdir().unwrap();
    let server = mockito::Server::new_async().await;
    let ctx = context(&dir, &server);

    for args in [
        vec!["power", "on"],
        vec!["boot", "pxe"],
        vec!["query", "pwState"],
        vec!["console"],
    ] {
        let err = run_args(&ctx, &args).await.unwrap_err();
        assert!(matches!(err, CliError::NotLoggedIn), "{args:?}");
        assert_eq!(err.to_string(), "You should log in first");
    }
}

#[tokio::test]
async fn power_posts_state_with_cookie() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/data")
        .match_query(Matcher::UrlEncoded("set".into(), "pwState:2".into()))
        .match_header("cookie", "_appwebSessionId_=3a5f0c9e")
        .with_status(200)
        .with_body(OK_RESPONSE)
        .create_async()
        .await;

    let ctx = logged_in(&dir, &server);
    run_args(&ctx, &["power", "cold_reboot"]).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn boot_posts_override() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/data")
        .match_query(Matcher::UrlEncoded(
            "set".into(),
            "vmBootOnce:true,firstBootDevice:5".into(),
        ))
        .with_status(200)
        .with_body(OK_RESPONSE)
        .create_async()
        .await;

    let ctx = logged_in(&dir, &server);
    run_args(&ctx, &["boot", "-once", "local_cd"]).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn query_gets_attributes() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data")
        .match_query(Matcher::UrlEncoded(
            "get".into(),
            "pwState,hostName".into(),
        ))
        .with_status(200)
        .with_body("<root><pwState>1</pwState><hostName>web-01</hostName></root>")
        .create_async()
        .await;

    let ctx = logged_in(&dir, &server);
    run_args(&ctx, &["query", "pwState", "hostName"]).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn query_failure_surfaces_status() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/data")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("<root><status>busy</status></root>")
        .create_async()
        .await;

    let ctx = logged_in(&dir, &server);
    let err = run_args(&ctx, &["query", "pwState"]).await.unwrap_err();
    match err {
        CliError::Idrac(error) => {
            assert_eq!(error.body(), Some(r#"{"root":{"status":"busy"}}"#));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn console_saves_viewer() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/viewer\.jnlp\(10\.0\.0\.5@0@root@\d+\)$".to_string()),
        )
        .match_header("cookie", "_appwebSessionId_=3a5f0c9e")
        .with_status(200)
        .with_body("<jnlp/>")
        .create_async()
        .await;

    let ctx = logged_in(&dir, &server);
    run_args(&ctx, &["console"]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        std::fs::read_to_string(&ctx.config.viewer_path).unwrap(),
        "<jnlp/>"
    );
}

#[tokio::test]
async fn watch_ends_on_stop_signal() {
    let dir = tempfile::tempdir().unwrap();
    let server = mockito::Server::new_async().await;

    let ctx = logged_in(&dir, &server);
    let client = ctx.authenticated_client().unwrap();
    let summary = super::query::watch_until(
        client,
        vec![Attribute::POWER_STATUS],
        Duration::from_secs(3600),
        async { Ok(()) },
    )
    .await
    .unwrap();

    assert_eq!(summary.ticks, 0);
    assert_eq!(summary.reason, StopReason::Cancelled);
}
