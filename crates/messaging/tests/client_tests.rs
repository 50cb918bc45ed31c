use std::sync::Arc;
use std::time::Duration;

use courier_core::accounts::{get_account, AccountExistenceChecker};
use courier_core::{ServiceId, Store};
use courier_messaging::{MessagingClient, MessagingConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";

/// Serves one request with `status_line` and reports the request head.
async fn serve_once(status_line: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            status_line
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&head).to_string());
    });

    (format!("http://{}", addr), rx)
}

fn client(base_url: String) -> MessagingClient {
    MessagingClient::new(&MessagingConfig {
        base_url,
        timeout: Duration::from_secs(5),
        ..MessagingConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn existing_account_sends_head_request() {
    let (base_url, request) = serve_once("200 OK").await;
    let id = ServiceId::parse(ID).unwrap();

    assert!(client(base_url).account_exists(&id).await.unwrap());

    let head = request.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert_eq!(
        request_line,
        format!("HEAD /v1/accounts/account/{} HTTP/1.1", ID)
    );
    assert!(!head.to_ascii_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn missing_account_is_false() {
    let (base_url, _request) = serve_once("404 Not Found").await;
    let id = ServiceId::parse(ID).unwrap();

    assert!(!client(base_url).account_exists(&id).await.unwrap());
}

#[tokio::test]
async fn server_error_surfaces_as_transport_error() {
    let (base_url, _request) = serve_once("500 Internal Server Error").await;
    let id = ServiceId::parse(ID).unwrap();

    let err = client(base_url)
        .check_account_existence(&id)
        .await
        .unwrap_err();
    assert!(matches!(err, courier_core::Error::Transport(_)));
}

#[tokio::test]
async fn store_records_false_on_server_error() {
    let (base_url, _request) = serve_once("502 Bad Gateway").await;
    let store = Store::with_messaging(Arc::new(client(base_url)));

    store.check_for_account(ID).await;

    assert_eq!(get_account(&store.get_state(), ID), Some(false));
}

#[tokio::test]
async fn store_records_true_from_server() {
    let (base_url, _request) = serve_once("200 OK").await;
    let store = Store::with_messaging(Arc::new(client(base_url)));

    store.check_for_account(ID).await;

    assert_eq!(get_account(&store.get_state(), ID), Some(true));
}
