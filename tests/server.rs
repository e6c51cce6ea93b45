use http11::{EchoDispatcher, Http11Server, ServerConfig};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn start() -> SocketAddr {
    let config = ServerConfig {
        bind_address: String::from("127.0.0.1:0"),
        read_timeout_ms: 2_000,
        ..ServerConfig::default()
    };

    let server = Http11Server::bind(&config).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.serve(EchoDispatcher));
    addr
}

async fn send(addr: SocketAddr, raw: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn test_echo_over_tcp() {
    let addr = start().await;
    let response = send(addr, b"GET /a?x=1 HTTP/1.1\r\nHost: test.com:8080\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Connection: Close\r\n"));
    assert!(response.contains("Content-Type: text/plain\r\n"));
    assert!(response.ends_with("method: GET\npath: /a\nquery: x=1\nhost: test.com\nport: 8080\n"));
}

#[tokio::test]
async fn test_malformed_request_over_tcp() {
    let addr = start().await;
    let response = send(addr, b"GET / HTTP/1.0\r\nHost: a\r\n\r\n").await;

    assert_eq!(
        response,
        "HTTP/1.1 500 Unable to parse request\r\nConnection: Close\r\n\r\n"
    );
}

#[tokio::test]
async fn test_connections_are_independent() {
    let addr = start().await;

    let bad = send(addr, b"GARBAGE\r\n\r\n");
    let good = send(addr, b"HEAD /x HTTP/1.1\r\nHost: b\r\n\r\n");
    let (bad, good) = tokio::join!(bad, good);

    assert!(bad.starts_with("HTTP/1.1 500 "));
    assert!(good.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(good.contains("method: HEAD\n"));
}
