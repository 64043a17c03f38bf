// tests/loader_sources.rs
//
// Loader against a temp directory and a one-shot local HTTP server.
//
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use offerings_browser::config::options::UiOptions;
use offerings_browser::loader::{load, DataSource, LoadError};
use offerings_browser::progress::NullProgress;
use offerings_browser::session::{Session, Status};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("offerings_loader_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Serve exactly one canned response, return the base URL.
fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let resp = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/data")
}

const TWO: &str = r#"[
    {"Your Name": "Ana", "Name of City you are from": "Lima", "country": "Peru", "Your Offering": "Bread"},
    {"country": "Chile"}
]"#;

#[test]
fn reads_year_file_from_directory() {
    let dir = tmp_dir("dir_ok");
    fs::create_dir_all(dir.join("2025")).unwrap();
    fs::write(dir.join("2025").join("offerings.json"), TWO).unwrap();

    let ds = load(&DataSource::Dir(dir), 2025, None).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.get(0).unwrap().name(), Some("Ana"));
    assert_eq!(ds.get(1).unwrap().name(), None);
}

#[test]
fn missing_year_is_an_io_error() {
    let dir = tmp_dir("dir_missing");
    match load(&DataSource::Dir(dir), 1999, None) {
        Err(LoadError::Io { path, .. }) => assert!(path.ends_with("1999/offerings.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tmp_dir("dir_bad");
    fs::create_dir_all(dir.join("2025")).unwrap();
    fs::write(dir.join("2025").join("offerings.json"), "{ not an array").unwrap();
    assert!(matches!(load(&DataSource::Dir(dir), 2025, None), Err(LoadError::Parse(_))));
}

#[test]
fn fetches_over_http() {
    let base = serve_once("200 OK", TWO);
    let ds = load(&DataSource::parse(&base), 2025, Some(&mut NullProgress)).unwrap();
    assert_eq!(ds.len(), 2);
}

#[test]
fn http_404_is_fatal_for_the_session() {
    let base = serve_once("404 Not Found", "");
    let res = load(&DataSource::parse(&base), 2025, None);
    match &res {
        Err(LoadError::Status { code, url }) => {
            assert_eq!(*code, 404);
            assert!(url.ends_with("/data/2025/offerings.json"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    let s = Session::from_load(res, &UiOptions::default());
    assert!(matches!(s.status(), Status::Failed(_)));
    assert!(!s.controls_active());
    assert_eq!(s.visible_cards().count(), 0);
}

#[test]
fn refused_connection_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{port}");
    assert!(matches!(
        load(&DataSource::parse(&base), 2025, None),
        Err(LoadError::Transport { .. })
    ));
}
