//! Minimal HTTP stand-in for the OSRM Route service.
//!
//! Each stub accepts exactly one connection, answers it with a canned
//! response, and hands back the request line it saw.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct OsrmStub {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OsrmStub {
    /// Answer the next request with `status` and a JSON `body`.
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::spawn(move |request_line, stream| {
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason_phrase(status),
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).expect("write stub response");
            stream.flush().expect("flush stub response");
            request_line
        })
    }

    /// Accept the request and never answer within `hold`.
    pub fn silent(hold: Duration) -> Self {
        Self::spawn(move |request_line, _stream| {
            thread::sleep(hold);
            request_line
        })
    }

    fn spawn<F>(handler: F) -> Self
    where
        F: FnOnce(String, &mut std::net::TcpStream) -> String + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept stub connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stub stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");
            loop {
                let mut header = String::new();
                let read = reader.read_line(&mut header).expect("read header");
                if read == 0 || header == "\r\n" {
                    break;
                }
            }

            handler(request_line.trim_end().to_string(), &mut stream)
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// The request line (`GET /route/v1/... HTTP/1.1`) the stub received.
    pub fn request_line(self) -> String {
        self.handle.join().expect("stub thread panicked")
    }
}

/// A base URL with nothing listening behind it.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway listener address");
    drop(listener);
    format!("http://{}", addr)
}

/// Canned successful Route response. `points` are (lat, lng).
pub fn route_body(points: &[(f64, f64)], distance_meters: f64) -> String {
    let coordinates = points
        .iter()
        .map(|(lat, lng)| format!("[{},{}]", lng, lat))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{"code":"Ok","routes":[{{"distance":{},"duration":0,"geometry":{{"type":"LineString","coordinates":[{}]}}}}],"waypoints":[]}}"#,
        distance_meters, coordinates
    )
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}
