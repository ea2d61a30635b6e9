use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Minimal HTTP/1.1 server answering a fixed number of GETs with the same response.
pub struct TestServer {
    pub url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub fn join(self) {
        self.handle.join().unwrap();
    }
}

pub fn serve(status: &'static str, body: Vec<u8>, requests: usize) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/public/data/status.json", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            read_request_head(&mut reader);

            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            )
            .unwrap();
            stream.write_all(&body).unwrap();
            stream.flush().unwrap();
        }
    });

    TestServer { url, handle }
}

fn read_request_head(reader: &mut impl BufRead) {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
            break;
        }
    }
}

/// Accepts one GET, reads it and never answers. The thread ends once the
/// client hangs up.
pub fn stall() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/public/data/status.json", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        read_request_head(&mut reader);

        let mut rest = Vec::new();
        let _ = reader.read_to_end(&mut rest);
    });

    TestServer { url, handle }
}

/// A URL on a local port nobody is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/public/data/status.json", addr)
}
