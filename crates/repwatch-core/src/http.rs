//! Blocking HTTP implementation of [`StatusSource`].

use std::io::{self, Read};
use std::time::Duration;

use tracing::debug;

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, FINISH_PATH, MAX_REPORT_BODY_BYTES,
    MAX_STATUS_BODY_BYTES, STATUS_PATH,
};
use crate::error::{ClientError, ConfigError};
use crate::snapshot::{FinishReport, StatusSnapshot};
use crate::source::StatusSource;

/// Bytes of an error body kept in [`ClientError::Status`].
const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// Timeouts applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    /// Time allowed to establish the connection.
    pub connect: Duration,
    /// Deadline for the whole request, body included.
    pub overall: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: DEFAULT_CONNECT_TIMEOUT,
            overall: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl HttpTimeouts {
    /// Timeouts with the given overall deadline; connect never exceeds it.
    #[must_use]
    pub fn with_overall(overall: Duration) -> Self {
        Self {
            connect: DEFAULT_CONNECT_TIMEOUT.min(overall),
            overall,
        }
    }
}

/// Tracker server reached over HTTP with a shared `ureq` agent.
pub struct HttpStatusSource {
    base_url: String,
    status_url: String,
    finish_url: String,
    agent: ureq::Agent,
}

impl HttpStatusSource {
    /// Create a source for the server at `base_url`.
    pub fn new(base_url: &str, timeouts: HttpTimeouts) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeouts.connect)
            .timeout(timeouts.overall)
            .build();
        Ok(Self {
            status_url: format!("{base_url}{STATUS_PATH}"),
            finish_url: format!("{base_url}{FINISH_PATH}"),
            base_url,
            agent,
        })
    }

    /// Normalised base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the status endpoint.
    #[must_use]
    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    /// Full URL of the finish endpoint.
    #[must_use]
    pub fn finish_url(&self) -> &str {
        &self.finish_url
    }

    fn get(&self, url: &str, max_bytes: usize) -> Result<Vec<u8>, ClientError> {
        let response = match self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = read_body(response, MAX_ERROR_BODY_BYTES)
                    .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
                    .unwrap_or_default();
                return Err(ClientError::Status { code, body });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(ClientError::Transport(err.to_string()));
            }
        };
        read_body(response, max_bytes).map_err(map_read_error)
    }
}

impl StatusSource for HttpStatusSource {
    fn fetch_status(&self) -> Result<StatusSnapshot, ClientError> {
        let body = self.get(&self.status_url, MAX_STATUS_BODY_BYTES)?;
        StatusSnapshot::from_json(&body)
    }

    fn fetch_report(&self) -> Result<FinishReport, ClientError> {
        let body = self.get(&self.finish_url, MAX_REPORT_BODY_BYTES)?;
        debug!(bytes = body.len(), "finish report received");
        FinishReport::from_json(&body)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Validate a server base URL and strip its trailing slash.
pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Read a response into memory, enforcing a maximum byte size.
fn read_body(response: ureq::Response, max_bytes: usize) -> io::Result<Vec<u8>> {
    if let Some(length) = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok())
    {
        if length > max_bytes as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("response too large: {length} bytes"),
            ));
        }
    }
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

fn map_read_error(err: io::Error) -> ClientError {
    match err.kind() {
        io::ErrorKind::TimedOut
        | io::ErrorKind::WouldBlock
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted => ClientError::Transport(err.to_string()),
        _ => ClientError::Decode(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    fn json_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn source(url: &str) -> HttpStatusSource {
        HttpStatusSource::new(url, HttpTimeouts::with_overall(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn base_url_normalised() {
        assert_eq!(
            parse_base_url("http://127.0.0.1:5000/").unwrap(),
            "http://127.0.0.1:5000"
        );
        assert_eq!(
            parse_base_url(" https://gym.local/tracker/ ").unwrap(),
            "https://gym.local/tracker"
        );
    }

    #[test]
    fn base_url_rejects_bad_input() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://host").is_err());
        assert!(parse_base_url("http://host/?x=1").is_err());
    }

    #[test]
    fn endpoint_urls() {
        let src = source("http://127.0.0.1:5000/");
        assert_eq!(src.status_url(), "http://127.0.0.1:5000/status");
        assert_eq!(src.finish_url(), "http://127.0.0.1:5000/finish_workout");
        assert_eq!(src.describe(), "http://127.0.0.1:5000");
    }

    #[test]
    fn fetch_status_ok() {
        let url = serve_once(json_response(
            "200 OK",
            r#"{"reps": 4, "phase": "up", "feedback": "Good", "feedback_type": "CORRETO"}"#,
        ));
        let snap = source(&url).fetch_status().unwrap();
        assert_eq!(snap.reps, 4);
        assert_eq!(snap.feedback_type, "CORRETO");
    }

    #[test]
    fn fetch_status_non_ok() {
        let url = serve_once(json_response("500 Internal Server Error", "boom"));
        let err = source(&url).fetch_status().unwrap_err();
        assert_eq!(
            err,
            ClientError::Status {
                code: 500,
                body: "boom".into()
            }
        );
    }

    #[test]
    fn fetch_status_malformed_body() {
        let url = serve_once(json_response("200 OK", "{\"reps\": \"many\"}"));
        let err = source(&url).fetch_status().unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn fetch_status_rejects_oversized_body() {
        let response = concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Length: 10000000\r\n",
            "\r\n",
            "{}"
        )
        .to_string();
        let url = serve_once(response);
        let err = source(&url).fetch_status().unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn fetch_report_ok() {
        let url = serve_once(json_response("200 OK", r#"{"report": "Total reps: 12"}"#));
        let report = source(&url).fetch_report().unwrap();
        assert_eq!(report.report, "Total reps: 12");
    }

    #[test]
    fn connection_refused_is_transport() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = source(&format!("http://{addr}")).fetch_status().unwrap_err();
        assert!(err.is_transport(), "unexpected error: {err}");
    }

    #[test]
    fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(3));
                drop(stream);
            }
        });
        let src = HttpStatusSource::new(
            &format!("http://{addr}"),
            HttpTimeouts::with_overall(Duration::from_millis(300)),
        )
        .unwrap();
        let err = src.fetch_status().unwrap_err();
        assert!(err.is_transport(), "unexpected error: {err}");
    }
}
