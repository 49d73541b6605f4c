use reqwest::blocking::Client;
use rushprobe_core::config::ProbeConfig;
use rushprobe_core::model::Sample;

use crate::error::FetchError;

/// Anything that can hand out one sample per call.
pub trait SampleSource {
    fn fetch(&mut self) -> Result<Sample, FetchError>;
}

/// Blocking client for the random-board endpoint.
///
/// Certificate verification stays on; there is no switch to disable it.
pub struct BoardClient {
    client: Client,
    endpoint: String,
}

impl BoardClient {
    pub fn new(config: &ProbeConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET, checked for a success status, decoded as JSON.
    pub fn fetch_sample(&self) -> Result<Sample, FetchError> {
        let response = self.client.get(&self.endpoint).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text()?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(Sample::from_value(value))
    }
}

impl SampleSource for BoardClient {
    fn fetch(&mut self) -> Result<Sample, FetchError> {
        self.fetch_sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Answer one connection per canned response, in order.
    fn serve(responses: Vec<String>) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/random.json", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut buf = [0u8; 4096];
                let mut request = Vec::new();
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                stream.write_all(response.as_bytes()).unwrap();
            }
        });
        (url, handle)
    }

    fn client_for(url: &str) -> BoardClient {
        BoardClient::new(&ProbeConfig::new(url, 2).unwrap()).unwrap()
    }

    #[test]
    fn test_fetch_decodes_board() {
        let (url, handle) = serve(vec![http_response(
            "200 OK",
            r#"{"desc":"IBBx..","moves":42}"#,
        )]);
        let client = client_for(&url);
        let sample = client.fetch_sample().unwrap();
        assert_eq!(sample.moves().unwrap(), 42);
        assert_eq!(client.endpoint(), url);
        handle.join().unwrap();
    }

    #[test]
    fn test_non_success_status() {
        let (url, handle) = serve(vec![http_response("503 Service Unavailable", "{}")]);
        let err = client_for(&url).fetch_sample().unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
        handle.join().unwrap();
    }

    #[test]
    fn test_invalid_json() {
        let (url, handle) = serve(vec![http_response("200 OK", "<html>oops</html>")]);
        let err = client_for(&url).fetch_sample().unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        handle.join().unwrap();
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/random.json", listener.local_addr().unwrap());
        drop(listener);
        let err = client_for(&url).fetch_sample().unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_trait_fetch_delegates() {
        let (url, handle) = serve(vec![http_response("200 OK", r#"{"moves":3}"#)]);
        let mut client = client_for(&url);
        let source: &mut dyn SampleSource = &mut client;
        assert_eq!(source.fetch().unwrap().moves().unwrap(), 3);
        handle.join().unwrap();
    }
}
