//! Functional tests against a live hello service.
//!
//! # Design
//! Each test starts the service on a random port, then drives it through
//! `ServiceClient` over real HTTP using ureq. Validates that request building
//! and response parsing agree with the actual server.

use hello_core::{ApiError, HttpRequest, HttpResponse, ServiceClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data, and allows extension methods such as `KEK`.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .allow_non_standard_methods(true)
        .build()
        .new_agent();

    let request = ureq::http::Request::builder()
        .method(req.method.as_str())
        .uri(&req.url)
        .body(())
        .expect("valid request");

    let mut response = agent.run(request).expect("HTTP transport error");

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let content = response.body_mut().read_to_vec().unwrap_or_default();

    HttpResponse {
        status,
        headers,
        content,
    }
}

/// Start the service on a random port and return a client pointed at it.
fn service_client() -> ServiceClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            hello_service::run(listener).await
        })
        .unwrap();
    });

    ServiceClient::new(&format!("http://{addr}"))
}

#[test]
fn ping() {
    let client = service_client();

    let response = execute(client.get("/hello"));
    assert_eq!(response.status, 200);
    assert_eq!(response.content, b"Hello world!\n");
    assert!(
        !response.keys().any(|key| key == "X-RequestId"),
        "unexpected header"
    );
    assert!(!response.contains_header("X-RequestId"));
    assert_eq!(client.parse_greeting(&response).unwrap(), "Hello world!\n");
}

#[test]
fn wrong_method() {
    let client = service_client();

    let response = execute(client.request("KEK", "/hello"));
    assert_eq!(response.status, 400);
    assert_eq!(response.content, b"bad request");
    assert!(
        !response.keys().any(|key| key == "X-YaRequestId"),
        "unexpected header"
    );
    assert!(!response.contains_header("X-YaRequestId"));

    let err = client.parse_greeting(&response).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(ref body) if body == "bad request"));
}

#[test]
fn every_non_get_method_is_a_bad_request() {
    let client = service_client();

    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let response = execute(client.request(method, "/hello"));
        assert_eq!(response.status, 400, "{method}");
        assert_eq!(response.content, b"bad request", "{method}");
    }
}

#[test]
fn unknown_path_is_not_found() {
    let client = service_client();

    let response = execute(client.get("/goodbye"));
    assert_eq!(response.status, 404);
    assert!(matches!(
        client.parse_greeting(&response),
        Err(ApiError::NotFound)
    ));
}

#[test]
fn repeated_requests_are_identical() {
    let client = service_client();

    for request in [client.get("/hello"), client.request("KEK", "/hello")] {
        let first = execute(request.clone());
        let mut first_keys: Vec<String> = first.keys().map(str::to_ascii_lowercase).collect();
        first_keys.sort();

        for _ in 0..5 {
            let next = execute(request.clone());
            assert_eq!(next.status, first.status);
            assert_eq!(next.content, first.content);

            let mut keys: Vec<String> = next.keys().map(str::to_ascii_lowercase).collect();
            keys.sort();
            assert_eq!(keys, first_keys);
        }
    }
}

#[test]
fn concurrent_requests_are_independent() {
    let client = service_client();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            std::thread::spawn(move || {
                let request = if i % 2 == 0 {
                    client.get("/hello")
                } else {
                    client.request("KEK", "/hello")
                };
                (i, execute(request))
            })
        })
        .collect();

    for handle in handles {
        let (i, response) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(response.status, 200);
            assert_eq!(response.content, b"Hello world!\n");
        } else {
            assert_eq!(response.status, 400);
            assert_eq!(response.content, b"bad request");
        }
    }
}
