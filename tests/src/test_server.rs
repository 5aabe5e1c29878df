use hyper::{
    body,
    header::{HeaderName, HeaderValue, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use std::{
    collections::HashMap,
    convert::Infallible,
    net::SocketAddr,
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};
use tokio::{runtime::Runtime, sync::oneshot};

pub const USERNAME: &str = "jdoe";
pub const PASSWORD: &str = "hunter2";
pub const TOKEN: &str = "abc123";
pub const SLOW_PAGE_DELAY: Duration = Duration::from_secs(2);

const ECHOED_HEADERS: &[&str] = &[
    "accept",
    "accept-encoding",
    "accept-language",
    "user-agent",
    "content-type",
];

/// Local HTTP server serving the pages the end-to-end tests navigate.
///
/// Every instance binds its own ephemeral port, so tests can run in parallel.
pub struct TestServer {
    address: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    join_handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub fn start() -> Self {
        let (address_sender, address_receiver) = mpsc::channel();
        let (shutdown, shutdown_receiver) = oneshot::channel::<()>();

        let join_handle = thread::spawn(move || {
            Runtime::new().unwrap().block_on(async move {
                let addr = SocketAddr::from(([127, 0, 0, 1], 0));

                let server = Server::bind(&addr).serve(make_service_fn(|_| async {
                    Ok::<_, Infallible>(service_fn(|req| async move {
                        Ok::<_, Infallible>(handle_request(req).await)
                    }))
                }));

                let _ = address_sender.send(server.local_addr());

                let graceful = server.with_graceful_shutdown(async {
                    let _ = shutdown_receiver.await;
                });

                if let Err(e) = graceful.await {
                    eprintln!("Test server error: {}", e);
                }
            });
        });

        let address = address_receiver
            .recv()
            .expect("The test server couldn't be started");

        Self {
            address,
            shutdown: Some(shutdown),
            join_handle: Some(join_handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join_handle) = self.join_handle.take() {
            join_handle
                .join()
                .expect("Couldn't gracefully shutdown the test server thread");
        }
    }
}

async fn handle_request(mut request: Request<Body>) -> Response<Body> {
    let query = parse_pairs(request.uri().query().unwrap_or_default());
    let form = match body::to_bytes(request.body_mut()).await {
        Ok(bytes) => parse_pairs(&String::from_utf8_lossy(&bytes)),
        Err(_) => return page(StatusCode::BAD_REQUEST, "<p>Unreadable body.</p>"),
    };

    match (request.method(), request.uri().path()) {
        (&Method::GET, "/basic") => {
            let mut response = page(StatusCode::OK, "<p>This is my page.</p>");
            put_header(&mut response, "x-httptestheader", "servertestval");
            response
        }
        (&Method::GET, "/cookie") => cookie_page(&request),
        (&Method::GET, "/textpage") => page(
            StatusCode::OK,
            "<a id=\"secretLink\" href=\"http://example.com/secret\">Secret</a>\
             <table>\
             <tr><td>jsmith</td><td>booyah1</td></tr>\
             <tr><td>pmurphy</td><td>booyah2</td></tr>\
             </table>",
        ),
        (&Method::GET, "/one") => {
            if query.get("token").map(String::as_str) == Some(TOKEN) {
                page(
                    StatusCode::OK,
                    "<a href=\"index\">Home</a><p>Token accepted.</p><a href=\"two\">Next</a>",
                )
            } else {
                page(StatusCode::OK, "<p>Token rejected.</p>")
            }
        }
        (&Method::GET, "/two") => page(
            StatusCode::OK,
            &format!(
                "<title>Page Two</title><p>Username: {}</p><p>Password: {}</p>",
                USERNAME, PASSWORD
            ),
        ),
        (&Method::POST, "/three") => {
            let username = form.get("username").map(String::as_str);
            let password = form.get("password").map(String::as_str);

            if username == Some(USERNAME) && password == Some(PASSWORD) {
                page(
                    StatusCode::OK,
                    &format!("<p>Welcome, {}!</p>", USERNAME),
                )
            } else {
                page(StatusCode::FORBIDDEN, "<p>Login failed.</p>")
            }
        }
        (&Method::GET, "/customheaders") => {
            let accepted = header(&request, "x-test-username") == Some(USERNAME)
                && header(&request, "x-test-password") == Some(PASSWORD);

            page(
                StatusCode::OK,
                if accepted {
                    "<p>Custom header test page</p><p>Authentication headers accepted!</p>"
                } else {
                    "<p>Custom header test page</p><p>Authentication headers rejected.</p>"
                },
            )
        }
        (_, "/echo") => {
            let mut lines = vec![format!("method: {}", request.method())];
            for name in ECHOED_HEADERS {
                lines.push(format!("{}: {}", name, header(&request, name).unwrap_or("")));
            }
            page(StatusCode::OK, &lines.join("\n"))
        }
        (&Method::GET, "/slow") => {
            tokio::time::sleep(SLOW_PAGE_DELAY).await;
            page(StatusCode::OK, "<p>Timeout completed.</p>")
        }
        (&Method::GET, "/redirect") => {
            match query.get("count").and_then(|count| count.parse::<u32>().ok()) {
                Some(count) if count > 0 => {
                    let mut response = page(StatusCode::FOUND, "");
                    put_header(
                        &mut response,
                        LOCATION.as_str(),
                        &format!("/redirect?count={}", count - 1),
                    );
                    response
                }
                _ => page(StatusCode::OK, "<p>Redirects completed.</p>"),
            }
        }
        _ => page(StatusCode::NOT_FOUND, "<p>Not found.</p>"),
    }
}

fn cookie_page(request: &Request<Body>) -> Response<Body> {
    let cookie = request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("user="));

    match cookie {
        Some(value) => page(
            StatusCode::OK,
            &format!("<p>Cookie 'user' is set!</p><p>Value is: {}</p>", value),
        ),
        None => {
            let mut response = page(StatusCode::OK, "<p>Cookie named 'user' is not set!</p>");
            put_header(&mut response, SET_COOKIE.as_str(), "user=John_Doe; Path=/");
            response
        }
    }
}

fn page(status: StatusCode, body: &str) -> Response<Body> {
    let mut response = Response::new(Body::from(format!(
        "<html><body>{}</body></html>",
        body
    )));
    *response.status_mut() = status;
    put_header(&mut response, CONTENT_TYPE.as_str(), "text/html; charset=utf-8");
    response
}

fn put_header(response: &mut Response<Body>, name: &str, value: &str) {
    if let (Ok(name), Ok(value)) = (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        response.headers_mut().insert(name, value);
    }
}

fn header<'a>(request: &'a Request<Body>, name: &str) -> Option<&'a str> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

fn parse_pairs(text: &str) -> HashMap<String, String> {
    text.split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (String::from(key), String::from(value)))
        .collect()
}
