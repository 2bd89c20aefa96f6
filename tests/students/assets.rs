//! Static page assets.

use crate::support::TestServer;

fn write_assets(server: &TestServer) {
    let public = server.public_dir();
    std::fs::write(public.join("index.html"), "<h1>Students</h1>").unwrap();
    std::fs::write(public.join("style.css"), "body { margin: 0; }").unwrap();
    std::fs::write(public.join("script.js"), "const API_URL = '/students';").unwrap();
}

#[tokio::test]
async fn serves_known_assets_with_content_types() {
    let server = TestServer::start().await;
    write_assets(&server);

    for (path, content_type, body) in [
        ("/", "text/html", "<h1>Students</h1>"),
        ("/index.html", "text/html", "<h1>Students</h1>"),
        ("/style.css", "text/css", "body { margin: 0; }"),
        ("/script.js", "application/javascript", "const API_URL = '/students';"),
    ] {
        let resp = server.client.get(server.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 200, "{path}");
        assert_eq!(resp.headers()["content-type"], content_type);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.text().await.unwrap(), body);
    }
}

#[tokio::test]
async fn missing_asset_is_a_plain_server_error() {
    let server = TestServer::start().await;

    let resp = server.client.get(server.url("/style.css")).send().await.unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.text().await.unwrap(), "Error loading style.css");

    let resp = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.text().await.unwrap(), "Error loading index.html");
}

#[tokio::test]
async fn other_files_in_the_static_dir_are_not_served() {
    let server = TestServer::start().await;
    std::fs::write(server.public_dir().join("secret.txt"), "hidden").unwrap();

    let resp = server.client.get(server.url("/secret.txt")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "Not Found");
}
