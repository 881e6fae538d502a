use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("pinterest mock listening on http://{addr}/v1 (token: {})", mock_server::ACCESS_TOKEN);
    mock_server::run(listener).await
}
