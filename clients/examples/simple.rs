use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let addr = "localhost:8083";
    let mut conn = TcpStream::connect(addr).await?;
    conn.write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await?;

    let mut reply = Vec::new();
    conn.read_to_end(&mut reply).await?;
    println!("{}", String::from_utf8_lossy(&reply));
    Ok(())
}
