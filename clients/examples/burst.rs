use futures::future::join_all;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const EXPECTED: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\nHello, Go!";

async fn one(addr: &str, n: usize) -> std::io::Result<bool> {
    let mut conn = TcpStream::connect(addr).await?;
    conn.write_all(format!("GET /{} HTTP/1.1\r\n\r\n", n).as_bytes())
        .await?;
    let mut reply = Vec::new();
    conn.read_to_end(&mut reply).await?;
    Ok(reply == EXPECTED)
}

#[tokio::main]
async fn main() {
    let addr = "localhost:8083";
    let results = join_all((0..100).map(|n| one(addr, n))).await;
    let ok = results.iter().filter(|r| matches!(r, Ok(true))).count();
    println!("{} of {} connections got the expected reply", ok, results.len());
    for err in results.into_iter().filter_map(|r| r.err()) {
        println!("error: {}", err);
    }
}
