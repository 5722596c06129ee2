use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
    task::JoinHandle,
};

/// Plaintext SMTP server on an ephemeral loopback port whose EHLO reply
/// offers AUTH but no STARTTLS.
///
/// Serves one session and resolves to every command line it received.
pub async fn spawn_server_without_starttls() -> (u16, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read, mut write) = stream.into_split();
        let mut lines = BufReader::new(read).lines();
        let mut seen = Vec::new();

        write.write_all(b"220 localhost ESMTP\r\n").await.unwrap();

        while let Ok(Some(line)) = lines.next_line().await {
            let command = line.to_ascii_uppercase();
            seen.push(line);

            let reply: &[u8] = if command.starts_with("EHLO") {
                b"250-localhost\r\n250 AUTH PLAIN LOGIN\r\n"
            } else if command.starts_with("QUIT") {
                b"221 Bye\r\n"
            } else {
                b"502 Command not implemented\r\n"
            };

            if write.write_all(reply).await.is_err() || command.starts_with("QUIT") {
                break;
            }
        }

        seen
    });

    (port, handle)
}
