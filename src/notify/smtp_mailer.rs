use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::config::{MailConfig, SmtpTls};

use super::{DeliveryReceipt, EmailMessage, Notifier, NotifyError};

/// SMTP notifier.
///
/// Authenticates with the mail-account credentials when a user is configured.
/// Connections are pooled by the transport and shared across requests.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, NotifyError> {
        let builder = match config.tls {
            SmtpTls::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
            SmtpTls::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            }
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
        };

        let mut builder = builder
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)));
        if !config.user.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.user.clone(),
                config.pass.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            host: config.host.clone(),
            port: config.port,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Plain-text and HTML alternatives of one notification
fn build_message(message: &EmailMessage) -> Result<Message, NotifyError> {
    let from: Mailbox = message.from.parse()?;
    let to: Mailbox = message.to.parse()?;

    let email = Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            message.text.clone(),
            message.html.clone(),
        ))?;
    Ok(email)
}

#[async_trait]
impl Notifier for SmtpMailer {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, NotifyError> {
        debug!(to = %message.to, relay = %self.endpoint(), "Dispatching notification");

        let email = build_message(message)?;
        let response = self.transport.send(email).await?;

        let text: Vec<&str> = response.message().collect();
        Ok(DeliveryReceipt {
            response: format!("{} {}", response.code(), text.join(" ")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;

    /// Minimal SMTP server: accepts one session, records the DATA payload.
    /// `rcpt_reply` lets a test refuse the recipient.
    async fn spawn_smtp(rcpt_reply: &'static str) -> (u16, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (read, mut write) = stream.into_split();
            let mut lines = BufReader::new(read).lines();
            write.write_all(b"220 localhost ESMTP test\r\n").await.unwrap();

            let mut data: Option<String> = None;
            while let Ok(Some(line)) = lines.next_line().await {
                if let Some(buf) = data.as_mut() {
                    if line == "." {
                        sink.lock().unwrap().push(std::mem::take(buf));
                        data = None;
                        write.write_all(b"250 2.0.0 queued as 42\r\n").await.unwrap();
                    } else {
                        buf.push_str(&line);
                        buf.push('\n');
                    }
                    continue;
                }

                let verb = line.get(..4).unwrap_or_default().to_ascii_uppercase();
                let reply: &[u8] = match verb.as_str() {
                    "EHLO" | "HELO" => b"250 localhost\r\n",
                    "MAIL" => b"250 2.1.0 OK\r\n",
                    "RCPT" => rcpt_reply.as_bytes(),
                    "DATA" => {
                        data = Some(String::new());
                        b"354 end with .\r\n"
                    }
                    "QUIT" => {
                        let _ = write.write_all(b"221 bye\r\n").await;
                        break;
                    }
                    _ => b"250 OK\r\n",
                };
                write.write_all(reply).await.unwrap();
            }
        });

        (port, received)
    }

    fn config(port: u16) -> MailConfig {
        MailConfig {
            host: "127.0.0.1".into(),
            port,
            tls: SmtpTls::None,
            timeout_secs: 5,
            ..MailConfig::default()
        }
    }

    fn message() -> EmailMessage {
        EmailMessage {
            from: "admin@example.com".into(),
            to: "admin@example.com".into(),
            subject: "New contact received".into(),
            text: "text body".into(),
            html: "<p>html body</p>".into(),
        }
    }

    #[tokio::test]
    async fn test_send_delivers_multipart_message() {
        let (port, received) = spawn_smtp("250 2.1.5 OK\r\n").await;

        let mailer = SmtpMailer::new(&config(port)).unwrap();
        let receipt = mailer.send(&message()).await.unwrap();
        assert!(receipt.response.starts_with("250"));
        assert!(receipt.response.contains("queued as 42"));

        let payloads = received.lock().unwrap().clone();
        assert_eq!(payloads.len(), 1);
        let data = &payloads[0];
        assert!(data.contains("Subject: New contact received"));
        assert!(data.contains("To: admin@example.com"));
        assert!(data.contains("multipart/alternative"));
        assert!(data.contains("text body"));
        assert!(data.contains("<p>html body</p>"));
    }

    #[tokio::test]
    async fn test_refused_recipient_is_smtp_error() {
        let (port, received) = spawn_smtp("550 5.1.1 mailbox unavailable\r\n").await;

        let mailer = SmtpMailer::new(&config(port)).unwrap();
        let err = mailer.send(&message()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Smtp(_)));
        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_smtp_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mailer = SmtpMailer::new(&config(port)).unwrap();
        assert!(matches!(
            mailer.send(&message()).await,
            Err(NotifyError::Smtp(_))
        ));
    }

    #[test]
    fn test_bad_address_rejected_before_connecting() {
        let mut msg = message();
        msg.to = "not an address".into();
        assert!(matches!(build_message(&msg), Err(NotifyError::Address(_))));
    }

    #[tokio::test]
    async fn test_tls_modes_build() {
        for tls in [SmtpTls::Wrapper, SmtpTls::StartTls, SmtpTls::None] {
            let cfg = MailConfig {
                tls,
                user: "admin@example.com".into(),
                pass: "app-password".into(),
                ..MailConfig::default()
            };
            let mailer = SmtpMailer::new(&cfg).unwrap();
            assert_eq!(mailer.endpoint(), "smtp.gmail.com:465");
        }
    }
}
