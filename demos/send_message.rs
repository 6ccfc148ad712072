use std::io;

use checkmobi::{CallOptions, CheckMobiClientBuilder, MessageId, SendMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone = std::env::var("CHECKMOBI_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CHECKMOBI_PHONE environment variable is required",
        )
    })?;
    let text = std::env::var("CHECKMOBI_MESSAGE")
        .unwrap_or_else(|_| "Hello from the checkmobi demo.".to_owned());

    let client = CheckMobiClientBuilder::from_env()?.build()?;

    let sent = client
        .send_message(&SendMessage::new(phone, text), CallOptions::default())
        .await?;
    println!("message id: {}", sent.id);

    let info = client
        .get_message_information(&MessageId::new(sent.id)?, CallOptions::default())
        .await?;
    println!("status: {:?}, charged: {:?}", info.status, info.charged_amount);

    Ok(())
}
