use std::io;

use notifox::{AlertRequest, Audience, Channel, MessageText, NotifoxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let audience = std::env::var("NOTIFOX_AUDIENCE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFOX_AUDIENCE environment variable is required",
        )
    })?;
    let alert = std::env::var("NOTIFOX_ALERT")
        .unwrap_or_else(|_| "Hello from the notifox example.".to_owned());

    // API key comes from NOTIFOX_API_KEY.
    let client = NotifoxClient::builder().build()?;

    let mut request = AlertRequest::new(Audience::new(audience)?, MessageText::new(alert)?);
    if let Ok(channel) = std::env::var("NOTIFOX_CHANNEL") {
        request = request.with_channel(channel.parse::<Channel>()?);
    }

    let response = client.send_alert(request).await?;
    println!(
        "message_id: {}, parts: {}, cost: {} {}",
        response.message_id, response.parts, response.cost, response.currency
    );
    Ok(())
}
