use std::io;

use notifox::{MessageText, NotifoxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let alert = std::env::var("NOTIFOX_ALERT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NOTIFOX_ALERT environment variable is required",
        )
    })?;

    let client = NotifoxClient::builder().build()?;
    let response = client.calculate_parts(MessageText::new(alert)?).await?;
    println!(
        "parts: {}, cost: {} {}, encoding: {}, characters: {}",
        response.parts, response.cost, response.currency, response.encoding, response.characters
    );
    println!("message as it would be sent: {}", response.message);
    Ok(())
}
