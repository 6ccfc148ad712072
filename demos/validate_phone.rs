use std::io::{self, BufRead, Write};

use checkmobi::{CallOptions, CheckMobiClientBuilder, ValidationId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone = std::env::var("CHECKMOBI_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CHECKMOBI_PHONE environment variable is required",
        )
    })?;
    let verify_as = std::env::var("CHECKMOBI_VERIFY_AS").unwrap_or_else(|_| "sms".to_owned());

    let client = CheckMobiClientBuilder::from_env()?.build()?;

    let started = client
        .validate_phone(&phone, &verify_as, Some("en-US"), None, CallOptions::default())
        .await?;
    println!(
        "validation id: {}, type: {:?}, dial number: {:?}",
        started.id, started.validation_type, started.dial_number
    );

    let id = ValidationId::new(started.id)?;
    if verify_as.eq_ignore_ascii_case("sms") || verify_as.eq_ignore_ascii_case("ivr") {
        print!("PIN: ");
        io::stdout().flush()?;
        let mut pin = String::new();
        io::stdin().lock().read_line(&mut pin)?;

        let verified = client
            .validate_pin(&id, pin.trim(), CallOptions::default())
            .await?;
        println!("validated: {}", verified.validated);
    }

    let status = client
        .get_validate_status(&id, CallOptions::default())
        .await?;
    println!("status: validated={} number={:?}", status.validated, status.number);

    Ok(())
}
