use anyhow::{Result, bail};
use folio_contact::{
    Field, HttpTransport, SubmissionController, SubmissionStatus, SubmitError,
};

pub struct SendInput {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub endpoint: Option<String>,
}

/// Drives one contact form submission from the command line.
pub async fn send(config: crate::config::Config, input: SendInput) -> Result<()> {
    let endpoint = input
        .endpoint
        .unwrap_or_else(|| config.contact.endpoint.to_owned());
    let timeout = config.contact.timeout();

    let transport = HttpTransport::new(endpoint, timeout)?;
    tracing::debug!(endpoint = transport.endpoint(), "Sending contact message");

    let controller = SubmissionController::new(transport).with_timeout(timeout);
    controller.update_field(Field::Name, input.name);
    controller.update_field(Field::Email, input.email);
    controller.update_field(Field::Subject, input.subject.unwrap_or_default());
    controller.update_field(Field::Message, input.message);

    let status = match controller.submit().await {
        Ok(status) => status,
        Err(SubmitError::Incomplete(missing)) => {
            let names = missing
                .iter()
                .map(|field| field.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            bail!("missing required fields: {names}");
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(banner) = controller.banner() {
        println!("{banner}");
    }

    if status == SubmissionStatus::Failed {
        bail!("contact message was not delivered");
    }

    Ok(())
}
