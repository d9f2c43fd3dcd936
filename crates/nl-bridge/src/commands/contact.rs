//! Contact form commands

use serde_json::Value;
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{
    parse_args, to_data, ContactFormDto, SubmitContactFormArgs, SubmitResultDto,
    UpdateContactFieldArgs,
};
use crate::commands::CommandError;

pub async fn get_contact_form(runtime: &AppRuntime, _args: Value) -> Result<Value, CommandError> {
    let span = info_span!("command.contact.get_contact_form");
    async {
        let form = runtime.usecases().contact_form();
        to_data(&ContactFormDto::new(form.form_id(), form.snapshot().await))
    }
    .instrument(span)
    .await
}

pub async fn update_contact_field(runtime: &AppRuntime, args: Value) -> Result<Value, CommandError> {
    let span = info_span!("command.contact.update_contact_field");
    async {
        let args: UpdateContactFieldArgs = parse_args(args)?;
        let form = runtime.usecases().contact_form();
        let snapshot = form.update_field(args.field, args.value).await;
        to_data(&ContactFormDto::new(form.form_id(), snapshot))
    }
    .instrument(span)
    .await
}

/// Resolves once delivery finished (or validation failed).
pub async fn submit_contact_form(runtime: &AppRuntime, args: Value) -> Result<Value, CommandError> {
    let span = info_span!("command.contact.submit_contact_form");
    async {
        let args: SubmitContactFormArgs = parse_args(args)?;
        let form = runtime.usecases().contact_form();
        let outcome = match args.fields {
            Some(fields) => form.submit(fields).await?,
            None => form.submit_current().await?,
        };
        let dto = ContactFormDto::new(form.form_id(), form.snapshot().await);
        to_data(&SubmitResultDto::new(outcome, dto))
    }
    .instrument(span)
    .await
}

pub async fn dismiss_contact_notice(
    runtime: &AppRuntime,
    _args: Value,
) -> Result<Value, CommandError> {
    let span = info_span!("command.contact.dismiss_contact_notice");
    async {
        let form = runtime.usecases().contact_form();
        let snapshot = form.dismiss().await;
        to_data(&ContactFormDto::new(form.form_id(), snapshot))
    }
    .instrument(span)
    .await
}
