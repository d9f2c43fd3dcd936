pub mod catalog;
pub mod contact;
pub mod dto;
pub mod error;

use tracing::warn;

use crate::bootstrap::AppRuntime;
use crate::protocol::{Request, Response};

pub use error::CommandError;

/// Routes one request to its command handler.
pub async fn dispatch(runtime: &AppRuntime, request: Request) -> Response {
    let Request { id, command, args } = request;
    let result = match command.as_str() {
        "list_categories" => catalog::list_categories(runtime, args).await,
        "filter_projects" => catalog::filter_projects(runtime, args).await,
        "get_project" => catalog::get_project(runtime, args).await,
        "list_featured_projects" => catalog::list_featured_projects(runtime, args).await,
        "list_team" => catalog::list_team(runtime, args).await,
        "get_contact_form" => contact::get_contact_form(runtime, args).await,
        "update_contact_field" => contact::update_contact_field(runtime, args).await,
        "submit_contact_form" => contact::submit_contact_form(runtime, args).await,
        "dismiss_contact_notice" => contact::dismiss_contact_notice(runtime, args).await,
        other => Err(CommandError::unknown_command(other)),
    };

    match result {
        Ok(data) => Response::success(id, data),
        Err(err) => {
            warn!(command = %command, error = %err, "command failed");
            Response::failure(id, err)
        }
    }
}
