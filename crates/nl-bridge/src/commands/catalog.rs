//! Catalog commands

use serde_json::Value;
use tracing::{info_span, Instrument};

use nl_core::FilterState;

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{parse_args, to_data, FilterProjectsArgs, GetProjectArgs, ProjectCardDto};
use crate::commands::CommandError;

/// Filter button labels, wildcard first.
pub async fn list_categories(runtime: &AppRuntime, _args: Value) -> Result<Value, CommandError> {
    let span = info_span!("command.catalog.list_categories");
    async {
        let labels: Vec<&str> = runtime
            .usecases()
            .list_categories()
            .execute()
            .iter()
            .map(|c| c.label())
            .collect();
        to_data(&labels)
    }
    .instrument(span)
    .await
}

pub async fn filter_projects(runtime: &AppRuntime, args: Value) -> Result<Value, CommandError> {
    let span = info_span!("command.catalog.filter_projects");
    async {
        let args: FilterProjectsArgs = parse_args(args)?;
        let filter = FilterState::new(args.category, args.query);
        let cards: Vec<ProjectCardDto> = runtime
            .usecases()
            .list_projects()
            .execute(&filter)
            .iter()
            .map(ProjectCardDto::from)
            .collect();
        to_data(&cards)
    }
    .instrument(span)
    .await
}

/// Full record for the detail page; unknown slugs are `not_found`.
pub async fn get_project(runtime: &AppRuntime, args: Value) -> Result<Value, CommandError> {
    let span = info_span!("command.catalog.get_project");
    async {
        let args: GetProjectArgs = parse_args(args)?;
        match runtime.usecases().get_project_by_slug().execute(&args.slug) {
            Some(record) => to_data(&record),
            None => Err(CommandError::not_found(format!(
                "project not found: {}",
                args.slug
            ))),
        }
    }
    .instrument(span)
    .await
}

pub async fn list_featured_projects(
    runtime: &AppRuntime,
    _args: Value,
) -> Result<Value, CommandError> {
    let span = info_span!("command.catalog.list_featured_projects");
    async {
        let cards: Vec<ProjectCardDto> = runtime
            .usecases()
            .list_featured_projects()
            .execute()
            .iter()
            .map(ProjectCardDto::from)
            .collect();
        to_data(&cards)
    }
    .instrument(span)
    .await
}

pub async fn list_team(runtime: &AppRuntime, _args: Value) -> Result<Value, CommandError> {
    let span = info_span!("command.catalog.list_team");
    async { to_data(&runtime.usecases().list_team_members().execute()) }
        .instrument(span)
        .await
}
