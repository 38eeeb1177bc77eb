use crate::conf::load_config;
use crate::server::build_service;
use crate::service::{
    DEFAULT_ERRORS_HOURS, DEFAULT_ERRORS_LIMIT, DEFAULT_LOGS_HOURS, DEFAULT_LOGS_LIMIT,
    DEFAULT_SEARCH_HOURS, DEFAULT_SEARCH_LIMIT, ErrorsRequest, LogService, LogsRequest, QueryPlan,
    SearchRequest,
};
use chrono::Utc;
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;

/// Print the LogQL a request would send, without contacting Loki.
#[derive(Subcommand, Debug)]
pub enum ExplainCmd {
    Logs {
        stack: String,
        service: String,
        #[arg(long, default_value_t = DEFAULT_LOGS_HOURS)]
        hours: i64,
        #[arg(long, default_value_t = DEFAULT_LOGS_LIMIT)]
        limit: i64,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },

    Errors {
        stack: String,
        service: String,
        #[arg(long, default_value_t = DEFAULT_ERRORS_HOURS)]
        hours: i64,
        #[arg(long, default_value_t = DEFAULT_ERRORS_LIMIT)]
        limit: i64,
    },

    Search {
        query: String,
        #[arg(long)]
        stack: Option<String>,
        #[arg(long, default_value_t = DEFAULT_SEARCH_HOURS)]
        hours: i64,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: i64,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct Explained<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) container: Option<&'a str>,
    pub(crate) logql: &'a str,
    pub(crate) start: &'a str,
    pub(crate) end: &'a str,
    pub(crate) limit: u32,
    pub(crate) direction: &'static str,
}

impl<'a> From<&'a QueryPlan> for Explained<'a> {
    fn from(plan: &'a QueryPlan) -> Self {
        Self {
            container: plan.container.as_deref(),
            logql: &plan.range.query,
            start: &plan.range.start,
            end: &plan.range.end,
            limit: plan.range.limit,
            direction: plan.range.direction.as_str(),
        }
    }
}

pub fn run(cmd: ExplainCmd, config: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let validated = load_config(config.as_deref())?;
    let service = build_service(&validated)?;

    let plan = plan(&service, cmd)?;
    let explained = Explained::from(&plan);

    if json {
        println!("{}", serde_json::to_string_pretty(&explained)?);
    } else {
        if let Some(container) = explained.container {
            println!("container: {container}");
        }
        println!("logql:     {}", explained.logql);
        println!("start:     {}", explained.start);
        println!("end:       {}", explained.end);
        println!("limit:     {}", explained.limit);
        println!("direction: {}", explained.direction);
    }

    Ok(())
}

pub(crate) fn plan(service: &LogService, cmd: ExplainCmd) -> anyhow::Result<QueryPlan> {
    let now = Utc::now();

    let plan = match cmd {
        ExplainCmd::Logs {
            stack,
            service: role,
            hours,
            limit,
            level,
            search,
        } => service.plan_logs(
            &LogsRequest {
                stack,
                service: role,
                hours,
                limit,
                level,
                search,
            },
            now,
        )?,

        ExplainCmd::Errors {
            stack,
            service: role,
            hours,
            limit,
        } => service.plan_errors(
            &ErrorsRequest {
                stack,
                service: role,
                hours,
                limit,
            },
            now,
        )?,

        ExplainCmd::Search {
            query,
            stack,
            hours,
            limit,
        } => service.plan_search(
            &SearchRequest {
                query,
                stack,
                hours,
                limit,
            },
            now,
        )?,
    };

    Ok(plan)
}
