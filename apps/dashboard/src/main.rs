use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client_core::{completion_overview, AssignmentForm, DashboardController, HttpAssignmentStore};
use shared::domain::{AssignmentId, AssignmentStatus, EmployeeId};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{load_settings, normalize_api_base_url};

#[derive(Parser, Debug)]
#[command(about = "Client dashboard for employee assignments")]
struct Cli {
    /// Overrides the configured API base url.
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Completion table and overview for every employee.
    Summary,
    /// Assignments of one employee (the first one by default).
    List {
        #[arg(long)]
        employee: Option<String>,
    },
    /// Create an assignment for the employee with the given full name.
    Assign {
        #[arg(long)]
        employee_name: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// YYYY-MM-DD
        #[arg(long)]
        deadline: NaiveDate,
        /// Employee whose list is shown afterwards.
        #[arg(long)]
        view_employee: Option<String>,
    },
    /// Move an assignment to pending, in-progress or completed.
    SetStatus {
        assignment_id: String,
        status: AssignmentStatus,
        /// Employee whose list is shown afterwards.
        #[arg(long)]
        employee: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(api_url) = cli.api_url {
        settings.api_base_url = api_url;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let api_base_url = normalize_api_base_url(&settings.api_base_url)?;
    let store = HttpAssignmentStore::new(&api_base_url)?;
    info!(api_base_url = %store.base_url(), "using dashboard API");
    let controller = DashboardController::new(Arc::new(store));
    controller.initialize().await?;

    match cli.command {
        Command::Summary => {
            let summaries = controller.completion_summaries().await;
            print!("{}", render::status_table(&summaries));
            println!();
            print!("{}", render::overview(&completion_overview(&summaries)));
        }
        Command::List { employee } => {
            select_if_requested(&controller, employee).await?;
            print_selected(&controller).await;
        }
        Command::Assign {
            employee_name,
            title,
            description,
            deadline,
            view_employee,
        } => {
            select_if_requested(&controller, view_employee).await?;
            let form = AssignmentForm {
                employee_name,
                title,
                description,
                deadline: Some(deadline),
            };
            controller.open_create_form().await;
            let created = controller.submit_new_assignment(form).await?;
            println!("created assignment {}", created.id);
            print_selected(&controller).await;
        }
        Command::SetStatus {
            assignment_id,
            status,
            employee,
        } => {
            select_if_requested(&controller, employee).await?;
            controller
                .update_assignment_status(&AssignmentId::new(assignment_id), status)
                .await?;
            print_selected(&controller).await;
        }
    }

    Ok(())
}

async fn select_if_requested(controller: &DashboardController, employee: Option<String>) -> Result<()> {
    if let Some(employee) = employee {
        controller.select_employee(EmployeeId::new(employee)).await?;
    }
    Ok(())
}

async fn print_selected(controller: &DashboardController) {
    let state = controller.snapshot().await;
    let heading = state
        .selected_employee
        .as_ref()
        .and_then(|id| state.employees.iter().find(|e| &e.id == id))
        .map(|e| e.full_name.as_str())
        .unwrap_or("(no employee selected)");
    println!("Assignments for {heading}:");
    print!("{}", render::assignment_list(&state.assignments));
}
