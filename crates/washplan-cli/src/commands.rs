//! Command handlers

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use washplan_app::repository::{open_appointment_repo, open_user_repo};
use washplan_app::{AccountService, Config, SchedulingService};
use washplan_domain::FilterSpec;
use washplan_types::{AppointmentRequest, AppointmentUpdate, OutputFormat, Result};

use crate::cli::{Cli, Commands, UsersCommand};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Request {
            name,
            phone,
            plate,
            wash_type,
            options,
        } => cmd_request(&config, name, phone, plate, wash_type, options, output_format),

        Commands::Show { id } => cmd_show(&config, id, output_format),

        Commands::List => cmd_list(&config, output_format),

        Commands::Agenda { date } => cmd_agenda(&config, date, output_format),

        Commands::Edit {
            id,
            name,
            phone,
            plate,
            wash_type,
            options,
            created_at,
            status,
        } => cmd_edit(
            &config, id, name, phone, plate, wash_type, options, created_at, status,
            output_format,
        ),

        Commands::Accept { id } => cmd_accept(&config, id, output_format),

        Commands::SetStatus { id, status } => cmd_set_status(&config, id, &status, output_format),

        Commands::Report {
            client,
            plate,
            month,
            statuses,
            print,
        } => cmd_report(&config, client, plate, month, statuses, print, output_format),

        Commands::Users { command } => cmd_users(&config, command, output_format),

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            reset,
        } => cmd_config(config, show, set_data_dir, set_output, reset),
    }
}

fn open_scheduling(config: &Config) -> Result<SchedulingService> {
    Ok(SchedulingService::new(open_appointment_repo(config)?))
}

fn cmd_request(
    config: &Config,
    name: String,
    phone: String,
    plate: String,
    wash_type: String,
    options: Vec<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let service = open_scheduling(config)?;
    let created = service.create_appointment(AppointmentRequest {
        client_name: name,
        phone,
        plate,
        wash_type,
        service_options: options,
    })?;

    if output_format == OutputFormat::Table {
        println!("Appointment requested.");
    }
    output::output_appointment(output_format, &created)
}

fn cmd_show(config: &Config, id: u64, output_format: OutputFormat) -> Result<()> {
    let service = open_scheduling(config)?;
    let appointment = service.get_appointment(id)?;
    output::output_appointment(output_format, &appointment)
}

fn cmd_list(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = open_scheduling(config)?;
    let appointments = service.list_appointments()?;
    output::output_appointments(output_format, &appointments)
}

fn cmd_agenda(config: &Config, date: Option<NaiveDate>, output_format: OutputFormat) -> Result<()> {
    let service = open_scheduling(config)?;
    let day = date.unwrap_or_else(|| Local::now().date_naive());
    let appointments = service.list_todays_appointments(day)?;

    if output_format == OutputFormat::Table {
        println!("Agenda for {day}");
        println!();
    }
    output::output_appointments(output_format, &appointments)
}

#[allow(clippy::too_many_arguments)]
fn cmd_edit(
    config: &Config,
    id: u64,
    name: Option<String>,
    phone: Option<String>,
    plate: Option<String>,
    wash_type: Option<String>,
    options: Vec<String>,
    created_at: Option<String>,
    status: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let service = open_scheduling(config)?;

    // Fill unset flags from the stored record; the core always receives a
    // full overwrite.
    let current = service.get_appointment(id)?;
    let fields = AppointmentUpdate {
        client_name: name.unwrap_or(current.client_name),
        phone: phone.unwrap_or(current.phone),
        plate: plate.unwrap_or(current.plate),
        wash_type: wash_type.unwrap_or(current.wash_type),
        service_options: if options.is_empty() {
            current.service_options
        } else {
            options
        },
        created_at: created_at.unwrap_or(current.created_at),
        status: status.unwrap_or(current.status),
    };

    let updated = service.update_appointment(id, fields)?;
    if output_format == OutputFormat::Table {
        println!("Appointment updated.");
    }
    output::output_appointment(output_format, &updated)
}

fn cmd_accept(config: &Config, id: u64, output_format: OutputFormat) -> Result<()> {
    let service = open_scheduling(config)?;
    let accepted = service.accept_appointment(id)?;
    if output_format == OutputFormat::Table {
        println!("Appointment accepted.");
    }
    output::output_appointment(output_format, &accepted)
}

fn cmd_set_status(config: &Config, id: u64, status: &str, output_format: OutputFormat) -> Result<()> {
    let service = open_scheduling(config)?;
    let updated = service.set_appointment_status(id, status)?;
    if output_format == OutputFormat::Table {
        println!("Status set to {}.", updated.status);
    }
    output::output_appointment(output_format, &updated)
}

fn cmd_report(
    config: &Config,
    client: Option<String>,
    plate: Option<String>,
    month: Option<String>,
    statuses: Vec<String>,
    print: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let service = open_scheduling(config)?;
    let spec = FilterSpec {
        client,
        plate,
        month,
        statuses: statuses.into_iter().collect::<BTreeSet<_>>(),
    };

    if print {
        // The print view filters by name, plate, and status only.
        let appointments = service.query_appointments(&spec.without_month())?;
        return output::output_print_report(&appointments);
    }

    let appointments = service.query_appointments(&spec)?;
    output::output_appointments(output_format, &appointments)
}

fn cmd_users(config: &Config, command: UsersCommand, output_format: OutputFormat) -> Result<()> {
    let mut service = AccountService::new(open_user_repo(config)?);

    match command {
        UsersCommand::List => {
            let accounts = service.list_accounts()?;
            output::output_accounts(output_format, &accounts)
        }
        UsersCommand::Add { username, password } => {
            let user = service.register_account(&username, &password)?;
            println!("Registered {} (id {}).", user.username, user.id);
            Ok(())
        }
        UsersCommand::Edit {
            id,
            username,
            password,
        } => {
            let user = service.update_account(id, &username, &password)?;
            println!("Updated account {} (id {}).", user.username, user.id);
            Ok(())
        }
        UsersCommand::Remove { id } => {
            if service.delete_account(id)? {
                println!("Deleted account {id}.");
            } else {
                println!("No account with id {id}.");
            }
            Ok(())
        }
        UsersCommand::Verify { username, password } => {
            match service.verify_credentials(&username, &password)? {
                Some(user) => println!("Credentials valid for {} (id {}).", user.username, user.id),
                None => println!("Credentials invalid."),
            }
            Ok(())
        }
    }
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{config}");
    }
    Ok(())
}
