//! Output formatting module

use washplan_types::{Appointment, OutputFormat, Result, UserAccount};

/// Render a set of appointments as a table or JSON.
pub fn output_appointments(output_format: OutputFormat, appointments: &[Appointment]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(appointments)?);
        return Ok(());
    }

    if appointments.is_empty() {
        println!("No appointments.");
        return Ok(());
    }

    println!(
        "{:<4} {:<20} {:<14} {:<10} {:<10} {:<19} {:<10}",
        "ID", "Client", "Phone", "Plate", "Wash", "Created", "Status"
    );
    for a in appointments {
        println!(
            "{:<4} {:<20} {:<14} {:<10} {:<10} {:<19} {:<10}",
            a.id, a.client_name, a.phone, a.plate, a.wash_type, a.created_at, a.status
        );
    }
    Ok(())
}

/// Render one appointment in full.
pub fn output_appointment(output_format: OutputFormat, appointment: &Appointment) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(appointment)?);
        return Ok(());
    }

    println!("Appointment #{}", appointment.id);
    println!("=================");
    println!("Client:   {}", appointment.client_name);
    println!("Phone:    {}", appointment.phone);
    println!("Plate:    {}", appointment.plate);
    println!("Wash:     {}", appointment.wash_type);
    println!("Options:  {}", appointment.service_options_display());
    println!("Created:  {}", appointment.created_at);
    println!("Status:   {}", appointment.status);
    Ok(())
}

/// Print-formatted report: one work order per appointment, suitable for a
/// printed hand-out.
pub fn output_print_report(appointments: &[Appointment]) -> Result<()> {
    for a in appointments {
        println!("----------------------------------------");
        println!("WORK ORDER #{}", a.id);
        println!("Client:  {} ({})", a.client_name, a.phone);
        println!("Vehicle: {}", a.plate);
        println!("Service: {}", a.wash_type);
        if !a.service_options.is_empty() {
            println!("Extras:  {}", a.service_options_display());
        }
        println!("Created: {}", a.created_at);
        println!("Status:  {}", a.status);
    }
    println!("----------------------------------------");
    println!("{} appointment(s)", appointments.len());
    Ok(())
}

/// Render accounts as a table or JSON.
pub fn output_accounts(output_format: OutputFormat, accounts: &[UserAccount]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(accounts)?);
        return Ok(());
    }

    if accounts.is_empty() {
        println!("No accounts.");
        return Ok(());
    }

    println!("{:<4} {:<20}", "ID", "Username");
    for u in accounts {
        println!("{:<4} {:<20}", u.id, u.username);
    }
    Ok(())
}
