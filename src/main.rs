// src/main.rs
//
// ClinicDesk command line front end.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use clinicdesk::application::AppState;
use clinicdesk::config::AppConfig;
use clinicdesk::reports::{InventoryReport, PatientReport, ReportGenerator};
use clinicdesk::services::CreatePatientRequest;
use clinicdesk::{AppError, ErrorResponse};

#[derive(Debug, Parser)]
#[command(name = "clinicdesk", about = "Clinic records kept in plain text files", version)]
struct Cli {
    /// Directory holding patients.txt, doctors.txt, medicines.txt and users.txt
    #[arg(long, global = true, env = "CLINICDESK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record counts and stock warnings
    Summary,
    /// Patient records
    #[command(subcommand)]
    Patient(PatientCommand),
    /// Doctor records
    #[command(subcommand)]
    Doctor(DoctorCommand),
    /// Pharmacy inventory
    #[command(subcommand)]
    Medicine(MedicineCommand),
    /// Login accounts
    #[command(subcommand)]
    User(UserCommand),
    /// Write a plain-text report under the reports directory
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Debug, Subcommand)]
enum PatientCommand {
    List,
    Show {
        id: String,
    },
    Search {
        query: Option<String>,
    },
    Add {
        /// Generated when omitted
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        contact: String,
        #[arg(long, default_value = "")]
        disease: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum DoctorCommand {
    List,
    Search { query: Option<String> },
}

#[derive(Debug, Subcommand)]
enum MedicineCommand {
    List,
    Search {
        query: Option<String>,
    },
    /// Medicines below the low-stock threshold
    LowStock,
    /// Take units out of stock
    Dispense {
        id: String,
        amount: u32,
    },
    /// Put units back into stock
    Restock {
        id: String,
        amount: u32,
    },
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    List,
    Login {
        username: String,
        #[arg(long, env = "CLINICDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Debug, Subcommand)]
enum ReportCommand {
    Patient { id: String },
    Inventory,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast::<AppError>() {
                Ok(app_error) => eprintln!("{}", ErrorResponse::from_app_error(app_error).to_json()),
                Err(other) => eprintln!("Error: {:#}", other),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(cli.data_dir)?;
    let state = AppState::initialize(config)?;
    let json = cli.json;

    match cli.command {
        Commands::Summary => {
            let summary = state.dashboard_service.summary()?;
            if json {
                print_json(&summary)?;
            } else {
                println!("Patients:      {}", summary.total_patients);
                println!("Doctors:       {}", summary.total_doctors);
                println!("Medicines:     {}", summary.total_medicines);
                println!("Users:         {}", summary.total_users);
                println!(
                    "Low stock:     {} (below {})",
                    summary.low_stock_medicines, summary.low_stock_threshold
                );
                println!("Out of stock:  {}", summary.out_of_stock_medicines);
            }
        }

        Commands::Patient(command) => {
            let service = &state.patient_service;
            match command {
                PatientCommand::List => print_all(&service.list_patients()?, json)?,
                PatientCommand::Show { id } => {
                    let patient = service.get_patient(&id)?.ok_or(AppError::NotFound)?;
                    print_all(std::slice::from_ref(&patient), json)?;
                }
                PatientCommand::Search { query } => {
                    print_all(&service.search_patients(query.as_deref())?, json)?
                }
                PatientCommand::Add {
                    id,
                    name,
                    age,
                    contact,
                    disease,
                    email,
                } => {
                    let patient = service.register_patient(CreatePatientRequest {
                        id,
                        name,
                        age,
                        contact,
                        disease,
                        email,
                        ..Default::default()
                    })?;
                    println!("{}", patient.id);
                }
                PatientCommand::Delete { id } => service.delete_patient(&id)?,
            }
        }

        Commands::Doctor(command) => {
            let service = &state.doctor_service;
            match command {
                DoctorCommand::List => print_all(&service.list_doctors()?, json)?,
                DoctorCommand::Search { query } => {
                    print_all(&service.search_doctors(query.as_deref())?, json)?
                }
            }
        }

        Commands::Medicine(command) => {
            let service = &state.medicine_service;
            match command {
                MedicineCommand::List => print_all(&service.list_medicines()?, json)?,
                MedicineCommand::Search { query } => {
                    print_all(&service.search_medicines(query.as_deref())?, json)?
                }
                MedicineCommand::LowStock => print_all(&service.low_stock_medicines()?, json)?,
                MedicineCommand::Dispense { id, amount } => {
                    let medicine = service.dispense(&id, amount)?;
                    println!("{}: {} left", medicine.medicine_id, medicine.quantity);
                }
                MedicineCommand::Restock { id, amount } => {
                    let medicine = service.restock(&id, amount)?;
                    println!("{}: {} in stock", medicine.medicine_id, medicine.quantity);
                }
            }
        }

        Commands::User(command) => {
            let service = &state.user_service;
            match command {
                UserCommand::List => {
                    for user in service.list_users()? {
                        let status = if user.active { "active" } else { "inactive" };
                        println!("{} ({}) {} [{}]", user.username, user.role, user.full_name, status);
                    }
                }
                UserCommand::Login { username, password } => {
                    let user = service.authenticate(&username, &password)?;
                    println!("Welcome, {} ({})", user.full_name, user.role);
                }
            }
        }

        Commands::Report(command) => {
            let reports_dir = state.config.reports_dir();
            let written = match command {
                ReportCommand::Patient { id } => {
                    let patient = state
                        .patient_service
                        .get_patient(&id)?
                        .ok_or(AppError::NotFound)?;
                    PatientReport::new()
                        .write_report(&patient, &reports_dir.join(format!("patient_{}.txt", id)))?
                }
                ReportCommand::Inventory => {
                    let medicines = state.medicine_service.list_medicines()?;
                    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
                    InventoryReport::new(state.medicine_service.low_stock_threshold())
                        .write_report(
                            medicines.as_slice(),
                            &reports_dir.join(format!("inventory_{}.txt", stamp)),
                        )?
                }
            };
            println!("{}", written.display());
        }
    }

    Ok(())
}

fn print_all<T: Serialize + std::fmt::Display>(records: &[T], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(records);
    }
    if records.is_empty() {
        println!("No records found.");
    }
    for record in records {
        println!("{}", record);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", text);
    Ok(())
}
