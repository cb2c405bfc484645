use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use bill_maker::{config, format, pdf, print, Bill, ShopProfile};

#[derive(Parser)]
#[command(name = "bill-maker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive billing session
    New,
    /// Edit the shop profile printed on every receipt
    Config,
    /// Send an existing receipt PDF to the default printer
    Print {
        /// Path to the PDF file
        file: PathBuf,
    },
}

const ACTION_ADD: &str = "Add Item";
const ACTION_SHOW: &str = "Show Bill";
const ACTION_SAVE: &str = "Save PDF";
const ACTION_PRINT: &str = "Save and Print";
const ACTION_CLEAR: &str = "Clear";
const ACTION_QUIT: &str = "Quit";

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.command.is_none() {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    }

    match cli.command.unwrap() {
        Commands::New => {
            let profile = config::load_or_init()?;
            billing_session(&profile)
        }
        Commands::Config => profile_wizard(),
        Commands::Print { file } => {
            match print::dispatch(&file) {
                Ok(()) => println!("✅ Sent {} to the default printer", file.display()),
                Err(e) => println!("❌ {}", e),
            }
            Ok(())
        }
    }
}

// ==========================================
// Billing Session
// ==========================================

fn billing_session(profile: &ShopProfile) -> Result<()> {
    let mut bill = prompt_identity()?;

    loop {
        let actions = vec![
            ACTION_ADD,
            ACTION_SHOW,
            ACTION_SAVE,
            ACTION_PRINT,
            ACTION_CLEAR,
            ACTION_QUIT,
        ];
        let choice = match Select::new("Action:", actions).prompt() {
            Ok(c) => c,
            Err(_) => break,
        };

        match choice {
            ACTION_ADD => add_item(&mut bill),
            ACTION_SHOW => show_bill(&bill),
            ACTION_SAVE => {
                save_pdf(&bill, profile);
            }
            ACTION_PRINT => save_and_print(&bill, profile),
            ACTION_CLEAR => {
                bill.clear();
                println!("🧹 Bill cleared");
                bill = prompt_identity()?;
            }
            _ => break,
        }
    }
    Ok(())
}

fn prompt_identity() -> Result<Bill> {
    let name = Text::new("Customer Name:").prompt().unwrap_or_default();
    let phone = Text::new("Phone Number:").prompt().unwrap_or_default();
    Ok(Bill::new(&name, &phone))
}

fn add_item(bill: &mut Bill) {
    let name = Text::new("Item Name:").prompt().unwrap_or_default();
    let quantity: u32 = Text::new("Item Quantity:")
        .prompt()
        .unwrap_or_default()
        .trim()
        .parse()
        .unwrap_or(0);
    let price: f64 = Text::new("Item Price:")
        .prompt()
        .unwrap_or_default()
        .trim()
        .parse()
        .unwrap_or(0.0);

    match bill.add_item(&name, quantity, price) {
        Ok(()) => {
            println!("✅ Added item: {} (x{}) - {:.2} each", name, quantity, price);
            show_bill(bill);
        }
        Err(e) => println!("⚠️  {}", e),
    }
}

fn show_bill(bill: &Bill) {
    match format::preview(bill, Local::now()) {
        Ok(text) => println!("\n{}", text),
        Err(e) => println!("⚠️  {}", e),
    }
}

fn save_pdf(bill: &Bill, profile: &ShopProfile) -> Option<PathBuf> {
    match pdf::export(bill, profile, Path::new("."), Local::now()) {
        Ok(path) => {
            println!("✅ PDF saved as {}", path.display());
            Some(path)
        }
        Err(e) if e.is_validation() => {
            println!("⚠️  {}", e);
            None
        }
        Err(e) => {
            println!("❌ {}", e);
            None
        }
    }
}

fn save_and_print(bill: &Bill, profile: &ShopProfile) {
    let Some(path) = save_pdf(bill, profile) else {
        return;
    };
    match print::dispatch(&path) {
        Ok(()) => println!("🖨️  Sent to the default printer"),
        Err(e) => println!("❌ {}", e),
    }
}

// ==========================================
// Shop Profile Wizard
// ==========================================

fn profile_wizard() -> Result<()> {
    let current = config::load_or_init()?;
    println!("\n--- Shop Profile ---");

    let name = Text::new("Shop Name:")
        .with_default(&current.name)
        .prompt()?;
    let address = Text::new("Address:")
        .with_default(&current.address)
        .prompt()?;
    let phone = Text::new("Contact Number:")
        .with_default(&current.phone)
        .prompt()?;
    let footer = Text::new("Receipt Footer:")
        .with_default(&current.footer)
        .prompt()?;

    let profile = ShopProfile {
        name,
        address,
        phone,
        footer,
    };
    config::save(&profile)?;
    println!("✅ Profile saved to {}", config::profile_path().display());
    Ok(())
}
