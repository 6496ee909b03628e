//! PDF Protect CLI tool
//!
//! Creates an AES-256 password-protected, date-stamped copy of a PDF in an
//! OUTPUT folder. Passwords may be passed as flags or entered interactively;
//! interactive input is VISIBLE on screen.

use std::path::{Path, PathBuf};
use std::process;

use ansi_term::{Colour, Style};
use anyhow::Context;
use chrono::{Duration, Local};
use clap::Parser;

use pdf_protect::naming::resolve_output_path;
use pdf_protect::password::{check_owner_password, check_strength};
use pdf_protect::pdf::{encrypt_pdf, EncryptOptions, PermissionSet};
use pdf_protect::term::{
    confirm, print_banner, print_box, print_status, prompt, set_window_title, Status,
};

/// Days after which the generated copy is considered expired (display only)
const RETENTION_DAYS: i64 = 30;

/// PDF Protect - Password-protect PDFs with AES-256 encryption
#[derive(Parser)]
#[command(name = "pdf-protect")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Fully interactive: prompts for the input path and passwords
    pdf-protect

    # Protect a file, prompting only for passwords
    pdf-protect report.pdf

    # Non-interactive, same password for user and owner
    pdf-protect report.pdf --user-password 'Abcdef1!'

    # Non-interactive with a distinct owner password
    pdf-protect report.pdf --user-password 'Abcdef1!' --owner-password 'Abcdef1!xxxx'")]
struct Cli {
    /// Input PDF file (prompted for interactively when omitted)
    input: Option<PathBuf>,

    /// User password, min 8 characters (prompted for interactively when omitted)
    #[arg(long)]
    user_password: Option<String>,

    /// Owner password, min 12 characters and distinct from the user password
    /// (defaults to the user password)
    #[arg(long, requires = "user_password")]
    owner_password: Option<String>,

    /// Proceed even when the password fails the strength check
    #[arg(long)]
    force: bool,

    /// Base directory for the OUTPUT folder (default: parent of the
    /// executable's directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Suppress the startup banner
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        println!();
        print_box(&format!("FATAL ERROR\n{}", e), Colour::Red);
        println!();
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    set_window_title("PDF Password Protection Tool");

    if !cli.no_banner {
        println!();
        print_banner();
        println!();
        println!();
    }

    // Input path: positional argument or interactive prompt
    let input = match &cli.input {
        Some(path) => path.clone(),
        None => PathBuf::from(
            prompt("📄 Enter path to unprotected PDF: ")
                .context("Failed to read input path")?
                .trim(),
        ),
    };

    if !input.exists() {
        print_status(Status::Error, &format!("File not found: {}", input.display()));
        process::exit(1);
    }

    println!();
    print_status(
        Status::Info,
        &format!(
            "Processing: {}",
            input.file_name().unwrap_or_default().to_string_lossy()
        ),
    );

    let (user_password, owner_password) = match &cli.user_password {
        Some(user) => passwords_from_args(user, cli.owner_password.as_deref(), cli.force)?,
        None => password_setup()?,
    };

    println!();
    print_status(Status::Info, "Encrypting PDF with AES-256...");

    let base_dir = cli.base_dir.clone().unwrap_or_else(default_base_dir);
    let output = resolve_output_path(&input, &base_dir, Local::now().date_naive())?;

    let options = EncryptOptions {
        input_path: input,
        output_path: output.clone(),
        user_password,
        owner_password,
        permissions: PermissionSet::default(),
    };
    encrypt_pdf(&options)?;

    report_success(&output);

    println!();
    print_box(
        "COMPLETE\nPDF password protection completed successfully",
        Colour::Green,
    );
    println!();

    Ok(())
}

/// Validate passwords supplied as command-line flags.
///
/// A failed strength check is fatal unless --force is given; the
/// owner-password rule is always fatal.
fn passwords_from_args(
    user: &str,
    owner: Option<&str>,
    force: bool,
) -> anyhow::Result<(String, String)> {
    if let Err(e) = check_strength(user) {
        if force {
            print_status(Status::Warning, &e.to_string());
        } else {
            anyhow::bail!("{} (use --force to accept a weak password)", e);
        }
    }

    let owner_password = match owner {
        Some(owner) => {
            check_owner_password(user, owner)?;
            owner.to_string()
        }
        None => user.to_string(),
    };

    Ok((user.to_string(), owner_password))
}

/// Interactive password setup with VISIBLE input.
///
/// A weak user password may be accepted after explicit consent; an invalid
/// owner password is re-prompted for until it satisfies the rule.
fn password_setup() -> anyhow::Result<(String, String)> {
    loop {
        println!();
        print_box("PASSWORD SETUP", Colour::Yellow);
        print_status(Status::Warning, "Password will be VISIBLE on screen");
        println!();

        let user_password =
            prompt("Enter user password (to open PDF): ").context("Failed to read password")?;

        if let Err(e) = check_strength(&user_password) {
            print_status(Status::Warning, &e.to_string());
            if !confirm("Use this password anyway? (yes/no): ", Colour::Yellow)? {
                continue;
            }
        }

        let owner_password = if confirm(
            "Use different owner password for editing restrictions? (yes/no): ",
            Colour::Cyan,
        )? {
            loop {
                let owner = prompt("Enter owner password (for editing permissions, min 12 chars): ")
                    .context("Failed to read password")?;

                match check_owner_password(&user_password, &owner) {
                    Ok(()) => break owner,
                    Err(e) => print_status(Status::Error, &e.to_string()),
                }
            }
        } else {
            user_password.clone()
        };

        return Ok((user_password, owner_password));
    }
}

/// Base directory for the OUTPUT folder: the parent of the directory
/// containing the executable, falling back to the current directory.
fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn report_success(output: &Path) {
    let expiration = Local::now().date_naive() + Duration::days(RETENTION_DAYS);
    let bold = Style::new().bold();

    println!();
    print_box("SUCCESS", Colour::Green);
    print_status(Status::Success, "Password-protected PDF created");
    println!(
        "   {} OUTPUT/{}",
        bold.paint("📁 Location:"),
        output.file_name().unwrap_or_default().to_string_lossy()
    );
    println!();
    print_status(
        Status::Time,
        &format!("File expires on: {}", expiration.format("%Y-%m-%d")),
    );
    print_status(Status::Lock, "Encryption: AES-256 (Military-grade)");
    println!();
    println!("   {}", Colour::Cyan.paint("📋 Permissions:"));
    println!("      ✓ Printing: Allowed (High-Quality)");
    println!("      ✓ Copying: Allowed (with owner password)");
    println!("      ✓ Modification: Allowed (with owner password)");
    println!("      ✓ Annotations: Allowed (with owner password)");
}
