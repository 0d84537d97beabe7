//! Profile CLI commands

use clap::Subcommand;

use crate::display::profile::{format_profile_details, format_profile_list};
use crate::error::{BudgetError, BudgetResult};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create a new profile
    Create {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Email address (must be unique)
        email: String,
    },
    /// Look up a returning user by email
    SignIn {
        /// Email address
        email: String,
    },
    /// List all profiles
    List,
    /// Find a profile by email
    Find {
        /// Email address
        email: String,
    },
}

/// Handle a profile command
pub fn handle_profile_command(storage: &Storage, cmd: ProfileCommands) -> BudgetResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ProfileCommands::Create {
            first_name,
            last_name,
            email,
        } => {
            let user = service.register(&first_name, &last_name, &email)?;
            println!("Created profile: {}", user.display_name());
            println!("  Email: {}", user.profile.email);
            println!("  ID:    {}", user.profile.id);
        }

        ProfileCommands::SignIn { email } => {
            let user = service.sign_in(&email)?;
            println!("Welcome back, {}!", user.display_name());
        }

        ProfileCommands::List => {
            let profiles = service.list()?;
            println!("{}", format_profile_list(&profiles));
        }

        ProfileCommands::Find { email } => {
            let profile = service.find(&email)?.ok_or_else(|| BudgetError::NotFound {
                entity_type: "Profile",
                identifier: email.clone(),
            })?;
            print!("{}", format_profile_details(&profile));
        }
    }

    Ok(())
}
