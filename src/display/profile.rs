//! Profile display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::UserProfile;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// Format profiles as a table
pub fn format_profile_list(profiles: &[UserProfile]) -> String {
    if profiles.is_empty() {
        return "No profiles found.".to_string();
    }

    let rows = profiles.iter().map(|p| ProfileRow {
        id: p.id.to_string(),
        name: p.full_name(),
        email: p.email.clone(),
        created: p.created_at.format("%Y-%m-%d %H:%M").to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format one profile's details
pub fn format_profile_details(profile: &UserProfile) -> String {
    format!(
        "Profile: {}\n  ID:      {}\n  Email:   {}\n  Created: {}\n",
        profile.full_name(),
        profile.id,
        profile.email,
        profile.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
