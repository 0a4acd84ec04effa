//! Account settings panel.

use colored::Colorize;
use kisaan_core::session::Session;

/// Renders the signed-in account's details.
pub fn render(session: &Session) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Account Settings".bright_green().bold()));
    out.push_str(&format!("  Farmer name   {}\n", session.name.bold()));
    out.push_str(&format!("  Email         {}\n", session.email));
    out.push_str(&format!("  Farm          {}\n", session.farm_name));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shows_account_fields() {
        let session = Session::new("Asha", "a@x.com", "Green Acres");
        let rendered = render(&session);
        assert!(rendered.contains("Asha"));
        assert!(rendered.contains("a@x.com"));
        assert!(rendered.contains("Green Acres"));
    }
}
