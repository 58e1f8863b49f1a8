use anyhow::Result;

/// Uses the password given on the command line, or asks for it.
pub fn password_or_prompt(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let password = if confirm {
        dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?
    } else {
        dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?
    };

    Ok(password)
}
