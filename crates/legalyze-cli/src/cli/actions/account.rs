use anyhow::{bail, Result};
use legalyze_core::models::{AccountType, PasswordChange, Registration, UserProfile};
use tracing::info;

use super::output::{print_json, prompt, prompt_password};
use super::Context;

#[derive(Debug)]
pub struct Login {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct Signup {
    pub username: String,
    pub email: String,
    pub account_type: AccountType,
}

pub async fn login(ctx: &Context, args: Login) -> Result<()> {
    let email = match args.email.or_else(|| ctx.config.last_email.clone()) {
        Some(email) => email,
        None => prompt("Email: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_password(&format!("Password for {email}: "))?,
    };

    let user = ctx.client.login(&email, &password).await?;
    ctx.remember_email(&email)?;
    info!(username = %user.username, "Logged in");

    if ctx.json {
        return print_json(&user);
    }
    println!("Logged in as {} ({})", user.display_name(), user.account_type);
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.client.logout()?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    match ctx.client.restore().await? {
        Some(user) if ctx.json => print_json(&user),
        Some(user) => {
            print_profile(&user);
            Ok(())
        }
        None => bail!("Not logged in. Run `legalyze login` first"),
    }
}

fn print_profile(user: &UserProfile) {
    println!("Username: {}", user.username);
    println!("Email:    {}", user.email);
    println!("Role:     {}", user.account_type);
    if !user.is_active {
        println!("Status:   disabled");
    }
}

pub async fn signup(ctx: &Context, args: Signup) -> Result<()> {
    let password = prompt_password("Password: ")?;
    let confirm_password = prompt_password("Confirm password: ")?;

    let registration = Registration {
        username: args.username,
        email: args.email,
        password,
        confirm_password,
        account_type: args.account_type,
    };
    let user = ctx.client.register(&registration).await?;
    ctx.remember_email(&user.email)?;

    println!("Account {} created. Log in with `legalyze login`.", user.username);
    Ok(())
}

pub async fn change_password(ctx: &Context) -> Result<()> {
    let change = PasswordChange {
        old_password: prompt_password("Current password: ")?,
        new_password: prompt_password("New password: ")?,
        confirm_password: prompt_password("Confirm new password: ")?,
    };
    let response = ctx.client.change_password(&change).await?;
    println!(
        "{}",
        response.message.as_deref().unwrap_or("Password changed")
    );
    Ok(())
}
