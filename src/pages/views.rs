//! Server-rendered pages. Each view takes the pending flash, if any, and
//! injects it above the page body.

use axum::response::Html;

use crate::auth::session::{Flash, FlashLevel};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn flash_banner(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => {
            let class = match flash.level {
                FlashLevel::Danger => "danger",
                FlashLevel::Success => "success",
            };
            format!(
                "<p class=\"flash {class}\">{}</p>\n",
                escape(&flash.message)
            )
        }
        None => String::new(),
    }
}

fn page(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{title}</title></head>\n\
         <body>\n\
         {flash}{body}\n\
         </body>\n\
         </html>\n",
        flash = flash_banner(flash),
    ))
}

pub fn home_page(flash: Option<&Flash>) -> Html<String> {
    page(
        "Home",
        flash,
        "<h1>Welcome</h1>\n\
         <p><a href=\"/signup\">Sign up</a> or <a href=\"/login\">Log in</a>.</p>",
    )
}

pub fn signup_page(flash: Option<&Flash>) -> Html<String> {
    page(
        "Sign up",
        flash,
        "<h1>Sign up</h1>\n\
         <form method=\"post\" action=\"/signup\">\n\
         <label>First name <input type=\"text\" name=\"first_name\" required></label>\n\
         <label>Last name <input type=\"text\" name=\"last_name\" required></label>\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <label>Confirm password <input type=\"password\" name=\"confirm_password\" required></label>\n\
         <button type=\"submit\">Sign up</button>\n\
         </form>",
    )
}

pub fn login_page(flash: Option<&Flash>) -> Html<String> {
    page(
        "Log in",
        flash,
        "<h1>Log in</h1>\n\
         <form method=\"post\" action=\"/login\">\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>",
    )
}

pub fn secret_page(flash: Option<&Flash>) -> Html<String> {
    page(
        "Secret page",
        flash,
        "<h1>This is the secret page</h1>\n\
         <p>Only logged-in users can see this.</p>\n\
         <p><a href=\"/logout\">Log out</a></p>",
    )
}

pub fn thank_you_page(flash: Option<&Flash>) -> Html<String> {
    page(
        "Thank you",
        flash,
        "<h1>Thank you for signing up!</h1>\n\
         <p><a href=\"/login\">Log in</a></p>",
    )
}
