// src/templates/signup.rs
use super::{render_page, DEFAULT_SCRIPT_SRC};
use crate::dom::{
    CLOSE_POPUP_ID, EMAIL_ID, FIRST_NAME_ID, LAST_NAME_ID, SIGNUP_FORM_ID, SUCCESS_POPUP_ID,
};

pub fn render() -> String {
    render_with_script(DEFAULT_SCRIPT_SRC)
}

pub fn render_with_script(script_src: &str) -> String {
    // No `required` and `novalidate`: empty values are submitted as-is
    let content = format!(
        r#"
    <div class="auth-container">
        <h1>📰 Join the Newsletter</h1>
        <form class="auth-form" id="{form}" novalidate>
            <div class="form-group">
                <label for="{first}">First Name</label>
                <input type="text" id="{first}" name="{first}" autocomplete="given-name">
            </div>
            <div class="form-group">
                <label for="{last}">Last Name</label>
                <input type="text" id="{last}" name="{last}" autocomplete="family-name">
            </div>
            <div class="form-group">
                <label for="{email}">Email</label>
                <input type="email" id="{email}" name="{email}" autocomplete="email">
            </div>
            <button type="submit" class="btn btn-primary btn-full">Sign Up</button>
        </form>
    </div>

    <div class="popup" id="{popup}" style="display: none;">
        <div class="success-message">
            <p>✅ Thanks for signing up!</p>
            <button type="button" class="btn" id="{close}">Close</button>
        </div>
    </div>
    "#,
        form = SIGNUP_FORM_ID,
        first = FIRST_NAME_ID,
        last = LAST_NAME_ID,
        email = EMAIL_ID,
        popup = SUCCESS_POPUP_ID,
        close = CLOSE_POPUP_ID,
    );

    render_page("Sign Up", &content, script_src)
}
