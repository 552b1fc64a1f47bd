mod login_form;
mod registration_form;
