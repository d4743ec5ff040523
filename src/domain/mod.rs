mod login_email;
mod login_form_fields;

pub use login_email::*;
pub use login_form_fields::*;
