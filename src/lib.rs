pub mod configuration;
pub mod domain;
pub mod identity;
pub mod login_client;
pub mod login_form;
pub mod routes;
pub mod session_bootstrap;
pub mod startup;
pub mod telemetry;
