//! Smokefree - backend for a twelve-week smoking-cessation program.
//!
//! Scores nicotine dependence with the Fagerström questionnaire, collects
//! the onboarding anamnesis, tracks smoke-free progress and savings, and
//! serves the program calendar and community chat over HTTP.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
