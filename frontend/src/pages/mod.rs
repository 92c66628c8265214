pub mod chatbot;
pub mod community;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod microfinance;
pub mod newsletter;
pub mod register;
