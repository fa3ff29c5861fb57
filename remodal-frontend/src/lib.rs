#![allow(clippy::too_many_lines)]

pub mod components;

mod client;
mod controller;
mod dialog;
mod error;
mod handler;
mod trigger;

pub use client::{Client, Method, Payload, Response};
pub use controller::Controller;
pub use dialog::Dialog;
pub use error::{Error, Http};
pub use handler::{Handler, SUCCESS_EVENT};
pub use trigger::{Confirm, Trigger};
