//! Core application logic: navigation state, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod image;
pub mod section;
pub mod state;
