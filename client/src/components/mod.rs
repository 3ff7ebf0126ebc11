//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs and form pieces for the profile page and own
//! only the transient state their modal needs.

pub mod alert;
pub mod code_input;
pub mod confirmation_dialog;
pub mod field_error;
pub mod password_change_modal;
