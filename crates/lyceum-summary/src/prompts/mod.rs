//! Prompt templates for parent-facing summary generation.

pub mod parent_email;

pub use parent_email::{
    parent_email_user_prompt, PARENT_EMAIL_SYSTEM, PARENT_EMAIL_USER_TEMPLATE,
    PROMPT_DESIGN_NOTES,
};
