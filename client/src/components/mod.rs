//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio's chrome and section bodies from the static
//! tables in `content`. Only the navbar touches state (the theme signal).

pub mod contact_form;
pub mod experience_card;
pub mod nav_bar;
pub mod project_card;
pub mod reveal_section;
pub mod site_footer;
pub mod skill_group;
pub mod theme_toggle;
