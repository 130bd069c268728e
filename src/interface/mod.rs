pub mod prompts;
pub mod render;

pub use prompts::{
    ProfileDraft, collect_profile, prompt_activity_level, prompt_adjustment_percent, prompt_age,
    prompt_goal, prompt_height, prompt_sex, prompt_weight,
};
pub use render::{
    CatalogListing, PlanReport, display_catalog, display_plan, display_plan_json, format_catalog,
    format_plan,
};
