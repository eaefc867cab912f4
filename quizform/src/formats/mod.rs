//! Output format implementations

pub mod html;
pub mod json;

/// The stylesheet embedded in every standalone HTML page.
pub fn get_default_css() -> &'static str {
    include_str!("../../css/quizform.css")
}
