use super::models::Platform;

/// Human-readable platform name for reports
pub fn platform_label(platform: Platform) -> &'static str {
    match platform {
        Platform::ListFortress => "List Fortress",
        Platform::Longshanks => "Longshanks",
        Platform::RollBetter => "Rollbetter",
    }
}
