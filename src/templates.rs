//! Compile-time embedded templates for generated MCP servers.
//!
//! Each entry loads a template file from `templates/` via [`include_str!`], keyed by
//! its logical identifier (the path below `templates/`). The set is closed: it is
//! versioned together with the tool and nothing is read from disk at runtime.
//!
//! Do NOT rename or move template files without updating the identifiers here and in
//! the manifest tables.

/// Every bundled template as `(identifier, source)`.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("root/AUTH.md.j2", include_str!("../templates/root/AUTH.md.j2")),
    ("root/README.md.j2", include_str!("../templates/root/README.md.j2")),
    ("root/auth_config.py.j2", include_str!("../templates/root/auth_config.py.j2")),
    ("root/completions.py.j2", include_str!("../templates/root/completions.py.j2")),
    ("root/demo.py.j2", include_str!("../templates/root/demo.py.j2")),
    ("root/pyproject.toml.j2", include_str!("../templates/root/pyproject.toml.j2")),
    ("root/roots_config.py.j2", include_str!("../templates/root/roots_config.py.j2")),
    ("core/__init__.py.j2", include_str!("../templates/core/__init__.py.j2")),
    ("core/__main__.py.j2", include_str!("../templates/core/__main__.py.j2")),
    ("core/auth_middleware.py.j2", include_str!("../templates/core/auth_middleware.py.j2")),
    ("core/server.py.j2", include_str!("../templates/core/server.py.j2")),
    ("core/server_http.py.j2", include_str!("../templates/core/server_http.py.j2")),
    ("core/server_sse.py.j2", include_str!("../templates/core/server_sse.py.j2")),
    ("core/server_stdio.py.j2", include_str!("../templates/core/server_stdio.py.j2")),
    ("services/__init__.py.j2", include_str!("../templates/services/__init__.py.j2")),
    ("services/auth_service.py.j2", include_str!("../templates/services/auth_service.py.j2")),
    ("services/completion_service.py.j2", include_str!("../templates/services/completion_service.py.j2")),
    ("services/prompt_service.py.j2", include_str!("../templates/services/prompt_service.py.j2")),
    ("services/resource_service.py.j2", include_str!("../templates/services/resource_service.py.j2")),
    ("services/root_service.py.j2", include_str!("../templates/services/root_service.py.j2")),
    ("services/tool_service.py.j2", include_str!("../templates/services/tool_service.py.j2")),
    ("interfaces/__init__.py.j2", include_str!("../templates/interfaces/__init__.py.j2")),
    ("interfaces/prompt.py.j2", include_str!("../templates/interfaces/prompt.py.j2")),
    ("interfaces/resource.py.j2", include_str!("../templates/interfaces/resource.py.j2")),
    ("interfaces/tool.py.j2", include_str!("../templates/interfaces/tool.py.j2")),
    ("tools/__init__.py.j2", include_str!("../templates/tools/__init__.py.j2")),
    ("tools/add_numbers.py.j2", include_str!("../templates/tools/add_numbers.py.j2")),
    ("tools/approval_elicitation.py.j2", include_str!("../templates/tools/approval_elicitation.py.j2")),
    ("tools/current_time.py.j2", include_str!("../templates/tools/current_time.py.j2")),
    ("tools/date_difference.py.j2", include_str!("../templates/tools/date_difference.py.j2")),
    ("tools/greeting_elicitation.py.j2", include_str!("../templates/tools/greeting_elicitation.py.j2")),
    ("tools/meeting_planner_elicitation.py.j2", include_str!("../templates/tools/meeting_planner_elicitation.py.j2")),
    ("tools/random_number.py.j2", include_str!("../templates/tools/random_number.py.j2")),
    ("tools/reasoning_tool.py.j2", include_str!("../templates/tools/reasoning_tool.py.j2")),
    ("tools/reverse_string.py.j2", include_str!("../templates/tools/reverse_string.py.j2")),
    ("tools/task_creation_elicitation.py.j2", include_str!("../templates/tools/task_creation_elicitation.py.j2")),
    ("tools/weather_tool.py.j2", include_str!("../templates/tools/weather_tool.py.j2")),
    ("resources/__init__.py.j2", include_str!("../templates/resources/__init__.py.j2")),
    ("resources/hello_world.py.j2", include_str!("../templates/resources/hello_world.py.j2")),
    ("resources/user_profile.py.j2", include_str!("../templates/resources/user_profile.py.j2")),
    ("prompts/__init__.py.j2", include_str!("../templates/prompts/__init__.py.j2")),
    ("prompts/code_review.py.j2", include_str!("../templates/prompts/code_review.py.j2")),
    ("prompts/data_analysis.py.j2", include_str!("../templates/prompts/data_analysis.py.j2")),
    ("prompts/debug_assistant.py.j2", include_str!("../templates/prompts/debug_assistant.py.j2")),
];

/// Looks up the source of a bundled template.
pub fn source(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(template, _)| *template == name)
        .map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique() {
        let mut names: Vec<_> = TEMPLATES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TEMPLATES.len());
    }

    #[test]
    fn unknown_identifier_has_no_source() {
        assert!(source("core/server.py.j2").is_some());
        assert!(source("core/missing.py.j2").is_none());
    }
}
